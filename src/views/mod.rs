//! View generator - declarative HTML views over plain records
//!
//! A view is a fixed configuration (fields, actions, template name) applied to
//! records at request time:
//! - [`TableView`] renders many records as rows using each field's short form
//! - [`DetailView`] renders one record using each field's full form
//!
//! Views never build markup themselves. They evaluate fields and actions into
//! plain rows, then hand those rows to a named template.
//!
//! Template bindings:
//! - table templates get `table` (view metadata) and `data` (rows)
//! - detail templates get `detail` (view metadata) and `record` (one row)

mod action;
mod detail;
mod error;
mod field;
mod table;

use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub use action::{TableViewAction, UrlResolver};
pub use detail::DetailView;
pub use error::ViewError;
pub use field::Field;
pub use table::TableView;

use crate::templates::Templates;

/// A data object the view layer can project
///
/// Views only ever see records through this trait: a primary key for action
/// URLs, and by-name attribute lookup for fields without a typed accessor.
pub trait Record {
    /// Identifier used to build per-record URLs
    fn pk(&self) -> String;

    /// Look up an attribute by name; `None` if the record has no such attribute
    fn attribute(&self, name: &str) -> Option<Value>;
}

/// HTML that is already escaped and safe to embed in another template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wrap HTML the caller already trusts; no escaping is applied
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Template value that bypasses auto-escaping
    pub fn to_value(&self) -> minijinja::Value {
        minijinja::Value::from_safe_string(self.0.clone())
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything a view needs from its host at render time
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub templates: &'a Templates,
    pub urls: &'a dyn UrlResolver,
}

/// Fixed configuration of a view, supplied whole at construction
pub struct ViewConfig<R> {
    pub fields: Vec<Field<R>>,
    pub actions: Vec<TableViewAction>,
    pub template: Option<String>,
}

impl<R> Clone for ViewConfig<R> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            actions: self.actions.clone(),
            template: self.template.clone(),
        }
    }
}

impl<R> fmt::Debug for ViewConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewConfig")
            .field("fields", &self.fields)
            .field("actions", &self.actions)
            .field("template", &self.template)
            .finish()
    }
}

impl<R> Default for ViewConfig<R> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            actions: Vec::new(),
            template: None,
        }
    }
}

impl<R> ViewConfig<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(mut self, fields: impl IntoIterator<Item = Field<R>>) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn actions(mut self, actions: impl IntoIterator<Item = TableViewAction>) -> Self {
        self.actions.extend(actions);
        self
    }

    pub fn template(mut self, name: impl Into<String>) -> Self {
        self.template = Some(name.into());
        self
    }

    /// The template name, or `TemplateNotFound` if none was configured
    fn template_name(&self) -> Result<&str, ViewError> {
        self.template
            .as_deref()
            .ok_or_else(|| ViewError::TemplateNotFound("view has no template".to_string()))
    }

    /// Field and action metadata exposed to templates
    fn meta(&self) -> ViewMeta<'_> {
        ViewMeta {
            fields: self
                .fields
                .iter()
                .map(|f| FieldMeta {
                    source: f.source(),
                    label: f.label(),
                })
                .collect(),
            actions: &self.actions,
        }
    }
}

#[derive(Serialize)]
struct FieldMeta<'a> {
    source: &'a str,
    label: &'a str,
}

#[derive(Serialize)]
struct ViewMeta<'a> {
    fields: Vec<FieldMeta<'a>>,
    actions: &'a [TableViewAction],
}

/// A resolved action for one record
#[derive(Debug, Serialize)]
struct ActionLink {
    label: String,
    url: String,
}

fn action_links<R: Record>(
    actions: &[TableViewAction],
    record: &R,
    urls: &dyn UrlResolver,
) -> Result<Vec<ActionLink>, ViewError> {
    actions
        .iter()
        .map(|action| {
            Ok(ActionLink {
                label: action.label.clone(),
                url: action.get_url(record, urls)?,
            })
        })
        .collect()
}
