//! Field descriptors - one renderable projection of a record attribute
//!
//! A field knows where its value comes from (an accessor bound when the field
//! is configured) and how to turn that value into HTML in two sizes:
//! - `render_short`: compact, for table cells
//! - `render`: complete, for detail pages
//!
//! Both outputs are HTML-escaped and safe to insert into a template verbatim.

use std::fmt;
use std::sync::Arc;

use minijinja::HtmlEscape;
use serde_json::Value;

use super::{Record, ViewError};
use crate::util::truncate_to_width;

/// Extracts a field's value from a record; `None` means the attribute is absent
pub type Accessor<R> = Arc<dyn Fn(&R) -> Option<Value> + Send + Sync>;

/// How a field turns its value into HTML
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Stringified value, identical in both sizes
    Text,
    /// Full text in detail views, cut to `width` display columns in tables
    TruncatedText { width: usize },
}

/// A named, renderable projection of one record attribute
pub struct Field<R> {
    source: String,
    label: String,
    kind: FieldKind,
    accessor: Accessor<R>,
}

impl<R: Record + 'static> Field<R> {
    /// Text field that looks `source` up by name through [`Record::attribute`]
    pub fn text(source: impl Into<String>) -> Self {
        let source = source.into();
        let name = source.clone();
        Self::new(
            source,
            FieldKind::Text,
            Arc::new(move |record: &R| record.attribute(&name)),
        )
    }
}

impl<R: 'static> Field<R> {
    fn new(source: String, kind: FieldKind, accessor: Accessor<R>) -> Self {
        Self {
            label: source.clone(),
            source,
            kind,
            accessor,
        }
    }

    /// Text field with a typed accessor bound at configuration time
    pub fn text_with<F>(source: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&R) -> Value + Send + Sync + 'static,
    {
        Self::new(
            source.into(),
            FieldKind::Text,
            Arc::new(move |record: &R| Some(accessor(record))),
        )
    }
}

impl<R> Field<R> {
    /// Set the display label. An empty label keeps the source name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        if !label.is_empty() {
            self.label = label;
        }
        self
    }

    /// Switch to truncated rendering in table cells
    pub fn truncated(mut self, width: usize) -> Self {
        self.kind = FieldKind::TruncatedText { width };
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Fetch the raw attribute value
    ///
    /// A field with an empty source names no attribute, so it always fails
    /// with `AttributeMissing`, whatever its accessor would return.
    pub fn get_value(&self, record: &R) -> Result<Value, ViewError> {
        let missing = || ViewError::AttributeMissing {
            source_name: self.source.clone(),
        };
        if self.source.is_empty() {
            return Err(missing());
        }
        (self.accessor)(record).ok_or_else(missing)
    }

    /// Compact HTML for multi-record tables
    pub fn render_short(&self, record: &R) -> Result<String, ViewError> {
        let text = stringify(&self.get_value(record)?);
        let text = match self.kind {
            FieldKind::Text => text,
            FieldKind::TruncatedText { width } => truncate_to_width(&text, width),
        };
        Ok(HtmlEscape(&text).to_string())
    }

    /// Full HTML for single-record detail display
    pub fn render(&self, record: &R) -> Result<String, ViewError> {
        let text = stringify(&self.get_value(record)?);
        Ok(HtmlEscape(&text).to_string())
    }
}

impl<R> Clone for Field<R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            label: self.label.clone(),
            kind: self.kind,
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<R> fmt::Debug for Field<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("source", &self.source)
            .field("label", &self.label)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Strings render bare, null renders empty, everything else as JSON text
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
