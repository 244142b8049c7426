//! Detail view - a single record in full

use minijinja::context;
use serde::Serialize;

use super::{action_links, ActionLink, Markup, Record, RenderContext, ViewConfig, ViewError};

#[derive(Debug, Serialize)]
struct DetailCell {
    label: String,
    value: String,
}

/// The evaluated record: full-form cells paired with their labels
#[derive(Debug, Serialize)]
struct DetailRecord {
    pk: String,
    cells: Vec<DetailCell>,
    actions: Vec<ActionLink>,
}

#[derive(Debug, Clone)]
pub struct DetailView<R> {
    config: ViewConfig<R>,
}

impl<R: Record> DetailView<R> {
    pub fn new(config: ViewConfig<R>) -> Self {
        Self { config }
    }

    /// Render one record through the configured template, bound as
    /// `detail` (metadata) and `record` (evaluated cells and actions)
    pub fn render(&self, ctx: RenderContext<'_>, record: &R) -> Result<Markup, ViewError> {
        let template = self.config.template_name()?;

        let cells = self
            .config
            .fields
            .iter()
            .map(|field| {
                Ok(DetailCell {
                    label: field.label().to_string(),
                    value: field.render(record)?,
                })
            })
            .collect::<Result<Vec<_>, ViewError>>()?;

        let evaluated = DetailRecord {
            pk: record.pk(),
            cells,
            actions: action_links(&self.config.actions, record, ctx.urls)?,
        };

        tracing::debug!(template, pk = %evaluated.pk, "Rendering detail view");

        let html = ctx.templates.render(
            template,
            context! {
                detail => self.config.meta(),
                record => evaluated,
            },
        )?;
        Ok(Markup(html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::Templates;
    use crate::views::{Field, TableView, TableViewAction, UrlResolver};
    use serde_json::{json, Value};

    struct Note {
        id: u32,
        body: String,
    }

    impl Record for Note {
        fn pk(&self) -> String {
            self.id.to_string()
        }

        fn attribute(&self, name: &str) -> Option<Value> {
            match name {
                "body" => Some(json!(self.body)),
                _ => None,
            }
        }
    }

    struct NoteRoutes;

    impl UrlResolver for NoteRoutes {
        fn url_for(&self, target: &str, pk: &str) -> Result<String, ViewError> {
            match target {
                "note_edit" => Ok(format!("/notes/{}/edit", pk)),
                _ => Err(ViewError::RouteResolution {
                    target: target.to_string(),
                }),
            }
        }
    }

    fn templates() -> Templates {
        let mut templates = Templates::empty();
        templates
            .add(
                "detail.txt",
                "{{ record.pk }}|{% for c in record.cells %}{{ c.label }}={{ c.value|safe }}{% endfor %}|{% for a in record.actions %}{{ a.label }}:{{ a.url }}{% endfor %}|{{ detail.fields|length }}",
            )
            .unwrap();
        templates
            .add(
                "table.txt",
                "{% for row in data %}{% for c in row.cells %}{{ c|safe }}{% endfor %}{% endfor %}",
            )
            .unwrap();
        templates
    }

    fn note() -> Note {
        Note {
            id: 4,
            body: "A long note that will not fit in a table cell".to_string(),
        }
    }

    fn fields() -> Vec<Field<Note>> {
        vec![Field::text("body").with_label("Body").truncated(10)]
    }

    #[test]
    fn test_detail_uses_full_render() {
        let templates = templates();
        let ctx = RenderContext {
            templates: &templates,
            urls: &NoteRoutes,
        };

        let view = DetailView::new(
            ViewConfig::new()
                .fields(fields())
                .actions([TableViewAction::new("note_edit", "Edit")])
                .template("detail.txt"),
        );

        let html = view.render(ctx, &note()).unwrap();
        assert_eq!(
            html.as_str(),
            "4|Body=A long note that will not fit in a table cell|Edit:/notes/4/edit|1"
        );
    }

    #[test]
    fn test_table_and_detail_differ_for_truncated_fields() {
        let templates = templates();
        let ctx = RenderContext {
            templates: &templates,
            urls: &NoteRoutes,
        };

        let table = TableView::new(ViewConfig::new().fields(fields()).template("table.txt"));
        let html = table.render(ctx, &[note()]).unwrap();
        assert_eq!(html.as_str(), "A long no…");
    }

    #[test]
    fn test_missing_attribute_propagates() {
        let templates = templates();
        let ctx = RenderContext {
            templates: &templates,
            urls: &NoteRoutes,
        };

        let view: DetailView<Note> = DetailView::new(
            ViewConfig::new()
                .fields([Field::text("author")])
                .template("detail.txt"),
        );
        let err = view.render(ctx, &note()).unwrap_err();
        assert!(matches!(
            err,
            ViewError::AttributeMissing { ref source_name } if source_name == "author"
        ));
    }

    #[test]
    fn test_no_template() {
        let templates = templates();
        let ctx = RenderContext {
            templates: &templates,
            urls: &NoteRoutes,
        };

        let view = DetailView::new(ViewConfig::new().fields(fields()));
        assert!(matches!(
            view.render(ctx, &note()),
            Err(ViewError::TemplateNotFound(_))
        ));
    }
}
