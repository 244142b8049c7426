//! Table view - many records, one row each

use minijinja::context;
use serde::Serialize;

use super::{action_links, ActionLink, Markup, Record, RenderContext, ViewConfig, ViewError};

/// One evaluated table row: short-form cells in field order, then actions
#[derive(Debug, Serialize)]
struct TableRow {
    pk: String,
    cells: Vec<String>,
    actions: Vec<ActionLink>,
}

#[derive(Debug, Clone)]
pub struct TableView<R> {
    config: ViewConfig<R>,
}

impl<R: Record> TableView<R> {
    pub fn new(config: ViewConfig<R>) -> Self {
        Self { config }
    }

    /// Render `records` through the configured template
    ///
    /// The template receives `table` (field and action metadata) and `data`
    /// (one row per record, in input order).
    pub fn render(&self, ctx: RenderContext<'_>, records: &[R]) -> Result<Markup, ViewError> {
        let template = self.config.template_name()?;

        let rows = records
            .iter()
            .map(|record| self.row(ctx, record))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(template, rows = rows.len(), "Rendering table view");

        let html = ctx.templates.render(
            template,
            context! {
                table => self.config.meta(),
                data => rows,
            },
        )?;
        Ok(Markup(html))
    }

    fn row(&self, ctx: RenderContext<'_>, record: &R) -> Result<TableRow, ViewError> {
        let cells = self
            .config
            .fields
            .iter()
            .map(|field| field.render_short(record))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TableRow {
            pk: record.pk(),
            cells,
            actions: action_links(&self.config.actions, record, ctx.urls)?,
        })
    }
}
