//! Shared application state handed to every handler

use std::sync::Arc;

use crate::contacts::{self, Contact, ContactStore};
use crate::templates::Templates;
use crate::views::{DetailView, RenderContext, TableView};

use super::routes::RouteTable;

/// Read-only state shared across requests
///
/// Views and templates are built once at startup; only the records they are
/// rendered over change between requests.
#[derive(Clone)]
pub struct AppState {
    /// Contact data source
    pub store: Arc<dyn ContactStore>,
    /// Compiled HTML templates
    pub templates: Arc<Templates>,
    /// Named routes for handler registration and action URLs
    pub routes: Arc<RouteTable>,
    /// Title shown on every page
    pub page_title: Arc<str>,
    pub(super) table_view: Arc<TableView<Contact>>,
    pub(super) detail_view: Arc<DetailView<Contact>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContactStore>, templates: Templates, page_title: &str) -> Self {
        Self {
            store,
            templates: Arc::new(templates),
            routes: Arc::new(RouteTable::contacts()),
            page_title: Arc::from(page_title),
            table_view: Arc::new(contacts::table_view()),
            detail_view: Arc::new(contacts::detail_view()),
        }
    }

    pub(super) fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            templates: &self.templates,
            urls: self.routes.as_ref(),
        }
    }
}
