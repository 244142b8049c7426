//! Named per-record actions ("View", "Edit")
//!
//! An action refers to a route by name only. The concrete path comes from a
//! [`UrlResolver`] supplied by the routing layer at render time.

use serde::Serialize;

use super::{Record, ViewError};

/// Reverse route lookup: route name + record key -> URL
pub trait UrlResolver: Send + Sync {
    fn url_for(&self, target: &str, pk: &str) -> Result<String, ViewError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableViewAction {
    /// Symbolic route name
    pub target: String,
    /// Link text
    pub label: String,
}

impl TableViewAction {
    pub fn new(target: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            label: label.into(),
        }
    }

    /// Resolve this action's route for one record
    pub fn get_url<R: Record>(
        &self,
        record: &R,
        urls: &dyn UrlResolver,
    ) -> Result<String, ViewError> {
        urls.url_for(&self.target, &record.pk())
    }
}
