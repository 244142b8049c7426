//! View rendering errors
//!
//! Every failure here is a configuration or data error. Nothing is recovered
//! locally; callers propagate with `?` and the HTTP layer turns them into 500s.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    /// A field's source names no attribute on the record
    #[error("record has no attribute '{source_name}'")]
    AttributeMissing { source_name: String },

    /// An action's target is not a registered route
    #[error("cannot resolve route '{target}'")]
    RouteResolution { target: String },

    /// The view has no template, or the template is not registered
    #[error("template not found: {0}")]
    TemplateNotFound(String),

    /// Template syntax or runtime failure
    #[error("template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for ViewError {
    fn from(err: minijinja::Error) -> Self {
        match err.kind() {
            minijinja::ErrorKind::TemplateNotFound => ViewError::TemplateNotFound(err.to_string()),
            _ => ViewError::Template(err.to_string()),
        }
    }
}
