//! Request error types and response handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::views::ViewError;

/// Errors that can occur while serving a page
///
/// None of these are recoverable per request: each one is a configuration
/// or lookup failure answered with the generic internal-error response.
#[derive(Debug, Error)]
pub enum AppError {
    /// No contact's key stringifies to the requested one
    #[error("no contact with pk '{0}'")]
    ContactNotFound(String),

    #[error(transparent)]
    View(#[from] ViewError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
    }
}
