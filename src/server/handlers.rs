//! Page handlers
//!
//! Each handler picks records from the store, renders them through a view,
//! and wraps the fragment in the base page.

use axum::{
    extract::{Path, State},
    response::Html,
};

use super::error::AppError;
use super::state::AppState;

/// `GET /` and `GET /contacts`
pub async fn contact_table_view(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let contacts = state.store.all();
    let content = state
        .table_view
        .render(state.render_context(), &contacts)?;

    Ok(Html(state.templates.render_page(&state.page_title, &content)?))
}

/// `GET /contacts/:pk`
pub async fn contact_detail_view(
    State(state): State<AppState>,
    Path(pk): Path<String>,
) -> Result<Html<String>, AppError> {
    let contact = state
        .store
        .find(&pk)
        .ok_or(AppError::ContactNotFound(pk))?;
    let content = state
        .detail_view
        .render(state.render_context(), &contact)?;

    Ok(Html(state.templates.render_page(&state.page_title, &content)?))
}

/// `GET /contacts/:pk/edit`
pub async fn contact_edit_view(Path(pk): Path<String>) -> &'static str {
    tracing::debug!(pk = %pk, "Edit view requested");
    "Not implemented"
}
