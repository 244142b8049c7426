// Server module - HTTP front end for the contact list
//
// Serves server-rendered HTML pages using Axum. Every page is a view
// (table or detail) rendered into the base template.

mod error;
mod handlers;
pub mod routes;
mod state;

pub use state::AppState;

use anyhow::{anyhow, Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use routes::{RouteTable, CONTACT_DETAIL_VIEW, CONTACT_EDIT_VIEW, CONTACT_TABLE_VIEW};

/// Registered path for a named route
fn registered(routes: &RouteTable, name: &str) -> Result<&'static str> {
    routes
        .path(name)
        .ok_or_else(|| anyhow!("route '{}' is not registered", name))
}

/// Build the router from the named route table
pub fn build_router(state: AppState) -> Result<Router> {
    let routes = state.routes.clone();

    let app = Router::new()
        .route("/", get(handlers::contact_table_view))
        .route(
            registered(&routes, CONTACT_TABLE_VIEW)?,
            get(handlers::contact_table_view),
        )
        .route(
            registered(&routes, CONTACT_DETAIL_VIEW)?,
            get(handlers::contact_detail_view),
        )
        .route(
            registered(&routes, CONTACT_EDIT_VIEW)?,
            get(handlers::contact_edit_view),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

/// Start the HTTP server
pub async fn start_server(
    config: &Config,
    state: AppState,
    shutdown_rx: tokio::sync::oneshot::Receiver<()>,
) -> Result<()> {
    let bind_addr = config.bind_addr;
    let app = build_router(state)?;

    tracing::info!("Starting server on {}", bind_addr);

    let listener = TcpListener::bind(bind_addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!("Listening on http://{}", bind_addr);

    // In-flight requests finish before the server returns
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_rx.await.ok();
        })
        .await
        .context("Server error")?;

    tracing::info!("Server shut down gracefully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contacts::InMemoryContacts;
    use crate::templates::Templates;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(
            Arc::new(InMemoryContacts::sample()),
            Templates::embedded().unwrap(),
            "Contacts",
        );
        build_router(state).unwrap()
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_index_and_contacts_serve_table() {
        for uri in ["/", "/contacts"] {
            let (status, body) = get_page(uri).await;
            assert_eq!(status, StatusCode::OK);
            assert!(body.contains("<title>Contacts</title>"));
            assert_eq!(body.matches("<tr data-pk=").count(), 3);
            assert!(body.contains("<td>Marfa</td>"));
            assert!(body.contains(r#"<a href="/contacts/1">View</a>"#));
        }
    }

    #[tokio::test]
    async fn test_detail_page() {
        let (status, body) = get_page("/contacts/2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<dd>Cadence</dd>"));
        assert!(body.contains("<dd>541 555 0102</dd>"));
        assert!(!body.contains("Marfa"));
    }

    #[tokio::test]
    async fn test_missing_contact_is_internal_error() {
        let (status, _) = get_page("/contacts/99").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_edit_placeholder() {
        let (status, body) = get_page("/contacts/1/edit").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Not implemented");
    }

    #[tokio::test]
    async fn test_unknown_path() {
        let (status, _) = get_page("/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_view_template_is_internal_error() {
        let mut templates = Templates::empty();
        templates.add("base.html", "{{ content }}").unwrap();

        let state = AppState::new(Arc::new(InMemoryContacts::sample()), templates, "Contacts");
        let response = build_router(state)
            .unwrap()
            .oneshot(Request::builder().uri("/contacts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
