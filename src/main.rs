// contactbook - a minimal contact list served as HTML
//
// Pages are produced by a small declarative view generator: fields describe
// how to project a record attribute, actions describe per-record links, and
// table/detail views feed both into named templates.
//
// Architecture:
// - Views: Field / TableViewAction / TableView / DetailView
// - Templates (minijinja): base page plus table and detail fragments
// - Server (axum): named routes, handlers, shared read-only state
// - Contacts: the record type and an in-memory store

use anyhow::{Context, Result};
use contactbook::config::Config;
use contactbook::contacts::{ContactStore, InMemoryContacts};
use contactbook::templates::Templates;
use contactbook::{cli, logging, server, startup};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --path)
    if cli::handle_cli()? {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env()?;

    // The guard must outlive the server so buffered file logs flush
    let _file_guard = logging::init(&config.logging)?;

    let templates = Templates::load(config.template_dir.as_deref())
        .context("Failed to load templates")?;
    let store: Arc<dyn ContactStore> = Arc::new(InMemoryContacts::sample());
    let contact_count = store.all().len();

    let state = server::AppState::new(store, templates, &config.page_title);

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

    let server_config = config.clone();
    let mut server_handle = tokio::spawn(async move {
        server::start_server(&server_config, state, shutdown_rx).await
    });

    startup::print_startup(&config, contact_count);
    startup::log_startup(&config, contact_count);

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            result.context("Failed to listen for Ctrl+C")?;
            tracing::info!("Shutting down...");
        }
        // Server stopped on its own (bind failure, I/O error)
        result = &mut server_handle => {
            return result.context("Server task panicked")?;
        }
    }

    // If the send fails, the server has already stopped
    let _ = shutdown_tx.send(());

    server_handle.await.context("Server task panicked")??;

    tracing::info!("Shutdown complete");
    Ok(())
}
