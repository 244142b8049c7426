// Logging module - tracing subscriber setup
//
// Logs always go to stdout. File logging is opt-in: JSON lines through a
// rolling, non-blocking appender so request handling never waits on disk.
//
// Precedence for the filter: RUST_LOG env var > config file > default "info"

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogRotation, LoggingConfig};

/// Default filter directive when RUST_LOG is unset
fn default_directive(level: &str) -> String {
    format!("contactbook={},tower_http=debug,axum=debug", level)
}

fn file_appender(logging: &LoggingConfig) -> RollingFileAppender {
    match logging.file_rotation {
        LogRotation::Hourly => {
            tracing_appender::rolling::hourly(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Daily => {
            tracing_appender::rolling::daily(&logging.file_dir, &logging.file_prefix)
        }
        LogRotation::Never => {
            tracing_appender::rolling::never(&logging.file_dir, &logging.file_prefix)
        }
    }
}

/// Install the global subscriber
///
/// The returned guard flushes the file writer on drop; keep it alive for the
/// whole program.
pub fn init(logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&logging.level)));

    if !logging.file_enabled {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to install tracing subscriber")?;
        return Ok(None);
    }

    std::fs::create_dir_all(&logging.file_dir).with_context(|| {
        format!("Could not create log directory {}", logging.file_dir.display())
    })?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender(logging));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(Some(guard))
}
