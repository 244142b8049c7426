//! Configuration for the contact list server
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/contactbook/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod observability;


pub use observability::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_BIND: &str = "127.0.0.1:5000";
const DEFAULT_PAGE_TITLE: &str = "Contacts";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub bind_addr: SocketAddr,

    /// Title shown in the page header and <title>
    pub page_title: String,

    /// Directory of template overrides (embedded templates when unset)
    pub template_dir: Option<PathBuf>,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            template_dir: None,
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub bind_addr: Option<String>,
    pub page_title: Option<String>,
    pub template_dir: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/contactbook/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("contactbook").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    /// Called during startup to help users discover configuration options
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Parse a config file; a missing file yields defaults
    ///
    /// A file that exists but cannot be read or parsed is an error. A broken
    /// config should stop startup, not silently fall back to defaults.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars > config file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };
        Self::resolve(file, |key| std::env::var(key).ok())
    }

    /// Merge a parsed file with environment lookups
    pub(crate) fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        // Bind address: env > file > default
        let bind = env("CONTACTBOOK_BIND")
            .or(file.bind_addr)
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address '{}'", bind))?;

        // Page title: file > default
        let page_title = file
            .page_title
            .unwrap_or_else(|| DEFAULT_PAGE_TITLE.to_string());

        // Template directory: env > file > embedded
        let template_dir = env("CONTACTBOOK_TEMPLATES")
            .or(file.template_dir)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        let logging = LoggingConfig::from_file(file.logging);

        Ok(Self {
            bind_addr,
            page_title,
            template_dir,
            logging,
        })
    }

    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let template_dir = match &self.template_dir {
            Some(dir) => format!("template_dir = {}", toml_string(&dir.display().to_string())),
            None => "# template_dir = \"./templates\"".to_string(),
        };

        format!(
            r#"# contactbook configuration

# Server bind address (CONTACTBOOK_BIND overrides this)
bind_addr = "{bind}"

# Title shown on every page
page_title = {title}

# Load base.html, table.html and detail.html from a directory instead of the
# built-in copies (CONTACTBOOK_TEMPLATES overrides this)
{template_dir}

{logging}"#,
            bind = self.bind_addr,
            title = toml_string(&self.page_title),
            template_dir = template_dir,
            logging = self.logging.to_toml(),
        )
    }
}

/// Quote and escape a value as a TOML basic string
fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}
