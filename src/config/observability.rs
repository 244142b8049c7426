//! `[logging]` section: level, optional JSON file output, rotation

use serde::Deserialize;
use std::path::PathBuf;

use super::toml_string;

/// How often the JSON log file rolls over
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    Hourly,
    #[default]
    Daily,
    /// One file, never rolled
    Never,
}

impl LogRotation {
    /// Case-insensitive; anything unrecognised means daily
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hourly" => Self::Hourly,
            "never" => Self::Never,
            _ => Self::Daily,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Never => "never",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default filter level for contactbook targets; `RUST_LOG` wins when set
    pub level: String,
    /// Write JSON logs under `file_dir` as well as to stdout
    pub file_enabled: bool,
    pub file_dir: PathBuf,
    pub file_rotation: LogRotation,
    /// File name stem; the appender adds the date suffix
    pub file_prefix: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
            file_rotation: LogRotation::Daily,
            file_prefix: "contactbook".to_string(),
        }
    }
}

/// `[logging]` exactly as written in the file; every key optional
#[derive(Debug, Deserialize, Default)]
pub struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
    pub file_rotation: Option<String>,
    pub file_prefix: Option<String>,
}

impl LoggingConfig {
    /// Fill keys missing from the file with defaults
    pub fn from_file(file: Option<FileLogging>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            level: file.level.unwrap_or(defaults.level),
            file_enabled: file.file_enabled.unwrap_or(defaults.file_enabled),
            file_dir: file
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.file_dir),
            file_rotation: file
                .file_rotation
                .map(|s| LogRotation::parse(&s))
                .unwrap_or(defaults.file_rotation),
            file_prefix: file.file_prefix.unwrap_or(defaults.file_prefix),
        }
    }

    pub(super) fn to_toml(&self) -> String {
        format!(
            r#"[logging]
level = {level}  # trace, debug, info, warn, error (RUST_LOG overrides this)
file_enabled = {file_enabled}  # Also write JSON logs to file_dir
file_dir = {file_dir}
file_rotation = "{rotation}"  # hourly, daily, never
file_prefix = {prefix}
"#,
            level = toml_string(&self.level),
            file_enabled = self.file_enabled,
            file_dir = toml_string(&self.file_dir.display().to_string()),
            rotation = self.file_rotation.as_str(),
            prefix = toml_string(&self.file_prefix),
        )
    }
}
