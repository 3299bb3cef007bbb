use serde::Deserialize;
use std::path::PathBuf;

/// Settings consumed by the `sitely` shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Raw plan identifier as reported by the subscription service.
    pub plan: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub log: LogConfig,
}

/// Logging knobs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive, overridden by `RUST_LOG`.
    pub level: String,
    /// Directory for rolling log files. Console only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for ShellConfig {
    fn default() -> Self {
        Self { plan: None, title: "My Sites".to_owned(), description: None, log: LogConfig::default() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
