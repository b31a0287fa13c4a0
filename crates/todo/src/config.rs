use clap::ValueEnum;
use thiserror::Error;

/// Default SQLite database file.
pub const DEFAULT_DB_PATH: &str = "todo.db";

/// Default bind address (all interfaces, port 8080).
pub const DEFAULT_BIND: &str = ":8080";

/// Storage backend selected at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum StorageBackend {
    /// SQLite database file at `db_path`.
    #[default]
    Sqlite,
    /// Volatile in-process storage; `db_path` is ignored.
    Memory,
}

/// Errors produced while validating configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Bind address must not be empty")]
    EmptyBind,
}

/// Application configuration, resolved from flags and environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to SQLite database file (default: "todo.db")
    pub db_path: String,
    /// Address the HTTP listener binds to, always in `host:port` form
    pub bind_addr: String,
    /// Storage backend (default: sqlite)
    pub storage: StorageBackend,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Config {
    pub fn new(
        db_path: impl Into<String>,
        bind: &str,
        storage: StorageBackend,
        log_json: bool,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            db_path: db_path.into(),
            bind_addr: normalize_bind(bind)?,
            storage,
            log_json,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: DEFAULT_DB_PATH.to_string(),
            bind_addr: format!("0.0.0.0{DEFAULT_BIND}"),
            storage: StorageBackend::default(),
            log_json: false,
        }
    }
}

/// Normalizes a bind address into `host:port` form.
///
/// A bare `:port` means every interface, so it is expanded to `0.0.0.0:port`.
pub fn normalize_bind(bind: &str) -> Result<String, ConfigError> {
    let bind = bind.trim();
    if bind.is_empty() {
        return Err(ConfigError::EmptyBind);
    }

    if bind.starts_with(':') {
        Ok(format!("0.0.0.0{bind}"))
    } else {
        Ok(bind.to_string())
    }
}
