use serde::Deserialize;
use std::path::PathBuf;

/// File name of the store when nothing else is configured.
pub const DEFAULT_DATABASE_FILE: &str = "mydatabase.db";

/// Where the store lives and how the connection is configured.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite file. Relative paths resolve against the
    /// working directory.
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Whether SQLite should enforce the declared foreign keys.
    #[serde(default)]
    pub enforce_foreign_keys: bool,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATABASE_FILE)
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            enforce_foreign_keys: false,
        }
    }
}
