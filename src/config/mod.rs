//! Application configuration loading and validation.
//!
//! Configuration is optional. When no file is present every setting falls
//! back to its default, which opens `mydatabase.db` in the working
//! directory and logs warnings to stderr. The `ORDERDESK_DATABASE`
//! environment variable overrides the database path.
//!
//! # Example
//!
//! ```no_run
//! use orderdesk::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::discover(None)?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

mod database;
mod logging;

pub use database::{DatabaseConfig, DEFAULT_DATABASE_FILE};
pub use logging::LoggingConfig;

/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "orderdesk.toml";

/// Environment variable that overrides `database.path`.
pub const DATABASE_ENV_VAR: &str = "ORDERDESK_DATABASE";

const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Main application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a config file that must exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must point at a readable file. Without one,
    /// [`DEFAULT_CONFIG_FILE`] is used if it exists, and defaults otherwise.
    /// The [`DATABASE_ENV_VAR`] override is applied last.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE)?,
            None => Self::default(),
        };

        if let Ok(path) = std::env::var(DATABASE_ENV_VAR) {
            config.override_database(PathBuf::from(path))?;
        }

        Ok(config)
    }

    /// Replace the database path, rejecting an empty one.
    pub fn override_database(&mut self, path: PathBuf) -> Result<()> {
        self.database.path = path;
        self.validate()
    }

    /// Replace the log level filter.
    pub fn override_log_level(&mut self, level: impl Into<String>) {
        self.logging.level = level.into();
    }

    /// Switch logging to JSON lines.
    pub fn use_json_logs(&mut self) {
        self.logging.format = "json".to_string();
    }

    fn validate(&self) -> Result<()> {
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "path",
                reason: "database path cannot be empty".into(),
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!(
                    "expected one of {}, got '{}'",
                    LOG_FORMATS.join(", "),
                    self.logging.format
                ),
            }
            .into());
        }
        Ok(())
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
