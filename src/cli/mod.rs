//! Command-line interface definitions.

pub mod init;
pub mod run;
pub mod startup;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// Orderdesk - look up orders in a seeded SQLite store.
#[derive(Parser, Debug)]
#[command(name = "orderdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to configuration file (defaults to ./orderdesk.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the database file path
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty
    #[arg(long, global = true)]
    pub json_logs: bool,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Prepare the store and start the interactive menu (default)
    Chat,
    /// Prepare the store (create tables, insert sample rows) and exit
    Init,
}

impl Cli {
    /// The subcommand to run, defaulting to the interactive menu.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Chat)
    }

    /// Resolve configuration and apply command-line overrides.
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::discover(self.config.as_deref())?;

        if let Some(ref database) = self.database {
            config.override_database(database.clone())?;
        }
        if let Some(ref level) = self.log_level {
            config.override_log_level(level.clone());
        }
        if self.json_logs {
            config.use_json_logs();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_chat() {
        let cli = Cli::try_parse_from(["orderdesk"]).unwrap();
        assert_eq!(cli.command(), Commands::Chat);
        assert!(cli.config.is_none());
        assert!(cli.database.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["orderdesk", "init", "--database", "shop.db", "--json-logs"])
                .unwrap();
        assert_eq!(cli.command(), Commands::Init);
        assert_eq!(cli.database, Some(PathBuf::from("shop.db")));
        assert!(cli.json_logs);
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["orderdesk", "serve"]).is_err());
    }
}
