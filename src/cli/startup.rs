//! Steps shared by every command: open the store, then initialize it.

use std::io::{self, Write};

use tracing::{error, info, warn};

use crate::chat::render;
use crate::config::Config;
use crate::error::Result;
use crate::store::Store;

pub const OPEN_FAILED: &str = "Error: Unable to create database connection.";
pub const INITIALIZED: &str = "Tables created and data inserted successfully.";

/// Open the configured store.
///
/// On failure the engine error and [`OPEN_FAILED`] are printed and the
/// error is returned; callers must not continue.
///
/// # Errors
/// Returns the connection error.
pub fn open_store(config: &Config, out: &mut impl Write) -> Result<Store> {
    match Store::open(&config.database) {
        Ok(store) => Ok(store),
        Err(err) => {
            error!(error = %err, path = %config.database.path.display(), "cannot open database");
            writeln!(out, "{err}")?;
            writeln!(out, "{OPEN_FAILED}")?;
            Err(err)
        }
    }
}

/// Create tables and insert the sample rows, reporting the outcome.
///
/// A failure is printed and swallowed; the store stays usable in whatever
/// state the failure left it.
///
/// # Errors
/// Returns an error only if writing to `out` fails.
pub fn initialize(store: &mut Store, out: &mut impl Write) -> io::Result<()> {
    match store.initialize() {
        Ok(()) => {
            info!(path = %store.path().display(), "store initialized");
            writeln!(out, "{INITIALIZED}")
        }
        Err(err) => {
            warn!(error = %err, "store initialization failed");
            render::error(out, &err)
        }
    }
}
