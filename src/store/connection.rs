//! Opening the single store handle.
//!
//! The store is one SQLite file, created on first open. One
//! [`SqliteConnection`] serves the whole run and is closed when dropped.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::{debug, info};

use crate::config::DatabaseConfig;
use crate::error::{Error, Result};

/// Open (creating if absent) the SQLite file named by `config`.
///
/// # Errors
/// Returns [`Error::Connection`] if SQLite cannot open the file, and
/// [`Error::Database`] if the connection pragmas cannot be applied.
pub fn open(config: &DatabaseConfig) -> Result<SqliteConnection> {
    let url = config.path.to_str().ok_or_else(|| {
        Error::Connection(format!(
            "database path is not valid UTF-8: {}",
            config.path.display()
        ))
    })?;

    let mut conn = SqliteConnection::establish(url)?;
    configure_sqlite_connection(&mut conn, config.enforce_foreign_keys)?;

    info!(path = %config.path.display(), "database opened");
    Ok(conn)
}

/// Open a private in-memory store with the same pragmas as [`open`].
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub fn open_in_memory(enforce_foreign_keys: bool) -> Result<SqliteConnection> {
    let mut conn = SqliteConnection::establish(":memory:")?;
    configure_sqlite_connection(&mut conn, enforce_foreign_keys)?;
    Ok(conn)
}

/// Apply the connection pragmas.
///
/// Foreign-key enforcement is set explicitly either way so the behaviour
/// does not depend on how SQLite was compiled.
///
/// # Errors
/// Returns an error if a pragma fails to apply.
pub fn configure_sqlite_connection(
    conn: &mut SqliteConnection,
    enforce_foreign_keys: bool,
) -> Result<()> {
    let pragma = if enforce_foreign_keys {
        "PRAGMA foreign_keys = ON"
    } else {
        "PRAGMA foreign_keys = OFF"
    };
    diesel::sql_query(pragma).execute(conn)?;
    debug!(enforce_foreign_keys, "sqlite pragmas applied");
    Ok(())
}
