//! SQLite persistence using Diesel ORM.
//!
//! [`Store`] owns the one connection a run uses. It is opened at startup
//! and closed when dropped, whichever way the run ends.

pub mod connection;
pub mod lookup;
pub mod model;
pub mod schema;
pub mod seed;

use std::path::{Path, PathBuf};

use diesel::SqliteConnection;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::{OrderDetails, OrderStatusReport};
use crate::error::Result;
use crate::port::OrderLookup;

/// An open order store.
pub struct Store {
    conn: SqliteConnection,
    path: PathBuf,
}

impl Store {
    /// Open (creating if absent) the store described by `config`.
    ///
    /// # Errors
    /// Returns an error if the file cannot be opened.
    pub fn open(config: &DatabaseConfig) -> Result<Self> {
        let conn = connection::open(config)?;
        Ok(Self {
            conn,
            path: config.path.clone(),
        })
    }

    /// Open a private in-memory store.
    ///
    /// # Errors
    /// Returns an error if the connection cannot be established.
    pub fn in_memory() -> Result<Self> {
        Ok(Self {
            conn: connection::open_in_memory(false)?,
            path: PathBuf::from(":memory:"),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the schema and append the sample rows.
    ///
    /// # Errors
    /// Returns the first engine error; see [`seed::initialize`].
    pub fn initialize(&mut self) -> Result<()> {
        seed::initialize(&mut self.conn)
    }

    /// Direct access to the connection.
    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}

impl OrderLookup for Store {
    fn order_details(&mut self, email: &str) -> Result<Option<OrderDetails>> {
        lookup::order_details(&mut self.conn, email)
    }

    fn order_status(&mut self, identifier: &str) -> Result<Option<OrderStatusReport>> {
        lookup::order_status(&mut self.conn, identifier)
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        info!(path = %self.path.display(), "database closed");
    }
}
