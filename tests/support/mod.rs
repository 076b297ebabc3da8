#![allow(dead_code)]

use std::path::{Path, PathBuf};

use diesel::prelude::*;
use diesel::SqliteConnection;
use orderdesk::config::DatabaseConfig;
use orderdesk::store::Store;
use tempfile::TempDir;

/// Temporary SQLite file for integration tests, removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    pub fn create() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("mydatabase.db");
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn config(&self) -> DatabaseConfig {
        DatabaseConfig {
            path: self.path.clone(),
            enforce_foreign_keys: false,
        }
    }

    pub fn open(&self) -> Store {
        Store::open(&self.config()).expect("open store")
    }
}

#[derive(QueryableByName)]
struct Count {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

/// Row count of `table`.
pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {table}"))
        .get_result::<Count>(conn)
        .expect("count rows")
        .count
}

pub const TABLES: [&str; 5] = ["Users", "Products", "Orders", "Order_Items", "Categories"];
