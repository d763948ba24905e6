//! SQLite connection wrapper (one connection per command).

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open `path` and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::from_connection(Connection::open(Path::new(path))?)
    }

    /// Migrated in-memory database, used by tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_db(&conn)?;
        Ok(Self { conn })
    }
}
