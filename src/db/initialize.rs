use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare a freshly opened connection: enforce foreign keys, then bring the
/// schema up to date. Tables are only ever created by migrations.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.pragma_update(None, "foreign_keys", true)?;
    run_pending_migrations(conn)?;
    Ok(())
}
