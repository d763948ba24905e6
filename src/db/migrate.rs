use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_ledger_tables",
        description: "Created workspaces, work_days, punches and comments tables",
        sql: r#"
        CREATE TABLE IF NOT EXISTS workspaces (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            name         TEXT NOT NULL UNIQUE,
            is_active    INTEGER NOT NULL DEFAULT 0 CHECK(is_active IN (0, 1)),
            hours        INTEGER NOT NULL DEFAULT 8 CHECK(hours > 0),
            date_format  TEXT NOT NULL DEFAULT '%Y/%m/%d',
            created_at   TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS work_days (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            workspace_id  INTEGER NOT NULL REFERENCES workspaces(id),
            date          TEXT NOT NULL,
            UNIQUE(workspace_id, date)
        );

        CREATE TABLE IF NOT EXISTS punches (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            work_day_id  INTEGER NOT NULL REFERENCES work_days(id),
            time         TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS comments (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            work_day_id  INTEGER NOT NULL REFERENCES work_days(id),
            text         TEXT NOT NULL,
            time_spent   TEXT
        );
        "#,
    },
    Migration {
        version: "20250110_0002_add_ledger_indexes",
        description: "Added lookup indexes on work_days, punches and comments",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_work_days_ws_date ON work_days(workspace_id, date);
        CREATE INDEX IF NOT EXISTS idx_punches_day_time ON punches(work_day_id, time);
        CREATE INDEX IF NOT EXISTS idx_comments_day ON comments(work_day_id);
        "#,
    },
    Migration {
        version: "20250302_0003_single_active_workspace",
        description: "Enforced at most one active workspace",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_workspaces_single_active
            ON workspaces(is_active) WHERE is_active = 1;
        "#,
    },
];

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Versions already recorded in `log`, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db(), i.e. on every open of the store.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}
