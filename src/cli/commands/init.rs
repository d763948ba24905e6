use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped with `--test`)
///  - the SQLite database and all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;
    let db_path = cfg.database_path();
    let db_path = db_path.to_string_lossy();

    info("Initializing rclock…");

    let pool = DbPool::open(&db_path)?;

    success(format!("Database initialized at {}", db_path));

    log::journal(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", db_path),
    );

    Ok(())
}
