pub mod activate;
pub mod check;
pub mod comment;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod lookup;
pub mod mark;
pub mod show;
pub mod workspace;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database, running pending migrations.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open(&cfg.database_path().to_string_lossy())
}
