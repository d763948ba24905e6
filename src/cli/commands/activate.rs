use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::workspace::WorkspaceLogic;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activate { name } = cmd {
        let mut pool = open_store(cfg)?;

        let ws = WorkspaceLogic::activate(&mut pool, name)?;

        log::journal(&pool.conn, "activate", &ws.name, "Workspace activated");
        success(format!("{} is now active", ws.name));
    }

    Ok(())
}
