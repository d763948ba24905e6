use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::core::logic::Core;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::workspace::WorkspaceRef;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, workspace } = cmd {
        let mut pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        let path = expand_tilde(file);
        let count = ImportLogic::import_file(&mut pool, &ws, &path)?;

        log::journal(
            &pool.conn,
            "import",
            &ws.name,
            &format!("{count} punches from {}", path.display()),
        );
        success(format!("Imported {count} punches into {}", ws.name));
    }

    Ok(())
}
