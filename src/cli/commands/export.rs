use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::DateFilter;
use crate::core::logic::Core;
use crate::db::log;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::workspace::WorkspaceRef;
use crate::utils::date;
use crate::utils::path::resolve_output_dir;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        workspace,
        months,
        dir,
        force,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        let filter = DateFilter::resolve(None, *months, date::today())?;
        let out_dir = resolve_output_dir(dir.as_deref())?;
        std::fs::create_dir_all(&out_dir)?;

        let paths = ExportLogic::export(&pool, &ws, &filter, &out_dir, *force)?;

        log::journal(
            &pool.conn,
            "export",
            &ws.name,
            &format!("{} / {}", paths.hours.display(), paths.notes.display()),
        );
    }
    Ok(())
}
