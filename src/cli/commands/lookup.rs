use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::workspace::WorkspaceRef;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Lookup { pattern, workspace } = cmd {
        let pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        let hits = Core::lookup(&pool, &ws, pattern)?;

        if hits.is_empty() {
            info("No comments found");
            return Ok(());
        }

        for hit in hits {
            println!("{}", ws.format_date(&hit.date));
            for c in &hit.comments {
                println!("      {}", c);
            }
        }
    }

    Ok(())
}
