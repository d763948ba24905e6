use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::workspace::WorkspaceRef;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Check { workspace } = cmd {
        let pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        let anomalies = Core::check(&pool, &ws)?;

        if anomalies.is_empty() {
            success("There are no missing marks");
            return Ok(());
        }

        warning("The following days have an odd number of marks");
        for d in anomalies {
            println!("{}", ws.format_date(&d));
        }
    }

    Ok(())
}
