use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::core::mark::MarkLogic;
use crate::db::log;
use crate::errors::AppResult;
use crate::models::workspace::WorkspaceRef;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Comment {
        text,
        workspace,
        time,
        date: date_arg,
    } = cmd
    {
        let time_spent = parse_optional_time(time.as_ref())?;

        let mut pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        let d = match date_arg {
            Some(s) => date::parse_user_date(s, &ws.date_format)?,
            None => date::today(),
        };

        MarkLogic::comment(&mut pool, &ws, d, text, time_spent)?;

        log::journal(&pool.conn, "comment", &ws.name, &format!("{} {}", d, text));
        success(format!("Comment added to {} [{}]", ws.format_date(&d), ws.name));
    }

    Ok(())
}
