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
use crate::utils::time::{now_time, parse_optional_time};

/// Append a punch to the given (or today's) day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        workspace,
        time,
        date: date_arg,
    } = cmd
    {
        //
        // 1. Validate the time before touching the DB
        //
        let t = parse_optional_time(time.as_ref())?.unwrap_or_else(now_time);

        let mut pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        //
        // 2. Date: workspace format, ISO fallback, today by default
        //
        let d = match date_arg {
            Some(s) => date::parse_user_date(s, &ws.date_format)?,
            None => date::today(),
        };

        let before = MarkLogic::mark(&mut pool, &ws, d, t)?;

        let count = before.punches.len() + 1;

        log::journal(
            &pool.conn,
            "mark",
            &ws.name,
            &format!("{} {}", d, t.format("%H:%M:%S")),
        );

        success(format!(
            "Marked {} on {} [{}] ({count} punches that day)",
            t.format("%H:%M:%S"),
            ws.format_date(&d),
            ws.name
        ));
    }

    Ok(())
}
