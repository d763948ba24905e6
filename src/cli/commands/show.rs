use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::DateFilter;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::workspace::WorkspaceRef;
use crate::ui::report::{RenderOptions, render_report};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        workspace,
        verbose,
        comments,
        months,
        date: date_arg,
        json,
    } = cmd
    {
        let pool = open_store(cfg)?;
        let ws = Core::resolve_workspace(&pool, &WorkspaceRef::from(workspace))?;

        let exact = date_arg
            .as_deref()
            .map(|s| date::parse_user_date(s, &ws.date_format))
            .transpose()?;
        let filter = DateFilter::resolve(exact, *months, date::today())?;

        let report = Core::report(&pool, &ws, &filter)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let opts = RenderOptions {
            verbose: *verbose,
            show_comments: *comments,
            comment_width: cfg.comment_width,
        };

        print!("{}", render_report(&report, &opts));
    }

    Ok(())
}
