use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::repository::WorkspaceRepository;
use crate::core::workspace::{Configured, WorkspaceLogic, WorkspaceSettings};
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workspace {
        name,
        hours,
        date_format,
        new,
    } = cmd
    {
        let mut pool = open_store(cfg)?;

        let settings = WorkspaceSettings {
            hours: *hours,
            date_format: date_format.clone(),
            require_new: *new,
        };

        let outcome = WorkspaceLogic::configure(
            &mut pool,
            name,
            &settings,
            cfg.default_hours,
            &cfg.default_date_format,
        )?;

        let ws = outcome.workspace();
        let (op, verb) = match &outcome {
            Configured::Created(_) => ("workspace_create", "created"),
            Configured::Updated(_) => ("workspace_update", "updated"),
        };

        log::journal(
            &pool.conn,
            op,
            &ws.name,
            &format!("hours={} date_format={}", ws.hours, ws.date_format),
        );

        success(format!(
            "{} is now configured to work with {} hours ({verb})",
            ws.name, ws.hours
        ));

        if matches!(outcome, Configured::Created(_)) && ws.is_active {
            info(format!("{} is now active", ws.name));
        }
    }

    Ok(())
}

/// `workspaces`: one line per workspace, the active one marked with `*`.
pub fn list(cfg: &Config) -> AppResult<()> {
    let pool = open_store(cfg)?;
    let all = pool.list_workspaces()?;

    if all.is_empty() {
        info("No workspaces configured yet.");
        return Ok(());
    }

    header("Workspaces");

    let name_w = all.iter().map(|w| w.name.len()).max().unwrap_or(4);

    for ws in all {
        let marker = if ws.is_active {
            format!("{GREEN}*{RESET}")
        } else {
            " ".to_string()
        };
        println!(
            "{} {:<name_w$}  {:>2}h  {}",
            marker,
            ws.name,
            ws.hours,
            ws.date_format,
            name_w = name_w
        );
    }

    Ok(())
}
