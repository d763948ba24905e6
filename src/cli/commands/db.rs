use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

fn step(label: &str) {
    println!("{CYAN}▶ {label}…{RESET}");
}

fn done(label: &str) {
    println!("{GREEN}✔ {label}{RESET}\n");
}

fn migrate(pool: &DbPool) -> AppResult<()> {
    step("Running migrations");
    run_pending_migrations(&pool.conn)?;
    for version in applied_migrations(&pool.conn)? {
        println!("  • {version}");
    }
    done("Migration completed.");
    Ok(())
}

fn integrity_check(pool: &DbPool) -> AppResult<()> {
    step("Running integrity check");

    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

    if result == "ok" {
        done("Integrity check passed.");
    } else {
        println!("{RED}✘ Integrity check failed:{RESET} {result}\n");
    }
    Ok(())
}

fn vacuum(pool: &DbPool) -> AppResult<()> {
    step("Running VACUUM");
    pool.conn.execute_batch("VACUUM;")?;
    done("Vacuum completed.");
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate: do_migrate,
        check,
        vacuum: do_vacuum,
        info: show_info,
    } = cmd
    {
        if !(*do_migrate || *check || *do_vacuum || *show_info) {
            info("Nothing to do: pass --migrate, --check, --vacuum or --info.");
            return Ok(());
        }

        // opening the store already applies pending migrations
        let pool = open_store(cfg)?;

        if *do_migrate {
            migrate(&pool)?;
        }
        if *show_info {
            stats::print_db_info(&pool, &cfg.database_path().to_string_lossy())?;
        }
        if *check {
            integrity_check(&pool)?;
        }
        if *do_vacuum {
            vacuum(&pool)?;
        }
    }

    Ok(())
}
