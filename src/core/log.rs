use crate::db::log::LogEntry;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const OP_WIDTH_MAX: usize = 60;

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static ansi regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour of the operation column.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "mark" => Colour::Green,
        "comment" => Colour::Cyan,
        "activate" => Colour::Yellow,
        "workspace_create" | "workspace_update" => Colour::Blue,
        "export" | "import" => Colour::Purple,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn truncate_visible(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut out: String = s.chars().take(max - 3).collect();
        out.push_str("...");
        out
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = crate::db::log::load_log(&pool.conn)?;

        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let rows: Vec<(&LogEntry, String)> = entries
            .iter()
            .map(|e| {
                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    format!("{} ({})", e.operation, e.target)
                };
                (e, truncate_visible(&op_target, OP_WIDTH_MAX))
            })
            .collect();

        let op_w = rows
            .iter()
            .map(|(_, t)| t.chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);
        let id_w = rows
            .iter()
            .map(|(e, _)| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rows.iter().map(|(e, _)| e.date.len()).max().unwrap_or(1);

        println!("📜 Internal log:\n");

        for (entry, op_target) in rows {
            let color = color_for_operation(&entry.operation);

            // only the operation word is coloured, the target stays plain
            let painted = match op_target.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(op_target.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&painted).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                painted,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
