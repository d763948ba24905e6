// src/export/logic.rs

use crate::core::filter::DateFilter;
use crate::core::repository::WorkDayRepository;
use crate::errors::AppResult;
use crate::export::csv::{write_header, write_rows};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{hour_rows, note_rows};
use crate::models::workspace::Workspace;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

pub const HOURS_HEADER: [&str; 2] = ["date", "time"];
pub const NOTES_HEADER: [&str; 3] = ["date", "time_spent", "note"];

/// The two files written by one export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub hours: PathBuf,
    pub notes: PathBuf,
}

impl ExportPaths {
    pub fn for_workspace(dir: &Path, workspace: &Workspace) -> Self {
        Self {
            hours: dir.join(format!("{}_hours.csv", workspace.name)),
            notes: dir.join(format!("{}_notes.csv", workspace.name)),
        }
    }
}

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Export punches and comments of `workspace` into `dir`.
    ///
    /// - `{name}_hours.csv`: `date,time`, one row per punch
    /// - `{name}_notes.csv`: `date,time_spent,note`, one row per comment
    pub fn export<R>(
        repo: &R,
        workspace: &Workspace,
        filter: &DateFilter,
        dir: &Path,
        force: bool,
    ) -> AppResult<ExportPaths>
    where
        R: WorkDayRepository + ?Sized,
    {
        let paths = ExportPaths::for_workspace(dir, workspace);

        ensure_writable(&paths.hours, force)?;
        ensure_writable(&paths.notes, force)?;

        let days = repo.list_work_days(workspace.id, filter)?;

        if days.is_empty() {
            warning("No workdays found for the selected range.");
        }

        let hours = hour_rows(workspace, &days);
        let notes = note_rows(workspace, &days);

        // serialize() only emits a header with the first row
        if hours.is_empty() {
            write_header(&paths.hours, "Hours", &HOURS_HEADER)?;
        } else {
            write_rows(&paths.hours, "Hours", &hours)?;
        }

        if notes.is_empty() {
            write_header(&paths.notes, "Notes", &NOTES_HEADER)?;
        } else {
            write_rows(&paths.notes, "Notes", &notes)?;
        }

        Ok(paths)
    }
}
