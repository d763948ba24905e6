// src/export/model.rs

use crate::models::work_day::WorkDay;
use crate::models::workspace::Workspace;
use serde::Serialize;

/// One row per punch: `date,time`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HourRow {
    pub date: String,
    pub time: String,
}

/// One row per comment: `date,time_spent,note`.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct NoteRow {
    pub date: String,
    pub time_spent: String,
    pub note: String,
}

pub fn hour_rows(workspace: &Workspace, days: &[WorkDay]) -> Vec<HourRow> {
    days.iter()
        .flat_map(|day| {
            let date = workspace.format_date(&day.date);
            day.punches.iter().map(move |p| HourRow {
                date: date.clone(),
                time: p.time.format("%H:%M:%S").to_string(),
            })
        })
        .collect()
}

pub fn note_rows(workspace: &Workspace, days: &[WorkDay]) -> Vec<NoteRow> {
    days.iter()
        .flat_map(|day| {
            let date = workspace.format_date(&day.date);
            day.comments.iter().map(move |c| NoteRow {
                date: date.clone(),
                time_spent: c.time_spent_str(),
                note: c.text.clone(),
            })
        })
        .collect()
}
