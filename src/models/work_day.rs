use super::workspace::WorkspaceId;
use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::fmt;

/// Row id of a work day (⇔ work_days.id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WorkDayId(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PunchEvent {
    pub id: i64,
    pub time: NaiveTime, // ⇔ punches.time (TEXT "HH:MM:SS")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub text: String,                  // ⇔ comments.text
    pub time_spent: Option<NaiveTime>, // ⇔ comments.time_spent (TEXT "HH:MM:SS", nullable)
}

impl Comment {
    pub fn time_spent_str(&self) -> String {
        self.time_spent
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time_spent {
            Some(t) => write!(f, "{} {}", t.format("%H:%M"), self.text),
            None => write!(f, "--:-- {}", self.text),
        }
    }
}

/// All punches and comments of one workspace on one calendar date.
///
/// `punches` is always kept in chronological order; the open/closed state of
/// the day is derived from its length, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDay {
    pub id: WorkDayId,
    pub workspace_id: WorkspaceId,
    pub date: NaiveDate,
    pub punches: Vec<PunchEvent>,
    pub comments: Vec<Comment>,
}

impl WorkDay {
    pub fn new(id: WorkDayId, workspace_id: WorkspaceId, date: NaiveDate) -> Self {
        Self {
            id,
            workspace_id,
            date,
            punches: Vec::new(),
            comments: Vec::new(),
        }
    }

    pub fn punch_times(&self) -> Vec<NaiveTime> {
        self.punches.iter().map(|p| p.time).collect()
    }

    /// An odd number of punches leaves the last session unterminated.
    pub fn is_open(&self) -> bool {
        self.punches.len() % 2 == 1
    }
}
