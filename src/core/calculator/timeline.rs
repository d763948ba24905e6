//! Pairs a day's punches into work sessions.
//!
//! Pairing is purely positional: punches 0–1, 2–3, … form closed sessions and
//! an odd trailing punch becomes an open session. No in/out labels exist.

use crate::utils::time::span;
use chrono::{NaiveTime, TimeDelta};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Session {
    Closed { start: NaiveTime, end: NaiveTime },
    Open { start: NaiveTime },
}

impl Session {
    pub fn start(&self) -> NaiveTime {
        match self {
            Session::Closed { start, .. } | Session::Open { start } => *start,
        }
    }

    pub fn end(&self) -> Option<NaiveTime> {
        match self {
            Session::Closed { end, .. } => Some(*end),
            Session::Open { .. } => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Session::Open { .. })
    }

    /// `end - start` for a closed session. Not normalized across midnight.
    pub fn duration(&self) -> Option<TimeDelta> {
        match self {
            Session::Closed { start, end } => Some(span(*start, *end)),
            Session::Open { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub sessions: Vec<Session>,
}

impl Timeline {
    pub fn closed(&self) -> impl Iterator<Item = &Session> {
        self.sessions.iter().filter(|s| !s.is_open())
    }

    pub fn open(&self) -> Option<&Session> {
        self.sessions.iter().find(|s| s.is_open())
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Build the sessions of one day from its chronologically ordered punches.
pub fn build_timeline(punches: &[NaiveTime]) -> Timeline {
    let sessions = punches
        .chunks(2)
        .map(|pair| match *pair {
            [start, end] => Session::Closed { start, end },
            [start] => Session::Open { start },
            _ => unreachable!("chunks(2) yields one or two items"),
        })
        .collect();

    Timeline { sessions }
}
