//! Report model handed to the formatting layer (terminal or JSON).

use crate::core::calculator::goal::{GoalDelta, monthly_goal};
use crate::core::calculator::timeline::{Session, build_timeline};
use crate::core::calculator::totals::MonthAccumulator;
use crate::models::work_day::{Comment, WorkDay};
use crate::models::workspace::Workspace;
use crate::utils::format_duration;
use chrono::{Datelike, NaiveDate, TimeDelta};
use serde::{Serialize, Serializer};

fn serialize_span<S: Serializer>(d: &TimeDelta, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_duration(*d))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    pub sessions: Vec<Session>,
    #[serde(serialize_with = "serialize_span")]
    pub total: TimeDelta,
    /// `None` for a day that only carries comments.
    pub delta: Option<GoalDelta>,
    pub comments: Vec<Comment>,
}

impl DayReport {
    pub fn has_sessions(&self) -> bool {
        !self.sessions.is_empty()
    }

    pub fn is_unterminated(&self) -> bool {
        self.sessions.iter().any(|s| s.is_open())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthReport {
    pub year: i32,
    pub month: u32,
    pub days: Vec<DayReport>,
    #[serde(serialize_with = "serialize_span")]
    pub total: TimeDelta,
    pub days_count: u32,
    #[serde(serialize_with = "serialize_span")]
    pub goal: TimeDelta,
    pub delta: GoalDelta,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub workspace: String,
    pub hours: u32,
    pub date_format: String,
    pub months: Vec<MonthReport>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }
}

struct MonthBuilder {
    acc: MonthAccumulator,
    days: Vec<DayReport>,
}

impl MonthBuilder {
    fn new(date: NaiveDate) -> Self {
        Self {
            acc: MonthAccumulator::new(date.year(), date.month()),
            days: Vec::new(),
        }
    }

    fn holds(&self, date: NaiveDate) -> bool {
        self.acc.year == date.year() && self.acc.month == date.month()
    }

    fn push(&mut self, day: &WorkDay, hours: u32) {
        let timeline = build_timeline(&day.punch_times());
        let total = self.acc.add_day(&timeline);
        let delta = (!timeline.is_empty()).then(|| GoalDelta::daily(total, hours));

        self.days.push(DayReport {
            date: day.date,
            sessions: timeline.sessions,
            total,
            delta,
            comments: day.comments.clone(),
        });
    }

    fn finish(self, hours: u32) -> MonthReport {
        let MonthAccumulator {
            year,
            month,
            total,
            days_count,
        } = self.acc;

        MonthReport {
            year,
            month,
            days: self.days,
            total,
            days_count,
            goal: monthly_goal(hours, days_count),
            delta: GoalDelta::monthly(total, hours, days_count),
        }
    }
}

/// Group `days` by calendar month (in date order) and account every day and
/// month against the workspace goal.
pub fn build_report(workspace: &Workspace, days: &[WorkDay]) -> Report {
    let mut sorted: Vec<&WorkDay> = days.iter().collect();
    sorted.sort_by_key(|d| d.date);

    let mut months = Vec::new();
    let mut current: Option<MonthBuilder> = None;

    for day in sorted {
        match current.as_mut() {
            Some(m) if m.holds(day.date) => m.push(day, workspace.hours),
            _ => {
                if let Some(done) = current.take() {
                    months.push(done.finish(workspace.hours));
                }
                let mut m = MonthBuilder::new(day.date);
                m.push(day, workspace.hours);
                current = Some(m);
            }
        }
    }

    if let Some(done) = current {
        months.push(done.finish(workspace.hours));
    }

    Report {
        workspace: workspace.name.clone(),
        hours: workspace.hours,
        date_format: workspace.date_format.clone(),
        months,
    }
}
