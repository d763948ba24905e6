use crate::utils::format_duration;
use chrono::TimeDelta;
use serde::{Serialize, Serializer};
use std::fmt;

pub fn daily_goal(hours: u32) -> TimeDelta {
    TimeDelta::hours(i64::from(hours))
}

pub fn monthly_goal(hours: u32, days_count: u32) -> TimeDelta {
    TimeDelta::hours(i64::from(hours) * i64::from(days_count))
}

/// Signed variance of worked time against a goal (`total - goal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GoalDelta(TimeDelta);

impl GoalDelta {
    pub fn compare(total: TimeDelta, goal: TimeDelta) -> Self {
        GoalDelta(total - goal)
    }

    pub fn daily(total: TimeDelta, hours: u32) -> Self {
        Self::compare(total, daily_goal(hours))
    }

    pub fn monthly(total: TimeDelta, hours: u32, days_count: u32) -> Self {
        Self::compare(total, monthly_goal(hours, days_count))
    }

    pub fn seconds(&self) -> i64 {
        self.0.num_seconds()
    }

    pub fn is_short(&self) -> bool {
        self.0 < TimeDelta::zero()
    }
}

impl fmt::Display for GoalDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_zero() {
            f.write_str("+0")
        } else if self.is_short() {
            write!(f, "-{}", format_duration(-self.0))
        } else {
            write!(f, "+{}", format_duration(self.0))
        }
    }
}

impl Serialize for GoalDelta {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}
