use crate::core::calculator::timeline::Timeline;
use chrono::TimeDelta;

/// Sum of closed sessions; open sessions contribute nothing.
pub fn day_total(timeline: &Timeline) -> TimeDelta {
    timeline
        .closed()
        .filter_map(|s| s.duration())
        .fold(TimeDelta::zero(), |acc, d| acc + d)
}

/// Running totals for one calendar month, fed day by day in date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthAccumulator {
    pub year: i32,
    pub month: u32,
    pub total: TimeDelta,
    pub days_count: u32,
}

impl MonthAccumulator {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            total: TimeDelta::zero(),
            days_count: 0,
        }
    }

    /// Add one day; returns its day total. Days without any session do not
    /// count toward `days_count`.
    pub fn add_day(&mut self, timeline: &Timeline) -> TimeDelta {
        let total = day_total(timeline);

        if !timeline.is_empty() {
            self.days_count += 1;
            self.total += total;
        }

        total
    }
}
