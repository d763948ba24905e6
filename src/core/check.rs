use crate::models::work_day::WorkDay;
use chrono::NaiveDate;

/// Dates whose punch count is odd, i.e. the last session was never closed.
pub type AnomalyList = Vec<NaiveDate>;

pub fn find_anomalies(days: &[WorkDay]) -> AnomalyList {
    let mut out: AnomalyList = days
        .iter()
        .filter(|d| d.is_open())
        .map(|d| d.date)
        .collect();

    out.sort();
    out
}
