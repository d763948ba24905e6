//! Date restriction applied before any report, check or export.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, TimeDelta};

/// "N months" always means N × 30 days, not calendar months.
pub const DAYS_PER_MONTH: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFilter {
    #[default]
    All,
    Exact(NaiveDate),
    Since(NaiveDate),
}

impl DateFilter {
    /// Rolling window starting `months × 30` days before `today`.
    pub fn last_months(months: u32, today: NaiveDate) -> AppResult<Self> {
        if months == 0 {
            return Err(AppError::InvalidArgument(
                "--months must be greater than zero".into(),
            ));
        }

        TimeDelta::try_days(i64::from(months) * DAYS_PER_MONTH)
            .and_then(|window| today.checked_sub_signed(window))
            .map(DateFilter::Since)
            .ok_or_else(|| {
                AppError::InvalidArgument(format!(
                    "--months {months} reaches before the earliest supported date"
                ))
            })
    }

    /// Build the filter from the two mutually exclusive options.
    pub fn resolve(
        date: Option<NaiveDate>,
        months: Option<u32>,
        today: NaiveDate,
    ) -> AppResult<Self> {
        match (date, months) {
            (Some(_), Some(_)) => Err(AppError::InvalidArgument(
                "--date and --months cannot be used together".into(),
            )),
            (Some(d), None) => Ok(DateFilter::Exact(d)),
            (None, Some(m)) => Self::last_months(m, today),
            (None, None) => Ok(DateFilter::All),
        }
    }
}
