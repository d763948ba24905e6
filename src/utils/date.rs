use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use std::fmt::Write;

/// Pattern accepted for every date argument, whatever the workspace format.
pub const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// True when `fmt` is a strftime pattern chrono can render.
pub fn is_valid_format(fmt: &str) -> bool {
    !fmt.trim().is_empty() && !StrftimeItems::new(fmt).any(|i| matches!(i, Item::Error))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, FALLBACK_DATE_FORMAT).ok()
}

/// Parse a date typed by the user: workspace format first, then ISO.
pub fn parse_user_date(s: &str, workspace_format: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, workspace_format)
        .ok()
        .or_else(|| parse_date(s))
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// Render `date` with `fmt`; a pattern chrono rejects falls back to ISO.
pub fn format_date(date: &NaiveDate, fmt: &str) -> String {
    let mut out = String::new();
    if is_valid_format(fmt) && write!(out, "{}", date.format(fmt)).is_ok() {
        return out;
    }
    date.format(FALLBACK_DATE_FORMAT).to_string()
}
