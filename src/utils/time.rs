//! Time utilities: parsing punch times, signed spans between two times of day.

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveTime, TimeDelta, Timelike};
use regex::Regex;
use std::sync::OnceLock;

fn time_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // H:MM, HH:MM, HHMM, HH:MM:SS, HHMMSS
    RE.get_or_init(|| {
        Regex::new(r"^(\d{1,2}):?(\d{2})(?::?(\d{2}))?$").expect("static time regex is valid")
    })
}

/// Parse a user-supplied time of day. The whole text must match.
pub fn parse_time(t: &str) -> Option<NaiveTime> {
    let caps = time_pattern().captures(t.trim())?;

    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = caps.get(2)?.as_str().parse().ok()?;
    let second: u32 = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };

    NaiveTime::from_hms_opt(hour, minute, second)
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Current local time, truncated to whole seconds.
pub fn now_time() -> NaiveTime {
    let now = Local::now().time();
    now.with_nanosecond(0).unwrap_or(now)
}

/// `end - start`, negative when `end` is earlier in the day.
pub fn span(start: NaiveTime, end: NaiveTime) -> TimeDelta {
    end.signed_duration_since(start)
}
