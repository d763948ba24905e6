/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Delta color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_delta(seconds: i64) -> &'static str {
    if seconds > 0 {
        GREEN
    } else if seconds < 0 {
        RED
    } else {
        RESET
    }
}

/// Wrap `value` in `color`; RESET leaves it untouched.
pub fn paint(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}

/// Grey placeholder for an unterminated session end.
pub fn open_marker() -> String {
    format!("{GREY}**:**:**{RESET}")
}
