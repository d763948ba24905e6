//! Comment search.
//!
//! A pattern matches anywhere in the comment, ignoring case. `%` or `*`
//! stand for any run of characters and `_` or `?` for exactly one; every
//! other character is literal.

use crate::errors::{AppError, AppResult};
use crate::models::work_day::{Comment, WorkDay};
use chrono::NaiveDate;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupHit {
    pub date: NaiveDate,
    pub comments: Vec<Comment>,
}

pub type LookupResult = Vec<LookupHit>;

#[derive(Debug, Clone)]
pub struct CommentMatcher {
    re: Regex,
}

/// Translate the wildcard pattern into an unanchored regex.
fn pattern_to_regex(pattern: &str) -> String {
    let mut re = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        match c {
            '%' | '*' => re.push_str(".*"),
            '_' | '?' => re.push('.'),
            other => re.push_str(&regex::escape(&other.to_string())),
        }
    }
    re
}

impl CommentMatcher {
    pub fn new(pattern: &str) -> AppResult<Self> {
        if pattern.is_empty() {
            return Err(AppError::InvalidArgument(
                "lookup pattern cannot be empty".into(),
            ));
        }

        let re = RegexBuilder::new(&pattern_to_regex(pattern))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        Ok(Self { re })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.re.is_match(text)
    }
}

/// Days with at least one matching comment, each with only its matches.
pub fn lookup_comments(days: &[WorkDay], pattern: &str) -> AppResult<LookupResult> {
    let matcher = CommentMatcher::new(pattern)?;

    let mut hits: LookupResult = days
        .iter()
        .filter_map(|day| {
            let comments: Vec<Comment> = day
                .comments
                .iter()
                .filter(|c| matcher.matches(&c.text))
                .cloned()
                .collect();

            (!comments.is_empty()).then_some(LookupHit {
                date: day.date,
                comments,
            })
        })
        .collect();

    hits.sort_by_key(|h| h.date);
    Ok(hits)
}
