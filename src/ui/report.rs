//! Terminal rendering of a [`Report`].

use crate::core::calculator::goal::GoalDelta;
use crate::core::calculator::timeline::Session;
use crate::core::report::{DayReport, MonthReport, Report};
use crate::models::work_day::Comment;
use crate::utils::colors::{color_for_delta, open_marker, paint};
use crate::utils::date::format_date;
use crate::utils::format_duration;
use crate::utils::formatting::month_name;
use std::fmt;
use textwrap::Options;

#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub verbose: bool,
    pub show_comments: bool,
    pub comment_width: usize,
}

const TIME_FMT: &str = "%H:%M:%S";

fn delta_str(delta: &GoalDelta) -> String {
    paint(&delta.to_string(), color_for_delta(delta.seconds()))
}

fn session_line(s: &Session) -> String {
    match (s.end(), s.duration()) {
        (Some(end), Some(d)) => format!(
            "     {}  -  {} ({})",
            s.start().format(TIME_FMT),
            end.format(TIME_FMT),
            format_duration(d)
        ),
        _ => format!("     {}  -  {}", s.start().format(TIME_FMT), open_marker()),
    }
}

fn comment_line(c: &Comment, width: usize) -> String {
    let spent = c
        .time_spent
        .map(|t| t.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string());
    let prefix = format!("       {spent} ");
    let indent = " ".repeat(prefix.chars().count());

    textwrap::fill(
        &c.text,
        Options::new(width.max(prefix.len() + 10))
            .initial_indent(&prefix)
            .subsequent_indent(&indent),
    )
}

fn render_day(
    f: &mut fmt::Formatter<'_>,
    day: &DayReport,
    date_format: &str,
    opts: &RenderOptions,
) -> fmt::Result {
    let date = format_date(&day.date, date_format);
    let comments = opts.show_comments && !day.comments.is_empty();

    if !day.has_sessions() && !comments {
        return Ok(());
    }

    let summary = day
        .delta
        .as_ref()
        .map(|d| format!("({}/{})", format_duration(day.total), delta_str(d)));

    if opts.verbose {
        writeln!(f, "   {date}")?;
        for s in &day.sessions {
            writeln!(f, "{}", session_line(s))?;
        }
        if let Some(sum) = &summary {
            writeln!(f, "\t {sum}")?;
        }
        writeln!(f)?;
    } else {
        match &summary {
            Some(sum) => writeln!(f, "   {date} {sum}")?,
            None => writeln!(f, "   {date}")?,
        }
    }

    if comments {
        if opts.verbose {
            writeln!(f, "   Notes")?;
        }
        for c in &day.comments {
            writeln!(f, "{}", comment_line(c, opts.comment_width))?;
        }
        if opts.verbose {
            writeln!(f)?;
        }
    }

    Ok(())
}

fn render_month(
    f: &mut fmt::Formatter<'_>,
    month: &MonthReport,
    date_format: &str,
    opts: &RenderOptions,
) -> fmt::Result {
    let name = month_name(month.month);
    writeln!(f, "{} {}", name, month.year)?;

    for day in &month.days {
        render_day(f, day, date_format, opts)?;
    }

    writeln!(f)?;
    writeln!(
        f,
        "{} total:{} ({})",
        name,
        format_duration(month.total),
        delta_str(&month.delta)
    )?;
    writeln!(f)
}

/// A report bound to its render options, printable with `{}`.
pub struct ReportView<'a> {
    pub report: &'a Report,
    pub opts: &'a RenderOptions,
}

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Workspace: {}\n", self.report.workspace)?;

        if self.report.is_empty() {
            return writeln!(f, "There are no workdays in the given range");
        }

        for month in &self.report.months {
            render_month(f, month, &self.report.date_format, self.opts)?;
        }

        Ok(())
    }
}

pub fn render_report(report: &Report, opts: &RenderOptions) -> String {
    ReportView { report, opts }.to_string()
}
