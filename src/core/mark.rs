use crate::core::logic::Core;
use crate::core::repository::WorkDayRepository;
use crate::errors::{AppError, AppResult};
use crate::models::work_day::WorkDay;
use crate::models::workspace::Workspace;
use chrono::{NaiveDate, NaiveTime};

/// High-level business logic for the `mark` and `comment` commands.
pub struct MarkLogic;

impl MarkLogic {
    /// Append one punch; returns the day as it was before the punch.
    pub fn mark<R>(
        repo: &mut R,
        workspace: &Workspace,
        date: NaiveDate,
        time: NaiveTime,
    ) -> AppResult<WorkDay>
    where
        R: WorkDayRepository + ?Sized,
    {
        let day = Core::get_or_create_work_day(repo, workspace, date)?;
        repo.append_punch(day.id, time)?;
        Ok(day)
    }

    pub fn comment<R>(
        repo: &mut R,
        workspace: &Workspace,
        date: NaiveDate,
        text: &str,
        time_spent: Option<NaiveTime>,
    ) -> AppResult<WorkDay>
    where
        R: WorkDayRepository + ?Sized,
    {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::InvalidArgument("comment text cannot be empty".into()));
        }

        // The day may be created even if the insert below fails; that is kept.
        let day = Core::get_or_create_work_day(repo, workspace, date)?;
        repo.append_comment(day.id, text, time_spent)?;
        Ok(day)
    }
}
