use crate::core::check::{AnomalyList, find_anomalies};
use crate::core::filter::DateFilter;
use crate::core::lookup::{LookupResult, lookup_comments};
use crate::core::report::{Report, build_report};
use crate::core::repository::{WorkDayRepository, WorkspaceRepository};
use crate::errors::{AppError, AppResult};
use crate::models::work_day::WorkDay;
use crate::models::workspace::{Workspace, WorkspaceRef};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Resolve a workspace reference once, at the start of a command.
    pub fn resolve_workspace<R>(repo: &R, target: &WorkspaceRef) -> AppResult<Workspace>
    where
        R: WorkspaceRepository + ?Sized,
    {
        match target {
            WorkspaceRef::Named(name) => repo
                .find_workspace(name)?
                .ok_or_else(|| AppError::WorkspaceNotFound(name.clone())),
            WorkspaceRef::Active => repo
                .find_active_workspace()?
                .ok_or(AppError::NoActiveWorkspace),
        }
    }

    pub fn get_or_create_work_day<R>(
        repo: &mut R,
        workspace: &Workspace,
        date: NaiveDate,
    ) -> AppResult<WorkDay>
    where
        R: WorkDayRepository + ?Sized,
    {
        match repo.find_work_day(workspace.id, date)? {
            Some(day) => Ok(day),
            None => repo.create_work_day(workspace.id, date),
        }
    }

    pub fn report<R>(repo: &R, workspace: &Workspace, filter: &DateFilter) -> AppResult<Report>
    where
        R: WorkDayRepository + ?Sized,
    {
        let days = repo.list_work_days(workspace.id, filter)?;
        Ok(build_report(workspace, &days))
    }

    pub fn check<R>(repo: &R, workspace: &Workspace) -> AppResult<AnomalyList>
    where
        R: WorkDayRepository + ?Sized,
    {
        let days = repo.list_work_days(workspace.id, &DateFilter::All)?;
        Ok(find_anomalies(&days))
    }

    pub fn lookup<R>(repo: &R, workspace: &Workspace, pattern: &str) -> AppResult<LookupResult>
    where
        R: WorkDayRepository + ?Sized,
    {
        let days = repo.list_work_days(workspace.id, &DateFilter::All)?;
        lookup_comments(&days, pattern)
    }
}
