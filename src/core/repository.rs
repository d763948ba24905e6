//! Storage interfaces the core depends on.
//!
//! The SQLite backend (`db::store`) implements both traits; the core never
//! touches a connection directly.

use crate::core::filter::DateFilter;
use crate::errors::AppResult;
use crate::models::work_day::{WorkDay, WorkDayId};
use crate::models::workspace::{NewWorkspace, Workspace, WorkspaceId};
use chrono::{NaiveDate, NaiveTime};

pub trait WorkspaceRepository {
    fn find_workspace(&self, name: &str) -> AppResult<Option<Workspace>>;

    fn find_active_workspace(&self) -> AppResult<Option<Workspace>>;

    fn list_workspaces(&self) -> AppResult<Vec<Workspace>>;

    fn create_workspace(&mut self, params: &NewWorkspace) -> AppResult<Workspace>;

    /// Persist `hours` and `date_format`; the active flag is left untouched.
    fn update_workspace(&mut self, workspace: &Workspace) -> AppResult<()>;

    /// Clear every active flag and set the given one, as a single unit.
    fn activate_workspace(&mut self, id: WorkspaceId) -> AppResult<()>;
}

pub trait WorkDayRepository {
    fn find_work_day(&self, workspace: WorkspaceId, date: NaiveDate)
    -> AppResult<Option<WorkDay>>;

    fn create_work_day(&mut self, workspace: WorkspaceId, date: NaiveDate) -> AppResult<WorkDay>;

    /// Days ordered by date, each with its punches ordered by time.
    fn list_work_days(&self, workspace: WorkspaceId, filter: &DateFilter)
    -> AppResult<Vec<WorkDay>>;

    fn append_punch(&mut self, day: WorkDayId, time: NaiveTime) -> AppResult<()>;

    /// Append every punch, creating missing days; all or nothing.
    fn append_punches(
        &mut self,
        workspace: WorkspaceId,
        punches: &[(NaiveDate, NaiveTime)],
    ) -> AppResult<()>;

    fn append_comment(
        &mut self,
        day: WorkDayId,
        text: &str,
        time_spent: Option<NaiveTime>,
    ) -> AppResult<()>;
}
