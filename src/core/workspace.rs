use crate::core::repository::WorkspaceRepository;
use crate::errors::{AppError, AppResult};
use crate::models::workspace::{NewWorkspace, Workspace};
use crate::utils::date::is_valid_format;

/// Requested changes for the `workspace` command.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceSettings {
    pub hours: Option<u32>,
    pub date_format: Option<String>,
    /// Fail with a conflict instead of updating an existing workspace.
    pub require_new: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Configured {
    Created(Workspace),
    Updated(Workspace),
}

impl Configured {
    pub fn workspace(&self) -> &Workspace {
        match self {
            Configured::Created(w) | Configured::Updated(w) => w,
        }
    }
}

pub struct WorkspaceLogic;

impl WorkspaceLogic {
    /// Create `name` (active if nothing else is) or update its settings.
    pub fn configure<R>(
        repo: &mut R,
        name: &str,
        settings: &WorkspaceSettings,
        default_hours: u32,
        default_date_format: &str,
    ) -> AppResult<Configured>
    where
        R: WorkspaceRepository + ?Sized,
    {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidArgument(
                "workspace name cannot be empty".into(),
            ));
        }

        if let Some(0) = settings.hours {
            return Err(AppError::InvalidArgument(
                "--hours must be greater than zero".into(),
            ));
        }

        if let Some(fmt) = &settings.date_format
            && !is_valid_format(fmt)
        {
            return Err(AppError::InvalidArgument(format!(
                "invalid date format pattern '{fmt}'"
            )));
        }

        match repo.find_workspace(name)? {
            Some(_) if settings.require_new => Err(AppError::WorkspaceExists(name.to_string())),
            Some(mut existing) => {
                if let Some(h) = settings.hours {
                    existing.hours = h;
                }
                if let Some(fmt) = &settings.date_format {
                    existing.date_format = fmt.clone();
                }
                repo.update_workspace(&existing)?;
                Ok(Configured::Updated(existing))
            }
            None => {
                let is_active = repo.find_active_workspace()?.is_none();
                let created = repo.create_workspace(&NewWorkspace {
                    name: name.to_string(),
                    hours: settings.hours.unwrap_or(default_hours),
                    date_format: settings
                        .date_format
                        .clone()
                        .unwrap_or_else(|| default_date_format.to_string()),
                    is_active,
                })?;
                Ok(Configured::Created(created))
            }
        }
    }

    pub fn activate<R>(repo: &mut R, name: &str) -> AppResult<Workspace>
    where
        R: WorkspaceRepository + ?Sized,
    {
        let mut workspace = repo
            .find_workspace(name)?
            .ok_or_else(|| AppError::WorkspaceNotFound(name.to_string()))?;

        repo.activate_workspace(workspace.id)?;
        workspace.is_active = true;
        Ok(workspace)
    }
}
