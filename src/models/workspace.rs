use serde::Serialize;

pub const DEFAULT_HOURS: u32 = 8;
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Row id of a workspace (⇔ workspaces.id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WorkspaceId(pub i64);

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,        // ⇔ workspaces.name (UNIQUE)
    pub hours: u32,          // ⇔ workspaces.hours (daily goal)
    pub date_format: String, // ⇔ workspaces.date_format (strftime pattern)
    pub is_active: bool,     // ⇔ workspaces.is_active
}

/// Parameters for creating a workspace
#[derive(Debug, Clone)]
pub struct NewWorkspace {
    pub name: String,
    pub hours: u32,
    pub date_format: String,
    pub is_active: bool,
}

/// How a command refers to its workspace: by name, or whichever is active.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkspaceRef {
    Named(String),
    Active,
}

impl From<Option<String>> for WorkspaceRef {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(n) => WorkspaceRef::Named(n),
            None => WorkspaceRef::Active,
        }
    }
}

impl From<&Option<String>> for WorkspaceRef {
    fn from(name: &Option<String>) -> Self {
        WorkspaceRef::from(name.clone())
    }
}

impl Workspace {
    pub fn format_date(&self, date: &chrono::NaiveDate) -> String {
        crate::utils::date::format_date(date, &self.date_format)
    }
}
