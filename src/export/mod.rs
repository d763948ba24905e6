// src/export/mod.rs

mod csv;
mod fs_utils;
pub mod logic;
pub mod model;

pub use logic::{ExportLogic, ExportPaths};

use crate::ui::messages::success;
use std::path::Path;

/// Shared completion message for every written file.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
