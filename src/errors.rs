//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Lookup errors (not found)
    // ---------------------------
    #[error("There is no workspace with the given name: {0}")]
    WorkspaceNotFound(String),

    #[error("There is no workspace active, please activate one")]
    NoActiveWorkspace,

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ---------------------------
    // Conflicts
    // ---------------------------
    #[error("A workspace named '{0}' already exists")]
    WorkspaceExists(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the "not found" family (unknown workspace, nothing active).
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::WorkspaceNotFound(_) | AppError::NoActiveWorkspace
        )
    }

    /// True for malformed user input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_) | AppError::InvalidTime(_) | AppError::InvalidArgument(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
