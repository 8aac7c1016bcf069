//! Error taxonomy for the task core.
//!
//! Every failure the storage layer, date parser or task service can produce is
//! one of the [`TodoError`] variants, so the command layer can render a
//! specific message for each kind without inspecting strings.
//!
//! ## Kinds
//!
//! - **Validation**: bad input value, names the offending field
//! - **NotFound**: the referenced task id does not exist
//! - **DateParse**: unrecognized due date text
//! - **StorageBusy**: another process held the write lock past the busy timeout
//! - **StorageIo / Storage**: file system or SQLite failure, fatal for the invocation

use rusqlite::ErrorCode;
use thiserror::Error;

/// Date formats accepted by the parser, used in error messages.
pub const ACCEPTED_DATE_FORMATS: &str =
    "today, tomorrow, yesterday, +Nd, +Nw, a weekday name, YYYY-MM-DD, YYYY-MM-DD HH:MM, YYYY/MM/DD, MM/DD/YYYY, DD-MM-YYYY";

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("Task with ID {0} not found")]
    NotFound(i64),

    #[error("Could not parse date '{input}'. Accepted formats: {}", ACCEPTED_DATE_FORMATS)]
    DateParse { input: String },

    #[error("The task database is busy (another todomaster command is writing). Please try again.")]
    StorageBusy,

    #[error("Storage I/O error: {0}")]
    StorageIo(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Storage(rusqlite::Error),
}

impl TodoError {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        TodoError::Validation {
            field,
            reason: reason.into(),
        }
    }
}

impl From<rusqlite::Error> for TodoError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => TodoError::StorageBusy,
            _ => TodoError::Storage(err),
        }
    }
}

pub type Result<T> = std::result::Result<T, TodoError>;
