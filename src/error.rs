//! Board Errors
//!
//! Every failure leaves the board untouched; the store logs and discards them.

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    #[error("task not found: {id}")]
    TaskNotFound { id: String },

    #[error("task '{task_id}' is not in column '{column_id}'")]
    TaskNotInColumn { task_id: String, column_id: String },

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("assignee not found: {id}")]
    AssigneeNotFound { id: String },

    #[error("no task ids left to assign")]
    TaskIdsExhausted,

    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
}
