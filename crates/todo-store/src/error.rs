//! Store Errors
//!
//! Every failure the store can observe. None of them is fatal: the command
//! dispatcher decides how each kind is recovered.

use thiserror::Error;

use crate::model::TodoId;

/// Common result type for store operations
pub type TodoResult<T> = Result<T, TodoError>;

/// To-do store errors
#[derive(Debug, Error)]
pub enum TodoError {
    /// Submitted text was empty or whitespace only
    #[error("todo text must not be empty")]
    EmptyText,

    /// No item with this id in the collection
    #[error("todo {0} not found")]
    NotFound(TodoId),

    /// The item is loaded in the form and cannot be deleted
    #[error("todo {0} is being edited and cannot be deleted")]
    EditLocked(TodoId),

    /// An edit was submitted for an id that is not the current edit target
    #[error("todo {0} is not the current edit target")]
    NotEditing(TodoId),

    /// Unrecognised filter or sort token
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// Backing key-value storage refused a read or write
    #[error("storage error: {0}")]
    Storage(String),

    /// Persisted document has an unexpected shape
    #[error("corrupt todo document: {0}")]
    Corrupt(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TodoError {
    /// Errors the user caused and the dispatcher silently drops
    pub fn is_ignorable(&self) -> bool {
        matches!(
            self,
            TodoError::EmptyText
                | TodoError::NotFound(_)
                | TodoError::EditLocked(_)
                | TodoError::NotEditing(_)
        )
    }
}
