//! Store Commands
//!
//! One message per user intent; the UI shell builds these from DOM events
//! and hands them to `TodoStore::dispatch`.

use crate::model::{Filter, SortOrder, TodoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Input box contents changed
    SetInput(String),
    /// Form submitted: add, or update the edit target
    Submit,
    /// Add an item directly, bypassing the input box
    Add { text: String },
    /// Load an item into the form for editing
    BeginEdit { id: TodoId },
    CancelEdit,
    /// Replace the text of the current edit target
    Edit { id: TodoId, text: String },
    Toggle { id: TodoId },
    Delete { id: TodoId },
    SetFilter(Filter),
    SetSort(SortOrder),
}

impl Command {
    /// Whether applying this command can change the persisted collection
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::Submit
                | Command::Add { .. }
                | Command::Edit { .. }
                | Command::Toggle { .. }
                | Command::Delete { .. }
        )
    }
}
