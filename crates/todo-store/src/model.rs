//! To-do Models
//!
//! The persisted item record and the presentation-time view options.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Unique identifier of a to-do item
pub type TodoId = u32;

/// Hand out the next counter id, or the smallest free one once the counter
/// has run past `TodoId::MAX`
///
/// `next` is `None` when the counter is exhausted. `used` must contain every
/// live id.
pub(crate) fn allocate_id(next: &mut Option<TodoId>, used: &HashSet<TodoId>) -> TodoId {
    if let Some(id) = next.filter(|id| !used.contains(id)) {
        *next = id.checked_add(1);
        return id;
    }
    *next = None;
    // A collection never holds TodoId::MAX items, so a gap always exists
    (1..=TodoId::MAX).find(|id| !used.contains(id)).unwrap_or_default()
}

/// Counter start for a collection whose largest id is `max`
pub(crate) fn counter_after(max: Option<TodoId>) -> Option<TodoId> {
    match max {
        Some(max) => max.checked_add(1),
        None => Some(1),
    }
}

/// A single to-do record
///
/// Field names match the persisted JSON (`id`, `text`, `isCompleted`, `createdAt`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
    pub is_completed: bool,
    /// Milliseconds since the Unix epoch, fixed at creation
    pub created_at: i64,
}

impl TodoItem {
    /// Create a new, not yet completed item
    pub fn new(id: TodoId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id,
            text: text.into(),
            is_completed: false,
            created_at,
        }
    }
}

/// Which items a view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Complete,
    Incomplete,
}

impl Filter {
    /// All filters in menu order
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Complete, Filter::Incomplete];

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Complete => "complete",
            Filter::Incomplete => "incomplete",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Complete => "Completed",
            Filter::Incomplete => "Incomplete",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            Filter::All => true,
            Filter::Complete => item.is_completed,
            Filter::Incomplete => !item.is_completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "complete" | "completed" => Ok(Filter::Complete),
            "incomplete" => Ok(Filter::Incomplete),
            other => Err(TodoError::UnknownOption(other.to_string())),
        }
    }
}

/// Ordering of a view by creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Newest first
    #[default]
    #[serde(rename = "new-to-old", alias = "newest-first")]
    NewToOld,
    /// Oldest first
    #[serde(rename = "old-to-new", alias = "oldest-first")]
    OldToNew,
}

impl SortOrder {
    /// All orders in menu order
    pub const ALL: [SortOrder; 2] = [SortOrder::NewToOld, SortOrder::OldToNew];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NewToOld => "new-to-old",
            SortOrder::OldToNew => "old-to-new",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NewToOld => "New to old",
            SortOrder::OldToNew => "Old to new",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new-to-old" | "newest-first" => Ok(SortOrder::NewToOld),
            "old-to-new" | "oldest-first" => Ok(SortOrder::OldToNew),
            other => Err(TodoError::UnknownOption(other.to_string())),
        }
    }
}

/// Item totals for the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub completed: usize,
}

impl TodoCounts {
    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_creation() {
        let item = TodoItem::new(1, "Buy milk", 1_000);
        assert_eq!(item.id, 1);
        assert_eq!(item.text, "Buy milk");
        assert!(!item.is_completed);
        assert_eq!(item.created_at, 1_000);
    }

    #[test]
    fn test_item_json_field_names() {
        let item = TodoItem::new(7, "Walk dog", 42);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["text"], "Walk dog");
        assert_eq!(json["isCompleted"], false);
        assert_eq!(json["createdAt"], 42);
    }

    #[test]
    fn test_allocate_id_counts_up() {
        let used: HashSet<TodoId> = [1, 2].into_iter().collect();
        let mut next = counter_after(used.iter().copied().max());
        assert_eq!(allocate_id(&mut next, &used), 3);
        assert_eq!(next, Some(4));
    }

    #[test]
    fn test_allocate_id_after_counter_exhausted() {
        let used: HashSet<TodoId> = [1, TodoId::MAX].into_iter().collect();
        let mut next = counter_after(Some(TodoId::MAX));
        assert_eq!(next, None);
        assert_eq!(allocate_id(&mut next, &used), 2);
        assert_eq!(next, None);
    }

    #[test]
    fn test_filter_matches() {
        let mut done = TodoItem::new(1, "a", 0);
        done.is_completed = true;
        let open = TodoItem::new(2, "b", 0);

        assert!(Filter::All.matches(&done) && Filter::All.matches(&open));
        assert!(Filter::Complete.matches(&done));
        assert!(!Filter::Complete.matches(&open));
        assert!(Filter::Incomplete.matches(&open));
        assert!(!Filter::Incomplete.matches(&done));
    }

    #[test]
    fn test_option_parsing() {
        assert_eq!("complete".parse::<Filter>().unwrap(), Filter::Complete);
        assert_eq!(" Incomplete ".parse::<Filter>().unwrap(), Filter::Incomplete);
        assert_eq!("newest-first".parse::<SortOrder>().unwrap(), SortOrder::NewToOld);
        assert_eq!("old-to-new".parse::<SortOrder>().unwrap(), SortOrder::OldToNew);
        assert!(matches!("sideways".parse::<SortOrder>(), Err(TodoError::UnknownOption(_))));

        for filter in Filter::ALL {
            assert_eq!(filter.as_str().parse::<Filter>().unwrap(), filter);
        }
        for sort in SortOrder::ALL {
            assert_eq!(sort.to_string().parse::<SortOrder>().unwrap(), sort);
        }
    }

    #[test]
    fn test_sort_order_serde_alias() {
        let sort: SortOrder = serde_json::from_str("\"oldest-first\"").unwrap();
        assert_eq!(sort, SortOrder::OldToNew);
        assert_eq!(serde_json::to_string(&SortOrder::NewToOld).unwrap(), "\"new-to-old\"");
    }
}
