//! Derived Views
//!
//! Filtering and sorting happen on borrowed items; the collection itself
//! always stays in insertion order.

use crate::model::{Filter, SortOrder, TodoItem};

/// Items passing `filter`, ordered by creation time
///
/// The sort is stable, so items created in the same millisecond keep their
/// insertion order.
pub fn derive_view(items: &[TodoItem], filter: Filter, sort: SortOrder) -> Vec<&TodoItem> {
    let mut view: Vec<&TodoItem> = items.iter().filter(|item| filter.matches(item)).collect();
    match sort {
        SortOrder::NewToOld => view.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::OldToNew => view.sort_by_key(|item| item.created_at),
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: u32, created_at: i64, is_completed: bool) -> TodoItem {
        TodoItem {
            id,
            text: format!("Todo {}", id),
            is_completed,
            created_at,
        }
    }

    fn ids(view: &[&TodoItem]) -> Vec<u32> {
        view.iter().map(|item| item.id).collect()
    }

    #[test]
    fn test_derive_view() {
        let items = vec![
            make_item(1, 300, false),
            make_item(2, 100, true),
            make_item(3, 200, true),
            make_item(4, 400, false),
        ];

        assert_eq!(ids(&derive_view(&items, Filter::All, SortOrder::NewToOld)), vec![4, 1, 3, 2]);
        assert_eq!(ids(&derive_view(&items, Filter::All, SortOrder::OldToNew)), vec![2, 3, 1, 4]);
        assert_eq!(ids(&derive_view(&items, Filter::Complete, SortOrder::NewToOld)), vec![3, 2]);
        assert_eq!(ids(&derive_view(&items, Filter::Incomplete, SortOrder::OldToNew)), vec![1, 4]);
    }

    #[test]
    fn test_equal_timestamps_keep_insertion_order() {
        let items = vec![make_item(1, 50, false), make_item(2, 50, false), make_item(3, 10, false)];

        assert_eq!(ids(&derive_view(&items, Filter::All, SortOrder::NewToOld)), vec![1, 2, 3]);
        assert_eq!(ids(&derive_view(&items, Filter::All, SortOrder::OldToNew)), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_view() {
        let items = vec![make_item(1, 1, false)];
        assert!(derive_view(&items, Filter::Complete, SortOrder::NewToOld).is_empty());
        assert!(derive_view(&[], Filter::All, SortOrder::OldToNew).is_empty());
    }
}
