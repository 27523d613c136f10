//! Assignee Filter
//!
//! Filter state, the filtered-columns projection and the selection state of
//! the filter menu.

use std::collections::HashSet;

use crate::models::{Assignee, Column, Task};

/// Filter key: assignee id, or None for unassigned
pub type AssigneeKey = Option<String>;

/// Set of assignee keys restricting the board view. Empty shows everything.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssigneeFilter {
    keys: HashSet<AssigneeKey>,
}

impl AssigneeFilter {
    /// Build from a selection; an empty selection disables filtering
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator<Item = AssigneeKey>,
    {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.keys.is_empty()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if !self.is_active() {
            return true;
        }
        match task.assignee_key() {
            Some(id) => self.keys.iter().any(|k| k.as_deref() == Some(id)),
            None => self.keys.contains(&None),
        }
    }
}

/// Columns restricted to tasks matching the filter. Column order and metadata
/// are untouched; columns with no match stay present but empty.
pub fn filtered_columns(columns: &[Column], filter: &AssigneeFilter) -> Vec<Column> {
    if !filter.is_active() {
        return columns.to_vec();
    }
    columns
        .iter()
        .map(|column| Column {
            id: column.id.clone(),
            title: column.title.clone(),
            description: column.description.clone(),
            tasks: column.tasks.iter().filter(|t| filter.matches(t)).cloned().collect(),
            task_count: column.task_count,
        })
        .collect()
}

/// Default number of assignee avatars shown before the overflow menu
pub const DEFAULT_MAX_VISIBLE: usize = 4;

/// Selection held by the filter menu
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssigneeSelection {
    /// Selected assignee ids in the order they were picked
    selected: Vec<String>,
    unassigned: bool,
}

impl AssigneeSelection {
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|s| s == id)
    }

    pub fn is_unassigned_selected(&self) -> bool {
        self.unassigned
    }

    /// No filter active
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty() && !self.unassigned
    }

    pub fn toggle_assignee(&mut self, id: &str) {
        if let Some(pos) = self.selected.iter().position(|s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id.to_string());
        }
    }

    pub fn toggle_unassigned(&mut self) {
        self.unassigned = !self.unassigned;
    }

    pub fn clear(&mut self) {
        self.selected.clear();
        self.unassigned = false;
    }

    /// Keys for the store: selected ids, then None if unassigned is selected
    pub fn keys(&self) -> Vec<AssigneeKey> {
        self.selected
            .iter()
            .cloned()
            .map(Some)
            .chain(self.unassigned.then_some(None))
            .collect()
    }
}

/// Split assignees into (shown as avatars, listed in the overflow menu)
pub fn split_visible(assignees: &[Assignee], max_visible: usize) -> (&[Assignee], &[Assignee]) {
    assignees.split_at(max_visible.min(assignees.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::{assignee, column, ids, make_board, task};

    fn task_ids(column: &Column) -> Vec<&str> {
        column.tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn test_empty_filter_returns_columns_unchanged() {
        let board = make_board();
        let filter = AssigneeFilter::from_keys(Vec::new());
        assert!(!filter.is_active());
        assert_eq!(filtered_columns(board.columns(), &filter), board.columns());
    }

    #[test]
    fn test_unassigned_filter() {
        let board = make_board();
        let filter = AssigneeFilter::from_keys(vec![None]);
        let view = filtered_columns(board.columns(), &filter);

        assert_eq!(view.len(), 3);
        assert_eq!(task_ids(&view[0]), ["B"]);
        assert!(view[1].tasks.is_empty());
        assert!(view[2].tasks.is_empty());
        let order: Vec<_> = view.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(order, ["col-1", "col-2", "col-3"]);
    }

    #[test]
    fn test_filter_then_move_scenario() {
        let mut board = make_board();
        let filter = AssigneeFilter::from_keys(vec![Some("u1".to_string()), None]);

        let view = filtered_columns(board.columns(), &filter);
        assert_eq!(task_ids(&view[0]), ["A", "B"]);

        board.move_task("C", "col-1", "col-2", 0).unwrap();
        assert_eq!(ids(&board, "col-1"), ["A", "B"]);
        assert_eq!(ids(&board, "col-2")[0], "C");
    }

    #[test]
    fn test_filter_keeps_column_metadata() {
        let mut col = column("col-9", vec![task("A", Some("u1")), task("B", Some("u2"))]);
        col.description = Some("lane".to_string());
        col.task_count = Some(40);

        let filter = AssigneeFilter::from_keys(vec![Some("u2".to_string())]);
        let view = filtered_columns(std::slice::from_ref(&col), &filter);
        assert_eq!(view[0].title, col.title);
        assert_eq!(view[0].description, col.description);
        assert_eq!(view[0].task_count, Some(40));
        assert_eq!(task_ids(&view[0]), ["B"]);
    }

    #[test]
    fn test_selection_keys_order() {
        let mut selection = AssigneeSelection::default();
        assert!(selection.is_empty());
        assert!(selection.keys().is_empty());

        selection.toggle_unassigned();
        selection.toggle_assignee("u2");
        selection.toggle_assignee("u1");
        assert_eq!(
            selection.keys(),
            vec![Some("u2".to_string()), Some("u1".to_string()), None]
        );

        selection.toggle_assignee("u2");
        assert!(!selection.is_selected("u2"));
        assert!(selection.is_selected("u1"));

        selection.clear();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_split_visible() {
        let people: Vec<_> = (1..=6).map(|i| assignee(&format!("u{}", i), "Some One")).collect();

        let (visible, overflow) = split_visible(&people, DEFAULT_MAX_VISIBLE);
        assert_eq!(visible.len(), 4);
        assert_eq!(overflow.len(), 2);
        assert_eq!(overflow[0].id, "u5");

        let (visible, overflow) = split_visible(&people[..2], DEFAULT_MAX_VISIBLE);
        assert_eq!(visible.len(), 2);
        assert!(overflow.is_empty());
    }
}
