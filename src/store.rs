//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation
//! goes through the helpers below, which delegate to the board model and log
//! rejected operations instead of surfacing them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::drop::{resolve_column_drop, resolve_task_drop, DropCommand};
use crate::error::Result;
use crate::filter::{filtered_columns, AssigneeFilter, AssigneeKey};
use crate::models::{Assignee, Column, CreateTaskPayload, Task, TaskDropPayload, TaskReorderPayload};

/// Board plus the assignee filter applied to its view
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Unfiltered columns and tasks
    pub board: Board,
    /// Current assignee filter (empty = show all)
    pub assignee_filter: AssigneeFilter,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

fn report<T>(operation: &'static str, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(operation, %err, "board operation ignored");
            None
        }
    }
}

// ========================
// Derived Views
// ========================

/// Snapshot of the unfiltered columns
pub fn store_columns(store: &BoardStore) -> Vec<Column> {
    store.board().with(|board| board.columns().to_vec())
}

/// Columns as shown on the board, recomputed when the board or filter changes
pub fn use_filtered_columns(store: BoardStore) -> Memo<Vec<Column>> {
    Memo::new(move |_| {
        store
            .assignee_filter()
            .with(|filter| store.board().with(|board| filtered_columns(board.columns(), filter)))
    })
}

/// Distinct assignees across the board
pub fn use_assignees(store: BoardStore) -> Memo<Vec<Assignee>> {
    Memo::new(move |_| store.board().with(Board::all_assignees))
}

pub fn use_task_count(store: BoardStore) -> Memo<usize> {
    Memo::new(move |_| store.board().with(Board::task_count))
}

pub fn store_task(store: &BoardStore, task_id: &str) -> Option<Task> {
    store.board().with(|board| board.task_by_id(task_id).cloned())
}

// ========================
// Ordering
// ========================

pub fn store_move_task(store: &BoardStore, payload: &TaskDropPayload) {
    report(
        "move_task",
        store.board().write().move_task(
            &payload.task_id,
            &payload.from_column_id,
            &payload.to_column_id,
            payload.to_index,
        ),
    );
}

pub fn store_reorder_task(store: &BoardStore, payload: &TaskReorderPayload) {
    report(
        "reorder_task_in_column",
        store
            .board()
            .write()
            .reorder_task_in_column(&payload.column_id, payload.from_index, payload.to_index),
    );
}

pub fn store_reorder_columns(store: &BoardStore, from_index: usize, to_index: usize) {
    report("reorder_columns", store.board().write().reorder_columns(from_index, to_index));
}

/// Apply a task dropped at a visual slot of a (possibly filtered) column
pub fn store_drop_task(store: &BoardStore, task_id: &str, column_id: &str, visual_index: usize) {
    let command = store.assignee_filter().with_untracked(|filter| {
        store
            .board()
            .with_untracked(|board| resolve_task_drop(board, filter, task_id, column_id, visual_index))
    });
    match command {
        Some(DropCommand::Reorder(payload)) => store_reorder_task(store, &payload),
        Some(DropCommand::Move(payload)) => store_move_task(store, &payload),
        None => tracing::debug!(task_id, column_id, visual_index, "drop left board unchanged"),
    }
}

/// Apply a column dropped at an insertion slot of the column strip
pub fn store_drop_column(store: &BoardStore, column_id: &str, insert_index: usize) {
    let resolved = store
        .board()
        .with_untracked(|board| resolve_column_drop(board, column_id, insert_index));
    if let Some((from, to)) = resolved {
        store_reorder_columns(store, from, to);
    }
}

// ========================
// Task Lifecycle
// ========================

/// Create a task, returning its id
pub fn store_create_task(store: &BoardStore, payload: &CreateTaskPayload) -> Option<String> {
    report(
        "create_task",
        store.board().write().create_task(&payload.column_id, &payload.title),
    )
}

pub fn store_delete_task(store: &BoardStore, task_id: &str) {
    report("delete_task", store.board().write().delete_task(task_id));
}

pub fn store_rename_task(store: &BoardStore, task_id: &str, title: &str) {
    report("rename_task", store.board().write().rename_task(task_id, title));
}

pub fn store_set_task_description(store: &BoardStore, task_id: &str, description: &str) {
    report(
        "set_task_description",
        store.board().write().set_task_description(task_id, description),
    );
}

pub fn store_assign_task(store: &BoardStore, task_id: &str, assignee_id: Option<&str>) {
    report("assign_task", store.board().write().assign_task(task_id, assignee_id));
}

// ========================
// Filter
// ========================

/// Replace the filter; an empty selection shows every task
pub fn store_set_assignee_filter(store: &BoardStore, keys: Vec<AssigneeKey>) {
    let filter = AssigneeFilter::from_keys(keys);
    tracing::debug!(active = filter.is_active(), "assignee filter changed");
    store.assignee_filter().set(filter);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::make_board;

    fn task_ids(columns: &[Column], column_id: &str) -> Vec<String> {
        columns
            .iter()
            .find(|c| c.id == column_id)
            .map(|c| c.tasks.iter().map(|t| t.id.clone()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_filtered_view_follows_filter_and_board() {
        let store = Store::new(BoardState::new(make_board()));
        let view = use_filtered_columns(store);
        assert_eq!(view.get(), store_columns(&store));

        store_set_assignee_filter(&store, vec![Some("u1".to_string()), None]);
        assert_eq!(task_ids(&view.get(), "col-1"), ["A", "B"]);

        store_move_task(
            &store,
            &TaskDropPayload {
                task_id: "C".to_string(),
                from_column_id: "col-1".to_string(),
                to_column_id: "col-2".to_string(),
                to_index: 0,
            },
        );
        assert_eq!(task_ids(&store_columns(&store), "col-1"), ["A", "B"]);
        assert_eq!(task_ids(&store_columns(&store), "col-2"), ["C", "D"]);
        // C is u2, hidden by the filter
        assert_eq!(task_ids(&view.get(), "col-2"), ["D"]);

        store_set_assignee_filter(&store, Vec::new());
        assert_eq!(view.get(), store_columns(&store));
    }

    #[test]
    fn test_drop_under_filter_lands_in_full_sequence() {
        let store = Store::new(BoardState::new(make_board()));
        store_set_assignee_filter(&store, vec![None]);

        // col-1 renders only [B]; dropping D after it lands before C
        store_drop_task(&store, "D", "col-1", 1);
        assert_eq!(task_ids(&store_columns(&store), "col-1"), ["A", "B", "D", "C"]);
    }

    #[test]
    fn test_rejected_operations_leave_store_unchanged() {
        let store = Store::new(BoardState::new(make_board()));
        let before = store_columns(&store);

        store_delete_task(&store, "ghost");
        store_reorder_columns(&store, 7, 0);
        store_assign_task(&store, "A", Some("ghost"));
        assert!(store_create_task(
            &store,
            &CreateTaskPayload {
                column_id: "ghost".to_string(),
                title: "x".to_string(),
            }
        )
        .is_none());

        assert_eq!(store_columns(&store), before);
    }

    #[test]
    fn test_create_and_delete_through_store() {
        let store = Store::new(BoardState::new(make_board()));
        let count = use_task_count(store);
        let assignees = use_assignees(store).get();

        let id = store_create_task(
            &store,
            &CreateTaskPayload {
                column_id: "col-3".to_string(),
                title: "Fresh".to_string(),
            },
        )
        .unwrap();
        assert_eq!(count.get(), 5);
        assert_eq!(store_task(&store, &id).map(|t| t.title), Some("Fresh".to_string()));
        assert_eq!(use_assignees(store).get(), assignees);

        store_delete_task(&store, &id);
        assert_eq!(count.get(), 4);
        assert!(store_task(&store, &id).is_none());
    }

    #[test]
    fn test_column_drop_reorders() {
        let store = Store::new(BoardState::new(make_board()));
        store_drop_column(&store, "col-1", 3);
        let order: Vec<_> = store_columns(&store).into_iter().map(|c| c.id).collect();
        assert_eq!(order, ["col-2", "col-3", "col-1"]);
    }
}
