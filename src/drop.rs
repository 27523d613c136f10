//! Drop Resolution
//!
//! Turns a drop slot reported by the gesture layer into a store payload.
//! Slots are counted over the rendered cards, which may be a filtered subset
//! of the column, so they are mapped back onto the full task sequence first.

use leptos_dragdrop::target_index_after_removal;

use crate::board::Board;
use crate::filter::AssigneeFilter;
use crate::models::{Column, TaskDropPayload, TaskReorderPayload};

/// Store operation a task drop resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropCommand {
    Reorder(TaskReorderPayload),
    Move(TaskDropPayload),
}

/// Positions of the tasks the filter lets through
fn visible_positions(column: &Column, filter: &AssigneeFilter) -> Vec<usize> {
    column
        .tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| filter.matches(t))
        .map(|(i, _)| i)
        .collect()
}

/// Map an insertion slot among visible tasks to one in the full sequence
fn underlying_slot(column: &Column, visible: &[usize], visual_index: usize) -> usize {
    match visible.get(visual_index) {
        Some(&position) => position,
        None => visible.last().map_or(column.tasks.len(), |&last| last + 1),
    }
}

/// Resolve a task dropped into `target_column_id` at `visual_index`.
/// Returns None when the drop would not change anything or references
/// something that no longer exists.
pub fn resolve_task_drop(
    board: &Board,
    filter: &AssigneeFilter,
    task_id: &str,
    target_column_id: &str,
    visual_index: usize,
) -> Option<DropCommand> {
    let (from_column, from_index) = board.locate_task(task_id)?;
    let from_column = &board.columns()[from_column];
    let target = board.column(target_column_id)?;
    let visible = visible_positions(target, filter);

    if from_column.id == target.id {
        // Slots on either side of the card itself, counted over rendered cards
        let stays_put = match visible.iter().position(|&p| p == from_index) {
            Some(own) => visual_index == own || visual_index == own + 1,
            None => visual_index == visible.iter().filter(|&&p| p < from_index).count(),
        };
        if stays_put {
            return None;
        }
        let slot = underlying_slot(target, &visible, visual_index);
        return Some(DropCommand::Reorder(TaskReorderPayload {
            column_id: target.id.clone(),
            from_index,
            to_index: target_index_after_removal(from_index, slot),
        }));
    }

    Some(DropCommand::Move(TaskDropPayload {
        task_id: task_id.to_string(),
        from_column_id: from_column.id.clone(),
        to_column_id: target.id.clone(),
        to_index: underlying_slot(target, &visible, visual_index),
    }))
}

/// Resolve a column dropped at `insert_index` into (from, to) for
/// `reorder_columns`, or None when it stays put
pub fn resolve_column_drop(board: &Board, column_id: &str, insert_index: usize) -> Option<(usize, usize)> {
    let from = board.columns().iter().position(|c| c.id == column_id)?;
    let to = target_index_after_removal(from, insert_index);
    (to != from).then_some((from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::tests::{ids, make_board};

    fn no_filter() -> AssigneeFilter {
        AssigneeFilter::default()
    }

    fn apply(board: &mut Board, command: DropCommand) {
        let result = match command {
            DropCommand::Reorder(p) => board.reorder_task_in_column(&p.column_id, p.from_index, p.to_index),
            DropCommand::Move(p) => board.move_task(&p.task_id, &p.from_column_id, &p.to_column_id, p.to_index),
        };
        result.unwrap();
    }

    #[test]
    fn test_drop_on_own_slot_is_noop() {
        let board = make_board();
        // B sits at index 1: slots 1 and 2 surround it
        assert_eq!(resolve_task_drop(&board, &no_filter(), "B", "col-1", 1), None);
        assert_eq!(resolve_task_drop(&board, &no_filter(), "B", "col-1", 2), None);
    }

    #[test]
    fn test_drop_further_down_same_column() {
        let mut board = make_board();
        let command = resolve_task_drop(&board, &no_filter(), "A", "col-1", 3).unwrap();
        assert_eq!(
            command,
            DropCommand::Reorder(TaskReorderPayload {
                column_id: "col-1".to_string(),
                from_index: 0,
                to_index: 2,
            })
        );
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-1"), ["B", "C", "A"]);
    }

    #[test]
    fn test_drop_further_up_same_column() {
        let mut board = make_board();
        let command = resolve_task_drop(&board, &no_filter(), "C", "col-1", 0).unwrap();
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-1"), ["C", "A", "B"]);
    }

    #[test]
    fn test_drop_into_other_column() {
        let mut board = make_board();
        let command = resolve_task_drop(&board, &no_filter(), "B", "col-2", 1).unwrap();
        assert_eq!(
            command,
            DropCommand::Move(TaskDropPayload {
                task_id: "B".to_string(),
                from_column_id: "col-1".to_string(),
                to_column_id: "col-2".to_string(),
                to_index: 1,
            })
        );
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-2"), ["D", "B"]);
    }

    #[test]
    fn test_filtered_slots_map_to_full_sequence() {
        let mut board = make_board();
        // Only u2 visible: col-1 renders [C], col-2 renders []
        let filter = AssigneeFilter::from_keys(vec![Some("u2".to_string())]);

        // Before C in the rendered list = before C in [A, B, C]
        let command = resolve_task_drop(&board, &filter, "D", "col-1", 0).unwrap();
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-1"), ["A", "B", "D", "C"]);

        // Empty rendered list appends
        let command = resolve_task_drop(&board, &filter, "C", "col-3", 0).unwrap();
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-3"), ["C"]);
    }

    #[test]
    fn test_filtered_slot_past_end_goes_after_last_visible() {
        let mut board = make_board();
        // Only unassigned visible: col-1 renders [B]
        let filter = AssigneeFilter::from_keys(vec![None]);
        let command = resolve_task_drop(&board, &filter, "D", "col-1", 1).unwrap();
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-1"), ["A", "B", "D", "C"]);
    }

    #[test]
    fn test_unknown_references_resolve_to_none() {
        let board = make_board();
        assert_eq!(resolve_task_drop(&board, &no_filter(), "ghost", "col-1", 0), None);
        assert_eq!(resolve_task_drop(&board, &no_filter(), "A", "ghost", 0), None);
        assert_eq!(resolve_column_drop(&board, "ghost", 0), None);
    }

    #[test]
    fn test_column_drop() {
        let board = make_board();
        // col-1 dropped at the end of three columns
        assert_eq!(resolve_column_drop(&board, "col-1", 3), Some((0, 2)));
        assert_eq!(resolve_column_drop(&board, "col-3", 0), Some((2, 0)));
        assert_eq!(resolve_column_drop(&board, "col-2", 1), None);
        assert_eq!(resolve_column_drop(&board, "col-2", 2), None);
    }

    #[test]
    fn test_filtered_drop_next_to_itself_keeps_hidden_tasks() {
        let mut board = make_board();
        // u1 and u2 visible: col-1 renders [A, C], B is hidden between them
        let filter = AssigneeFilter::from_keys(vec![Some("u1".to_string()), Some("u2".to_string())]);

        assert_eq!(resolve_task_drop(&board, &filter, "A", "col-1", 0), None);
        assert_eq!(resolve_task_drop(&board, &filter, "A", "col-1", 1), None);
        assert_eq!(resolve_task_drop(&board, &filter, "C", "col-1", 1), None);
        assert_eq!(resolve_task_drop(&board, &filter, "C", "col-1", 2), None);
        assert_eq!(ids(&board, "col-1"), ["A", "B", "C"]);

        // Past C: A lands after it, B keeps its place relative to C
        let command = resolve_task_drop(&board, &filter, "A", "col-1", 2).unwrap();
        apply(&mut board, command);
        assert_eq!(ids(&board, "col-1"), ["B", "C", "A"]);
    }
}
