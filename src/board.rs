//! Board Model
//!
//! Ordered columns of ordered tasks. Every mutation either applies fully or
//! returns an error with the board unchanged.
//!
//! Reorder indices follow one convention: `from` is a position before
//! removal, the target is a position in the shortened sequence. Targets past
//! the end append.

use std::collections::HashSet;

use crate::error::{BoardError, Result};
use crate::models::{Assignee, Column, Priority, Task};

const TASK_ID_PREFIX: &str = "task-";

/// Ticket labels of created tasks continue the seed's T-1xx numbering
const TICKET_BASE: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
    /// Next numeric suffix for generated task ids; only ever increases
    next_task_seq: u64,
}

impl Board {
    pub fn new(columns: Vec<Column>) -> Self {
        let highest = columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .filter_map(|t| t.id.strip_prefix(TASK_ID_PREFIX)?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            columns,
            next_task_seq: highest.saturating_add(1),
        }
    }

    /// Unfiltered columns in board order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    fn column_index(&self, column_id: &str) -> Result<usize> {
        self.columns
            .iter()
            .position(|c| c.id == column_id)
            .ok_or_else(|| BoardError::ColumnNotFound { id: column_id.to_string() })
    }

    /// Total number of tasks across all columns
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// (column index, task index) of a task
    pub fn locate_task(&self, task_id: &str) -> Option<(usize, usize)> {
        self.columns
            .iter()
            .enumerate()
            .find_map(|(ci, c)| c.position_of(task_id).map(|ti| (ci, ti)))
    }

    pub fn task_by_id(&self, task_id: &str) -> Option<&Task> {
        self.locate_task(task_id)
            .map(|(ci, ti)| &self.columns[ci].tasks[ti])
    }

    fn task_mut(&mut self, task_id: &str) -> Result<&mut Task> {
        let (ci, ti) = self
            .locate_task(task_id)
            .ok_or_else(|| BoardError::TaskNotFound { id: task_id.to_string() })?;
        Ok(&mut self.columns[ci].tasks[ti])
    }

    // ========================
    // Ordering
    // ========================

    /// Remove a task from one column and insert it into another at `to_index`.
    /// When both ids name the same column this is a remove-then-insert reorder.
    pub fn move_task(
        &mut self,
        task_id: &str,
        from_column_id: &str,
        to_column_id: &str,
        to_index: usize,
    ) -> Result<()> {
        let from = self.column_index(from_column_id)?;
        let to = self.column_index(to_column_id)?;
        let position = self.columns[from].position_of(task_id).ok_or_else(|| {
            BoardError::TaskNotInColumn {
                task_id: task_id.to_string(),
                column_id: from_column_id.to_string(),
            }
        })?;

        let task = self.columns[from].tasks.remove(position);
        let target = &mut self.columns[to].tasks;
        let index = to_index.min(target.len());
        target.insert(index, task);

        tracing::debug!(task_id, from_column_id, to_column_id, index, "task moved");
        Ok(())
    }

    pub fn reorder_task_in_column(&mut self, column_id: &str, from_index: usize, to_index: usize) -> Result<()> {
        let ci = self.column_index(column_id)?;
        move_within(&mut self.columns[ci].tasks, from_index, to_index)?;
        tracing::debug!(column_id, from_index, to_index, "task reordered");
        Ok(())
    }

    pub fn reorder_columns(&mut self, from_index: usize, to_index: usize) -> Result<()> {
        move_within(&mut self.columns, from_index, to_index)?;
        tracing::debug!(from_index, to_index, "column reordered");
        Ok(())
    }

    // ========================
    // Task Lifecycle
    // ========================

    /// Append a new task to a column, returning its id
    pub fn create_task(&mut self, column_id: &str, title: &str) -> Result<String> {
        let ci = self.column_index(column_id)?;

        let mut seq = self.next_task_seq;
        let id = loop {
            let id = format!("{TASK_ID_PREFIX}{seq}");
            if self.locate_task(&id).is_none() {
                break id;
            }
            seq = seq.checked_add(1).ok_or(BoardError::TaskIdsExhausted)?;
        };
        let next_task_seq = seq.checked_add(1).ok_or(BoardError::TaskIdsExhausted)?;

        let mut task = Task::new(id.clone(), title.to_string());
        task.priority = Some(Priority::Medium);
        // Past the numbering range the label falls back to the id
        task.ticket_id = TICKET_BASE.checked_add(seq).map(|n| format!("T-{}", n));
        task.show_assignee = true;
        self.columns[ci].tasks.push(task);
        self.next_task_seq = next_task_seq;

        tracing::debug!(task_id = %id, column_id, "task created");
        Ok(id)
    }

    /// Remove a task from whichever column holds it
    pub fn delete_task(&mut self, task_id: &str) -> Result<Task> {
        let (ci, ti) = self
            .locate_task(task_id)
            .ok_or_else(|| BoardError::TaskNotFound { id: task_id.to_string() })?;
        let task = self.columns[ci].tasks.remove(ti);
        tracing::debug!(task_id, "task deleted");
        Ok(task)
    }

    // ========================
    // Task Details
    // ========================

    pub fn rename_task(&mut self, task_id: &str, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            return Err(BoardError::EmptyTitle);
        }
        self.task_mut(task_id)?.title = title.to_string();
        Ok(())
    }

    /// Empty description clears it
    pub fn set_task_description(&mut self, task_id: &str, description: &str) -> Result<()> {
        let task = self.task_mut(task_id)?;
        task.description = (!description.is_empty()).then(|| description.to_string());
        Ok(())
    }

    /// Assign a known assignee, or unassign with None
    pub fn assign_task(&mut self, task_id: &str, assignee_id: Option<&str>) -> Result<()> {
        let assignee = match assignee_id {
            Some(id) => Some(
                self.all_assignees()
                    .into_iter()
                    .find(|a| a.id == id)
                    .ok_or_else(|| BoardError::AssigneeNotFound { id: id.to_string() })?,
            ),
            None => None,
        };
        self.task_mut(task_id)?.assignee = assignee;
        Ok(())
    }

    // ========================
    // Derived
    // ========================

    /// Distinct assignees in board scan order. When two tasks carry the same
    /// assignee id, the first one scanned supplies the attributes.
    pub fn all_assignees(&self) -> Vec<Assignee> {
        let mut seen = HashSet::new();
        self.columns
            .iter()
            .flat_map(|c| c.tasks.iter())
            .filter_map(|t| t.assignee.as_ref())
            .filter(|a| seen.insert(a.id.as_str()))
            .cloned()
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// Remove at `from`, insert into the shortened sequence at `to` (clamped)
fn move_within<T>(items: &mut Vec<T>, from: usize, to: usize) -> Result<()> {
    if from >= items.len() {
        return Err(BoardError::IndexOutOfRange { index: from, len: items.len() });
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
    Ok(())
}
