//! Board Context
//!
//! Display options and UI selection shared via Leptos Context API.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::filter::DEFAULT_MAX_VISIBLE;

/// Which board interactions are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardOptions {
    /// Disables every mutation from the UI
    pub read_only: bool,
    pub show_add_task: bool,
    pub show_task_menu: bool,
    pub can_drag_tasks: bool,
    pub can_drag_columns: bool,
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            read_only: false,
            show_add_task: true,
            show_task_menu: true,
            can_drag_tasks: true,
            can_drag_columns: true,
        }
    }
}

impl BoardOptions {
    pub fn tasks_draggable(&self) -> bool {
        self.can_drag_tasks && !self.read_only
    }

    pub fn columns_draggable(&self) -> bool {
        self.can_drag_columns && !self.read_only
    }

    pub fn can_add_tasks(&self) -> bool {
        self.show_add_task && !self.read_only
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterOptions {
    /// Avatars shown before the rest move into the overflow menu
    pub max_visible: usize,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Board-wide UI state provided via context
#[derive(Clone, Copy)]
pub struct BoardContext {
    pub options: BoardOptions,
    pub filter_options: FilterOptions,
    /// Task shown in the details panel - read
    pub selected_task: ReadSignal<Option<String>>,
    /// Task shown in the details panel - write
    set_selected_task: WriteSignal<Option<String>>,
}

impl BoardContext {
    pub fn new(options: BoardOptions, filter_options: FilterOptions) -> Self {
        let (selected_task, set_selected_task) = signal(None::<String>);
        Self {
            options,
            filter_options,
            selected_task,
            set_selected_task,
        }
    }

    /// Open the details panel for a task
    pub fn open_task(&self, task_id: &str) {
        tracing::debug!(task_id, "open task details");
        self.set_selected_task.set(Some(task_id.to_string()));
    }

    pub fn close_task(&self) {
        self.set_selected_task.set(None);
    }
}

pub fn use_board_context() -> BoardContext {
    use_context::<BoardContext>().expect("BoardContext should be provided")
}
