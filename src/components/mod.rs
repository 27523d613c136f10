//! UI Components
//!
//! Board, columns, cards and the panels around them.

mod assignee_filter;
mod delete_confirm_button;
mod kanban_board;
mod kanban_card;
mod kanban_column;
mod task_details;

pub use assignee_filter::AssigneeFilter;
pub use delete_confirm_button::DeleteConfirmButton;
pub use kanban_board::KanbanBoard;
pub use kanban_card::KanbanCard;
pub use kanban_column::KanbanColumn;
pub use task_details::TaskDetails;
