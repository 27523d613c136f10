//! Kanban Board App
//!
//! Loads the seed board into the store and lays out filter, board and
//! details panel.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::Board;
use crate::components::{AssigneeFilter, KanbanBoard, TaskDetails};
use crate::context::{BoardContext, BoardOptions, FilterOptions};
use crate::seed::BoardSeed;
use crate::store::{use_task_count, BoardState};

fn load_board(seed: BoardSeed) -> Board {
    match seed.load() {
        Ok(board) => {
            tracing::info!(
                columns = board.columns().len(),
                tasks = board.task_count(),
                "seed board loaded"
            );
            board
        }
        Err(err) => {
            tracing::error!(%err, "failed to load seed board, starting empty");
            Board::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(BoardState::new(load_board(BoardSeed::default())));

    // Provide context to all children
    provide_context(store);
    provide_context(BoardContext::new(BoardOptions::default(), FilterOptions::default()));

    let task_count = use_task_count(store);

    view! {
        <div class="app-layout">
            <main class="main-content">
                <header class="board-header">
                    <h1>"Kanban Board"</h1>
                    <AssigneeFilter />
                </header>

                <KanbanBoard />

                <p class="task-count">{move || format!("{} tasks", task_count.get())}</p>
            </main>

            <TaskDetails />
        </div>
    }
}
