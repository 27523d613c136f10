//! Kanban Board Component
//!
//! Horizontal strip of columns. Owns one drag context for tasks and one for
//! columns and routes their drops into the store.

use leptos::prelude::*;
use leptos_dragdrop::*;

use crate::components::KanbanColumn;
use crate::context::use_board_context;
use crate::store::{store_drop_column, store_drop_task, use_board_store, use_filtered_columns};

/// Drop container id of the column strip
const BOARD_CONTAINER: &str = "board";

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let store = use_board_store();
    let options = use_board_context().options;
    let columns = use_filtered_columns(store);

    let task_dnd = create_dnd_signals(Callback::new(move |(task_id, target): (String, DropTarget)| {
        store_drop_task(&store, &task_id, &target.container, target.index);
    }));
    let column_dnd = create_dnd_signals(Callback::new(move |(column_id, target): (String, DropTarget)| {
        if target.container == BOARD_CONTAINER {
            store_drop_column(&store, &column_id, target.index);
        }
    }));

    let on_mousemove = make_on_container_mousemove(
        column_dnd,
        BOARD_CONTAINER.to_string(),
        "[data-column-id]",
        Axis::Horizontal,
    );
    let on_mouseleave = make_on_mouseleave(column_dnd);

    let column_ids = move || columns.with(|cs| cs.iter().map(|c| c.id.clone()).collect::<Vec<_>>());
    let column_drop = Memo::new(move |_| column_dnd.drop_index_in(BOARD_CONTAINER));
    let column_position = move |id: &str| columns.with(|cs| cs.iter().position(|c| c.id == id));

    view! {
        <div
            class=move || {
                let mut c = String::from("kanban-board");
                if options.read_only { c.push_str(" read-only"); }
                if column_dnd.dragging_id_read.get().is_some() { c.push_str(" column-dragging"); }
                c
            }
            on:mousemove=move |ev| {
                if options.columns_draggable() {
                    on_mousemove(ev);
                }
            }
            on:mouseleave=on_mouseleave
        >
            <For
                each=column_ids
                key=|id| id.clone()
                children=move |id| {
                    let slot_id = id.clone();
                    let drop_before = move || column_drop.get().is_some() && column_drop.get() == column_position(&slot_id);
                    view! {
                        <div class=move || if drop_before() { "column-slot drop-before" } else { "column-slot" }>
                            <KanbanColumn
                                column_id=id
                                columns=columns
                                task_dnd=task_dnd
                                column_dnd=column_dnd
                            />
                        </div>
                    }
                }
            />
            <Show when=move || column_drop.get().is_some_and(|index| index >= columns.with(Vec::len))>
                <div class="column-drop-indicator"></div>
            </Show>
        </div>
    }
}
