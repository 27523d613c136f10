//! Kanban Column Component
//!
//! Column header (drag handle for column reordering), the task list with its
//! drop indicator, and the inline add-task input.

use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_container_mousemove, make_on_mousedown, make_on_mouseleave, Axis, DndSignals};

use crate::components::KanbanCard;
use crate::context::use_board_context;
use crate::models::{Column, CreateTaskPayload};
use crate::store::{store_create_task, use_board_store};

/// Delay before an empty input closes on blur, so clicks inside it land first
const BLUR_CLOSE_DELAY_MS: u32 = 150;

/// Inline add-task input at the bottom of a column
#[component]
fn AddTaskInput(column_id: String) -> impl IntoView {
    let store = use_board_store();
    let (open, set_open) = signal(false);
    let (title, set_title) = signal(String::new());
    let input_ref = NodeRef::<html::Textarea>::new();

    let focus_input = move || {
        Timeout::new(0, move || {
            if let Some(input) = input_ref.get_untracked() {
                let _ = input.focus();
            }
        })
        .forget();
    };

    let hide = move || {
        set_open.set(false);
        set_title.set(String::new());
    };

    let create = move || {
        let trimmed = title.get_untracked().trim().to_string();
        if trimmed.is_empty() {
            hide();
            return;
        }
        let payload = CreateTaskPayload {
            column_id: column_id.clone(),
            title: trimmed,
        };
        if let Some(id) = store_create_task(&store, &payload) {
            tracing::info!(task_id = %id, column_id = %payload.column_id, "task created");
        }
        set_title.set(String::new());
        focus_input();
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" if !ev.shift_key() => {
            ev.prevent_default();
            create();
        }
        "Escape" => hide(),
        _ => {}
    };

    let on_blur = move |_| {
        Timeout::new(BLUR_CLOSE_DELAY_MS, move || {
            // Column may be gone by now
            let empty = title.try_with_untracked(|t| t.trim().is_empty()).unwrap_or(false);
            if empty {
                set_open.try_set(false);
            }
        })
        .forget();
    };

    view! {
        <div class="add-task">
            <Show
                when=move || open.get()
                fallback=move || view! {
                    <button
                        class="add-task-btn"
                        on:click=move |_| {
                            set_open.set(true);
                            focus_input();
                        }
                    >
                        "+ Add task"
                    </button>
                }
            >
                <textarea
                    class="add-task-input"
                    rows="2"
                    placeholder="Task title..."
                    node_ref=input_ref
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                    on:keydown=on_keydown.clone()
                    on:blur=on_blur
                ></textarea>
            </Show>
        </div>
    }
}

/// One board column, looked up by id in the filtered view
#[component]
pub fn KanbanColumn(
    column_id: String,
    columns: Memo<Vec<Column>>,
    task_dnd: DndSignals,
    column_dnd: DndSignals,
) -> impl IntoView {
    let ctx = use_board_context();
    let options = ctx.options;

    let lookup_id = column_id.clone();
    let column = Memo::new(move |_| columns.with(|cs| cs.iter().find(|c| c.id == lookup_id).cloned()));

    let title = move || column.with(|c| c.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let count = move || column.with(|c| c.as_ref().map_or(0, Column::display_count));
    let description = move || column.with(|c| c.as_ref().and_then(|c| c.description.clone()));
    let tasks = move || column.with(|c| c.as_ref().map(|c| c.tasks.clone()).unwrap_or_default());
    let visible_len = move || column.with(|c| c.as_ref().map_or(0, |c| c.tasks.len()));

    let on_header_mousedown = make_on_mousedown(column_dnd, column_id.clone());
    let on_task_mousemove = make_on_container_mousemove(task_dnd, column_id.clone(), "[data-card-id]", Axis::Vertical);
    let on_task_mouseleave = make_on_mouseleave(task_dnd);

    let drag_id = column_id.clone();
    let is_dragging = move || column_dnd.is_dragging(&drag_id);
    let slot_id = column_id.clone();
    let drop_index = Memo::new(move |_| task_dnd.drop_index_in(&slot_id));

    view! {
        <div
            class=move || {
                let mut c = String::from("kanban-column");
                if is_dragging() { c.push_str(" dragging"); }
                if drop_index.get().is_some() { c.push_str(" drag-over"); }
                c
            }
            data-column-id=column_id.clone()
            on:mousemove=move |ev| {
                if options.tasks_draggable() {
                    on_task_mousemove(ev);
                }
            }
            on:mouseleave=on_task_mouseleave
        >
            <div
                class=move || if options.columns_draggable() { "column-header draggable" } else { "column-header" }
                on:mousedown=move |ev| {
                    if options.columns_draggable() {
                        on_header_mousedown(ev);
                    }
                }
            >
                <span class="column-title">{title}</span>
                <span class="column-count">{count}</span>
            </div>
            {move || description().map(|d| view! { <p class="column-description">{d}</p> })}

            <div class="column-tasks">
                <For
                    each=tasks
                    // Cards take their task by value, so any edit must remount the card
                    key=|task| task.clone()
                    children=move |task| {
                        let task_id = task.id.clone();
                        let drop_before = move || {
                            drop_index.get().is_some_and(|index| {
                                column.with(|c| c.as_ref().and_then(|c| c.position_of(&task_id))) == Some(index)
                            })
                        };
                        view! {
                            <div class=move || if drop_before() { "card-slot drop-before" } else { "card-slot" }>
                                <KanbanCard task=task dnd=task_dnd />
                            </div>
                        }
                    }
                />
                <Show when=move || drop_index.get().is_some_and(|index| index >= visible_len())>
                    <div class="drop-indicator"></div>
                </Show>
            </div>

            {options.can_add_tasks().then(|| view! { <AddTaskInput column_id=column_id.clone() /> })}
        </div>
    }
}
