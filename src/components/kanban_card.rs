//! Kanban Card Component
//!
//! A single task: title, description, priority, tags, footer with ticket and
//! assignee, plus the Edit/Delete menu.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crate::components::DeleteConfirmButton;
use crate::context::use_board_context;
use crate::models::{AssigneeBadge, Task};
use crate::store::{store_delete_task, use_board_store};

/// Ticket label and assignee badge
#[component]
fn CardFooter(task: Task) -> impl IntoView {
    let ctx = use_board_context();
    let task_id = task.id.clone();
    let title = match &task.assignee {
        Some(a) => format!("Assigned to: {}", a.name),
        None => "Assign user".to_string(),
    };

    let badge = match task.assignee_badge() {
        AssigneeBadge::Hidden => None,
        AssigneeBadge::Placeholder => Some(view! { <span class="assignee-placeholder">"+"</span> }.into_any()),
        AssigneeBadge::Avatar { assignee, src } => Some(
            view! { <img class="assignee-avatar" src=src.to_string() alt=assignee.name.clone() /> }.into_any(),
        ),
        AssigneeBadge::Initials(assignee) => Some(
            view! {
                <span class="assignee-initials" style=format!("background-color: {};", assignee.color)>
                    {assignee.initials.clone()}
                </span>
            }
            .into_any(),
        ),
    };

    view! {
        <div class="card-footer">
            <span class="card-ticket">{task.ticket_display()}</span>
            {badge.map(|badge| view! {
                <button
                    class="card-assignee"
                    title=title
                    on:click=move |ev| {
                        ev.stop_propagation();
                        ctx.open_task(&task_id);
                    }
                >
                    {badge}
                </button>
            })}
        </div>
    }
}

#[component]
pub fn KanbanCard(task: Task, dnd: DndSignals) -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();
    let options = ctx.options;

    let id = task.id.clone();
    let (menu_open, set_menu_open) = signal(false);
    let draggable = options.tasks_draggable() && task.is_draggable();
    let show_menu = options.show_task_menu && task.shows_menu();

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let drag_id = id.clone();
    let is_dragging = move || dnd.is_dragging(&drag_id);

    let click_id = id.clone();
    let on_click = move |_| {
        // Release of a drag also fires click on the card underneath
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        ctx.open_task(&click_id);
    };

    let edit_id = id.clone();
    let delete_id = id.clone();
    let on_delete = Callback::new(move |_| {
        set_menu_open.set(false);
        store_delete_task(&store, &delete_id);
    });

    view! {
        <div
            class=move || {
                let mut c = String::from("kanban-card");
                if is_dragging() { c.push_str(" dragging"); }
                if draggable { c.push_str(" draggable"); }
                c
            }
            data-card-id=id
            on:mousedown=move |ev| {
                if draggable {
                    on_mousedown(ev);
                }
            }
            on:click=on_click
        >
            <div class="card-header">
                <span class="card-title">{task.title.clone()}</span>
                {show_menu.then(|| view! {
                    <button
                        class="card-menu-btn"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_menu_open.update(|v| *v = !*v);
                        }
                    >
                        "⋯"
                    </button>
                })}
            </div>

            <Show when=move || menu_open.get()>
                <div class="card-menu">
                    <button
                        class="card-menu-item"
                        on:click={
                            let edit_id = edit_id.clone();
                            move |ev| {
                                ev.stop_propagation();
                                set_menu_open.set(false);
                                ctx.open_task(&edit_id);
                            }
                        }
                    >
                        "Edit"
                    </button>
                    {(!options.read_only).then(|| view! {
                        <DeleteConfirmButton label="Delete" on_confirm=on_delete />
                    })}
                </div>
            </Show>

            {task.description.clone().map(|d| view! { <p class="card-description">{d}</p> })}

            <div class="card-meta">
                {task.priority.map(|p| view! {
                    <span class=format!("priority-badge priority-{}", p.as_str())>{p.label()}</span>
                })}
                {task.tags.iter().map(|tag| view! {
                    <span class=format!("card-tag tag-{}", tag.color.as_str())>{tag.label.clone()}</span>
                }).collect_view()}
            </div>

            <CardFooter task=task.clone() />
        </div>
    }
}
