//! Assignee Filter Component
//!
//! Avatar toggles for the first few assignees, an overflow menu for the rest,
//! an "unassigned" toggle and a clear button. Every change is pushed to the
//! store as the new assignee filter.

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::filter::{split_visible, AssigneeSelection};
use crate::models::Assignee;
use crate::store::{store_set_assignee_filter, use_assignees, use_board_store};

fn avatar_view(assignee: &Assignee) -> AnyView {
    match assignee.avatar_src() {
        Some(src) => view! {
            <img class="filter-avatar-img" src=src.to_string() alt=assignee.name.clone() />
        }
        .into_any(),
        None => view! {
            <span class="filter-avatar-initials" style=format!("background-color: {};", assignee.color)>
                {assignee.initials.clone()}
            </span>
        }
        .into_any(),
    }
}

#[component]
pub fn AssigneeFilter() -> impl IntoView {
    let store = use_board_store();
    let max_visible = use_board_context().filter_options.max_visible;
    let assignees = use_assignees(store);

    let (selection, set_selection) = signal(AssigneeSelection::default());
    let (menu_open, set_menu_open) = signal(false);

    // Assignee list changed (task reassigned or deleted): start over
    Effect::new(move |prev: Option<()>| {
        assignees.track();
        if prev.is_some() {
            set_selection.set(AssigneeSelection::default());
        }
    });

    Effect::new(move |_| {
        let keys = selection.with(AssigneeSelection::keys);
        store_set_assignee_filter(&store, keys);
    });

    let is_selected = move |id: &str| selection.with(|s| s.is_selected(id));
    let toggle = move |id: &str| set_selection.update(|s| s.toggle_assignee(id));

    let overflow_count = move || assignees.with(|list| split_visible(list, max_visible).1.len());
    let overflow_selected = move || {
        assignees.with(|list| split_visible(list, max_visible).1.iter().any(|a| is_selected(&a.id)))
    };

    let visible = move || {
        assignees.with(|list| {
            split_visible(list, max_visible)
                .0
                .iter()
                .map(|assignee| {
                    let id = assignee.id.clone();
                    let class_id = id.clone();
                    view! {
                        <button
                            class=move || {
                                if is_selected(&class_id) { "filter-avatar selected" } else { "filter-avatar" }
                            }
                            title=assignee.name.clone()
                            on:click=move |_| toggle(&id)
                        >
                            {avatar_view(assignee)}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let overflow_menu = move || {
        assignees.with(|list| {
            split_visible(list, max_visible)
                .1
                .iter()
                .map(|assignee| {
                    let id = assignee.id.clone();
                    let checked_id = id.clone();
                    view! {
                        <label class="filter-menu-item">
                            <input
                                type="checkbox"
                                prop:checked=move || is_selected(&checked_id)
                                on:change=move |_| toggle(&id)
                            />
                            {avatar_view(assignee)}
                            <span class="filter-menu-name">{assignee.name.clone()}</span>
                        </label>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <div class="assignee-filter">
            {visible}

            <Show when=move || { overflow_count() > 0 }>
                <div class="filter-overflow">
                    <button
                        class=move || if overflow_selected() { "filter-overflow-btn has-selected" } else { "filter-overflow-btn" }
                        on:click=move |_| set_menu_open.update(|v| *v = !*v)
                    >
                        {move || format!("+{}", overflow_count())}
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="filter-menu">{overflow_menu}</div>
                    </Show>
                </div>
            </Show>

            <button
                class=move || {
                    if selection.with(AssigneeSelection::is_unassigned_selected) {
                        "filter-unassigned selected"
                    } else {
                        "filter-unassigned"
                    }
                }
                title="Unassigned"
                on:click=move |_| set_selection.update(AssigneeSelection::toggle_unassigned)
            >
                "Unassigned"
            </button>

            <Show when=move || !selection.with(AssigneeSelection::is_empty)>
                <button
                    class="filter-clear"
                    on:click=move |_| {
                        set_selection.update(AssigneeSelection::clear);
                        set_menu_open.set(false);
                    }
                >
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
