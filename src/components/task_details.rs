//! Task Details Component
//!
//! Side panel for the selected task. Title, description and assignee are
//! editable unless the board is read-only.

use leptos::prelude::*;

use crate::context::use_board_context;
use crate::store::{
    store_assign_task, store_rename_task, store_set_task_description, store_task, use_assignees, use_board_store,
};

#[component]
pub fn TaskDetails() -> impl IntoView {
    let store = use_board_store();
    let ctx = use_board_context();
    let read_only = ctx.options.read_only;
    let assignees = use_assignees(store);

    let task = Memo::new(move |_| ctx.selected_task.get().and_then(|id| store_task(&store, &id)));

    // Deleted while open
    Effect::new(move |_| {
        if ctx.selected_task.get().is_some() && task.with(Option::is_none) {
            ctx.close_task();
        }
    });

    let ticket = move || task.with(|t| t.as_ref().map_or_else(|| "--".to_string(), |t| t.ticket_display()));
    let title = move || task.with(|t| t.as_ref().map(|t| t.title.clone()).unwrap_or_default());
    let description = move || {
        task.with(|t| t.as_ref().and_then(|t| t.description.clone()).unwrap_or_default())
    };
    let assignee_id = move || task.with(|t| t.as_ref().and_then(|t| t.assignee_key().map(str::to_string)));

    let on_title_change = move |ev: web_sys::Event| {
        let Some(id) = ctx.selected_task.get_untracked() else {
            return;
        };
        let value = event_target_value(&ev);
        store_rename_task(&store, &id, &value);
        if value.trim().is_empty() {
            // Rejected; show the stored title again
            event_target::<web_sys::HtmlInputElement>(&ev).set_value(&title());
        }
    };

    let on_description_change = move |ev: web_sys::Event| {
        if let Some(id) = ctx.selected_task.get_untracked() {
            store_set_task_description(&store, &id, &event_target_value(&ev));
        }
    };

    let on_assignee_change = move |ev: web_sys::Event| {
        if let Some(id) = ctx.selected_task.get_untracked() {
            let value = event_target_value(&ev);
            let assignee = (!value.is_empty()).then_some(value.as_str());
            store_assign_task(&store, &id, assignee);
        }
    };

    view! {
        <Show when=move || task.with(Option::is_some)>
            <aside class="task-details">
                <div class="task-details-header">
                    <span class="task-details-ticket">{ticket}</span>
                    <button class="task-details-close" on:click=move |_| ctx.close_task()>"×"</button>
                </div>

                <label class="task-details-field">
                    <span>"Title"</span>
                    <input
                        type="text"
                        prop:value=title
                        disabled=read_only
                        on:change=on_title_change
                    />
                </label>

                <label class="task-details-field">
                    <span>"Description"</span>
                    <textarea
                        rows="4"
                        prop:value=description
                        disabled=read_only
                        on:change=on_description_change
                    ></textarea>
                </label>

                <label class="task-details-field">
                    <span>"Assignee"</span>
                    <select disabled=read_only on:change=on_assignee_change>
                        <option value="" selected=move || assignee_id().is_none()>"Unassigned"</option>
                        <For
                            each=move || assignees.get()
                            key=|a| a.id.clone()
                            children=move |a| {
                                let option_id = a.id.clone();
                                view! {
                                    <option
                                        value=a.id.clone()
                                        selected=move || assignee_id().as_deref() == Some(option_id.as_str())
                                    >
                                        {a.name}
                                    </option>
                                }
                            }
                        />
                    </select>
                </label>
            </aside>
        </Show>
    }
}
