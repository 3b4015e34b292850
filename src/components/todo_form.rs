//! Todo Form Component
//!
//! Single input used both for new tasks and for editing an existing one.

use leptos::prelude::*;
use todo_store::Command;

use crate::store::use_app_store;

/// Add / update form with the empty-input hint
#[component]
pub fn TodoForm() -> impl IntoView {
    let store = use_app_store();

    let editing = move || store.with(|s| s.editing().is_some());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        store.dispatch(Command::Submit);
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder=move || if editing() { "Update task..." } else { "Add new task..." }
                prop:value=move || store.with(|s| s.input().to_string())
                on:input=move |ev| store.dispatch(Command::SetInput(event_target_value(&ev)))
            />
            <button type="submit">{move || if editing() { "Update" } else { "Add" }}</button>
            <Show when=editing>
                <button type="button" class="cancel-btn" on:click=move |_| store.dispatch(Command::CancelEdit)>
                    "Cancel"
                </button>
            </Show>
        </form>
        <p class=move || if store.with(|s| s.empty_input()) { "input-hint error" } else { "input-hint" }>
            "Please enter your task..."
        </p>
    }
}
