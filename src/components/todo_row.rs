//! Todo Row Component
//!
//! One item in the list.

use leptos::prelude::*;
use todo_store::{Command, TodoItem};

use crate::components::DeleteConfirmButton;
use crate::store::use_app_store;

/// A single to-do row with toggle, edit and delete
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let completed = item.is_completed;
    let is_editing = Signal::derive(move || store.with(|s| s.is_editing(id)));

    view! {
        <li class=move || {
            let mut c = String::from("todo-row");
            if completed { c.push_str(" completed"); }
            if is_editing.get() { c.push_str(" editing"); }
            c
        }>
            <label class="todo-main">
                <input
                    type="checkbox"
                    checked=completed
                    on:change=move |_| store.dispatch(Command::Toggle { id })
                />
                <span class="todo-text">{item.text}</span>
            </label>
            <div class="todo-actions">
                <button class="edit-btn" on:click=move |_| store.dispatch(Command::BeginEdit { id })>
                    "Edit"
                </button>
                <DeleteConfirmButton
                    button_class="delete-btn"
                    disabled=is_editing
                    on_confirm=Callback::new(move |_| store.dispatch(Command::Delete { id }))
                />
            </div>
        </li>
    }
}
