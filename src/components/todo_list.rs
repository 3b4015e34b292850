//! Todo List Component
//!
//! Renders the filtered and sorted view of the store.

use leptos::prelude::*;
use todo_store::TodoItem;

use crate::components::TodoRow;
use crate::store::use_app_store;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        store.with(|s| s.visible().into_iter().cloned().collect::<Vec<TodoItem>>())
    });

    view! {
        <div class="todo-list">
            <Show
                when=move || !visible.get().is_empty()
                fallback=|| view! { <p class="empty-list">"No Task Yet ...."</p> }
            >
                <ul>
                    <For
                        each=move || visible.get()
                        // Every rendered field is part of the key so edits re-render the row
                        key=|item| (item.id, item.text.clone(), item.is_completed)
                        children=move |item| view! { <TodoRow item=item /> }
                    />
                </ul>
            </Show>
        </div>
    }
}
