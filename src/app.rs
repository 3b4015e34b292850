//! Smart To-Do Frontend App
//!
//! Main application component: form card on top, list card below.

use leptos::prelude::*;
use todo_store::StoreConfig;

use crate::components::{TodoForm, TodoList, ViewControls};
use crate::store::AppStore;

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(StoreConfig::default());

    // Provide store to all children
    provide_context(store);

    let summary = move || {
        let counts = store.with(|s| s.counts());
        format!("{} items, {} done, {} left", counts.total, counts.completed, counts.remaining())
    };

    view! {
        <main class="todo-app">
            <section class="todo-card">
                <h1>"Smart To-Do List"</h1>
                <TodoForm />
            </section>

            <section class="todo-card">
                <ViewControls />
                <TodoList />
                <p class="item-count">{summary}</p>
            </section>
        </main>
    }
}
