//! Global Application State Store
//!
//! Wraps `TodoStore` in a local signal so components re-render on every
//! dispatched command.

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use todo_store::{Command, StoreConfig, TodoStore};

use crate::storage::BrowserStorage;

pub type BrowserTodoStore = TodoStore<BrowserStorage>;

/// Handle to the store, provided via context
#[derive(Clone, Copy)]
pub struct AppStore {
    state: RwSignal<BrowserTodoStore, LocalStorage>,
}

impl AppStore {
    /// Hydrate from browser storage
    pub fn new(config: StoreConfig) -> Self {
        let storage = BrowserStorage::open();
        log::info!(
            "opening todo store '{}' ({})",
            config.storage_key,
            if storage.is_persistent() { "localStorage" } else { "memory" }
        );
        Self {
            state: RwSignal::new_local(TodoStore::load(storage, config)),
        }
    }

    /// Apply a user intent
    pub fn dispatch(&self, command: Command) {
        self.state.update(|store| store.dispatch(command));
    }

    /// Read the store, tracking it in the current reactive scope
    pub fn with<R>(&self, f: impl FnOnce(&BrowserTodoStore) -> R) -> R {
        self.state.with(f)
    }
}

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
