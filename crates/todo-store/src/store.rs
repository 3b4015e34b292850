//! To-do Store
//!
//! Owns the canonical collection plus the form state around it (input text,
//! empty-input flag, edit target, selected filter and sort). Every change to
//! the collection is written back to storage in full.

use std::collections::HashSet;

use log::{debug, info, trace, warn};

use crate::clock::{Clock, SystemClock};
use crate::codec::{decode_collection, encode_collection};
use crate::command::Command;
use crate::config::StoreConfig;
use crate::error::{TodoError, TodoResult};
use crate::model::{allocate_id, counter_after, Filter, SortOrder, TodoCounts, TodoId, TodoItem};
use crate::storage::KeyValueStorage;
use crate::view::derive_view;

pub struct TodoStore<S, C = SystemClock> {
    storage: S,
    clock: C,
    config: StoreConfig,
    items: Vec<TodoItem>,
    next_id: Option<TodoId>,
    input: String,
    empty_input: bool,
    editing: Option<TodoId>,
    filter: Filter,
    sort: SortOrder,
}

impl<S: KeyValueStorage> TodoStore<S, SystemClock> {
    /// Hydrate from `storage` using the wall clock
    pub fn load(storage: S, config: StoreConfig) -> Self {
        Self::load_with_clock(storage, SystemClock, config)
    }
}

impl<S: KeyValueStorage, C: Clock> TodoStore<S, C> {
    /// Hydrate from `storage`; a missing or unreadable document yields an empty list
    pub fn load_with_clock(storage: S, clock: C, config: StoreConfig) -> Self {
        let items = match read_collection(&storage, &config.storage_key) {
            Ok(items) => {
                info!("loaded {} todos from '{}'", items.len(), config.storage_key);
                items
            }
            Err(err) => {
                warn!("starting with an empty list, could not read '{}': {}", config.storage_key, err);
                Vec::new()
            }
        };
        let next_id = counter_after(items.iter().map(|item| item.id).max());

        Self {
            storage,
            clock,
            filter: config.default_filter,
            sort: config.default_sort,
            config,
            items,
            next_id,
            input: String::new(),
            empty_input: false,
            editing: None,
        }
    }

    // ========================
    // Commands
    // ========================

    /// Apply a UI command; errors are recovered here and never returned
    pub fn dispatch(&mut self, command: Command) {
        if command.is_mutation() {
            debug!("dispatch {:?}", command);
        } else {
            trace!("dispatch {:?}", command);
        }

        let result = match command {
            Command::SetInput(text) => {
                self.set_input(text);
                Ok(())
            }
            Command::Submit => self.submit(),
            Command::Add { text } => self.add(&text).map(|_| ()),
            Command::BeginEdit { id } => self.begin_edit(id),
            Command::CancelEdit => {
                self.cancel_edit();
                Ok(())
            }
            Command::Edit { id, text } => self.edit(id, &text),
            Command::Toggle { id } => self.toggle_complete(id).map(|_| ()),
            Command::Delete { id } => self.delete(id).map(|_| ()),
            Command::SetFilter(filter) => {
                self.set_filter(filter);
                Ok(())
            }
            Command::SetSort(sort) => {
                self.set_sort(sort);
                Ok(())
            }
        };

        if let Err(err) = result {
            if err.is_ignorable() {
                debug!("ignored: {}", err);
            } else {
                warn!("command failed: {}", err);
            }
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Append a new item; empty text raises the empty-input flag instead
    ///
    /// Clears the form unless an edit target is selected.
    pub fn add(&mut self, text: &str) -> TodoResult<TodoId> {
        if text.trim().is_empty() {
            self.empty_input = true;
            return Err(TodoError::EmptyText);
        }

        let id = self.allocate_id();
        self.items.push(TodoItem::new(id, text, self.clock.now_millis()));
        // The form belongs to the edit in progress, if any
        if self.editing.is_none() {
            self.clear_input();
        }
        self.persist();
        Ok(id)
    }

    /// Replace the text of the current edit target and end editing
    pub fn edit(&mut self, id: TodoId, text: &str) -> TodoResult<()> {
        if self.editing != Some(id) {
            return Err(TodoError::NotEditing(id));
        }
        if text.trim().is_empty() {
            self.empty_input = true;
            return Err(TodoError::EmptyText);
        }

        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            self.editing = None;
            return Err(TodoError::NotFound(id));
        };
        item.text = text.to_string();

        self.editing = None;
        self.clear_input();
        self.persist();
        Ok(())
    }

    /// Flip completion; returns the new state
    pub fn toggle_complete(&mut self, id: TodoId) -> TodoResult<bool> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        item.is_completed = !item.is_completed;
        let completed = item.is_completed;

        self.persist();
        Ok(completed)
    }

    /// Remove an item; the edit target is locked
    pub fn delete(&mut self, id: TodoId) -> TodoResult<TodoItem> {
        if self.editing == Some(id) {
            return Err(TodoError::EditLocked(id));
        }
        let index = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(TodoError::NotFound(id))?;
        let removed = self.items.remove(index);

        self.persist();
        Ok(removed)
    }

    // ========================
    // Form State
    // ========================

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// Select `id` as edit target and load its text into the input
    pub fn begin_edit(&mut self, id: TodoId) -> TodoResult<()> {
        let text = self.get(id).ok_or(TodoError::NotFound(id))?.text.clone();
        self.input = text;
        self.editing = Some(id);
        self.empty_input = false;
        Ok(())
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
        self.clear_input();
    }

    /// Form submission: edit the target if one is selected, otherwise add
    pub fn submit(&mut self) -> TodoResult<()> {
        let text = self.input.clone();
        match self.editing {
            Some(id) => self.edit(id, &text),
            None => self.add(&text).map(|_| ()),
        }
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    // ========================
    // Queries
    // ========================

    /// Items in canonical insertion order
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn counts(&self) -> TodoCounts {
        TodoCounts {
            total: self.items.len(),
            completed: self.items.iter().filter(|item| item.is_completed).count(),
        }
    }

    /// Filtered and sorted view; the collection is left untouched
    pub fn view(&self, filter: Filter, sort: SortOrder) -> Vec<&TodoItem> {
        derive_view(&self.items, filter, sort)
    }

    /// View for the currently selected filter and sort
    pub fn visible(&self) -> Vec<&TodoItem> {
        self.view(self.filter, self.sort)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn empty_input(&self) -> bool {
        self.empty_input
    }

    pub fn editing(&self) -> Option<TodoId> {
        self.editing
    }

    pub fn is_editing(&self, id: TodoId) -> bool {
        self.editing == Some(id)
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // ========================
    // Helpers
    // ========================

    fn allocate_id(&mut self) -> TodoId {
        let used: HashSet<TodoId> = self.items.iter().map(|item| item.id).collect();
        allocate_id(&mut self.next_id, &used)
    }

    fn clear_input(&mut self) {
        self.input.clear();
        self.empty_input = false;
    }

    /// Write the full collection; failures keep the in-memory state
    fn persist(&mut self) {
        if let Err(err) = self.write_collection() {
            warn!("failed to persist {} todos to '{}': {}", self.items.len(), self.config.storage_key, err);
        }
    }

    fn write_collection(&mut self) -> TodoResult<()> {
        let document = encode_collection(&self.items)?;
        self.storage.set(&self.config.storage_key, &document)
    }
}

fn read_collection<S: KeyValueStorage>(storage: &S, key: &str) -> TodoResult<Vec<TodoItem>> {
    match storage.get(key)? {
        Some(raw) => decode_collection(&raw),
        None => Ok(Vec::new()),
    }
}

impl<S, C> std::fmt::Debug for TodoStore<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TodoStore")
            .field("storage_key", &self.config.storage_key)
            .field("items", &self.items)
            .field("input", &self.input)
            .field("empty_input", &self.empty_input)
            .field("editing", &self.editing)
            .field("filter", &self.filter)
            .field("sort", &self.sort)
            .finish()
    }
}
