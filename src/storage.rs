//! Browser Storage
//!
//! `KeyValueStorage` backed by `window.localStorage`, falling back to memory
//! when the browser denies access (private mode, sandboxed iframes).

use todo_store::{KeyValueStorage, MemoryStorage, TodoError, TodoResult};
use wasm_bindgen::JsValue;

pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    pub fn open() -> Self {
        match web_sys::window().map(|window| window.local_storage()) {
            Some(Ok(Some(storage))) => BrowserStorage::Local(storage),
            _ => {
                log::warn!("localStorage unavailable, todos will not survive a reload");
                BrowserStorage::Memory(MemoryStorage::new())
            }
        }
    }

    pub fn is_persistent(&self) -> bool {
        matches!(self, BrowserStorage::Local(_))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> TodoResult<Option<String>> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).map_err(js_error),
            BrowserStorage::Memory(storage) => storage.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> TodoResult<()> {
        match self {
            BrowserStorage::Local(storage) => storage.set_item(key, value).map_err(js_error),
            BrowserStorage::Memory(storage) => storage.set(key, value),
        }
    }
}

fn js_error(err: JsValue) -> TodoError {
    TodoError::Storage(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}
