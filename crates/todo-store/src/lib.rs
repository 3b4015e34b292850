//! Smart To-Do Store
//!
//! Layered the same way as the UI it serves:
//! - model: item record, filter and sort options
//! - storage: key-value persistence abstraction
//! - codec: persisted document format
//! - store: collection, form state and command dispatch

mod clock;
mod codec;
mod command;
mod config;
mod error;
mod model;
mod storage;
mod store;
mod view;


pub use clock::{Clock, SystemClock};
pub use codec::{decode_collection, encode_collection};
pub use command::Command;
pub use config::{StoreConfig, DEFAULT_STORAGE_KEY};
pub use error::{TodoError, TodoResult};
pub use model::{Filter, SortOrder, TodoCounts, TodoId, TodoItem};
pub use storage::{KeyValueStorage, MemoryStorage};
pub use store::TodoStore;
pub use view::derive_view;
