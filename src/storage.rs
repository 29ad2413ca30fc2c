//! Key/value persistence for small UI flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The theme preference is the only persisted state. [`FlagStore`] keeps the
//! theme core independent of `localStorage` so it can be exercised natively
//! with [`MemoryStore`]; the browser binding uses [`LocalStore`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// String key/value storage. Reads and writes are best-effort.
pub trait FlagStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store for tests and hosts without persistent storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::new();
        store.set(key, value);
        store
    }
}

impl FlagStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// `window.localStorage`, resolved on each access.
///
/// Private browsing modes can refuse storage; that reads as "nothing
/// persisted" and drops writes.
#[cfg(feature = "browser")]
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

#[cfg(feature = "browser")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().unwrap_or(None)
    }
}

#[cfg(feature = "browser")]
impl FlagStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).unwrap_or(None)
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            log::warn!("localStorage unavailable; {key} not persisted");
            return;
        };
        if let Err(err) = storage.set_item(key, value) {
            log::warn!("failed to persist {key}: {err:?}");
        }
    }
}
