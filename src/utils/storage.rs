// ============================================================================
// STORAGE - key/value persistence (localStorage in the browser)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use web_sys::{window, Storage};

/// Minimal string store. The auth state and the API client only ever need
/// get/set/remove on plain strings.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str) -> Result<(), String>;
}

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        get_local_storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .set_item(key, value)
            .map_err(|_| format!("Could not write '{}' to localStorage", key))
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        let storage = get_local_storage().ok_or("localStorage is not available")?;
        storage
            .remove_item(key)
            .map_err(|_| format!("Could not remove '{}' from localStorage", key))
    }
}

/// In-memory store, used off-browser and in tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), String> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
