//! Browser Storage
//!
//! `localStorage` behind the `KeyValueStore` interface, with an in-memory
//! fallback when the browser refuses access.

use std::rc::Rc;

use recipe_actions::{KeyValueStore, MemoryStore, StorageError};

/// `window.localStorage`
pub struct BrowserStore {
    storage: web_sys::Storage,
}

impl BrowserStore {
    pub fn open() -> Result<Self, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Access(format!("{:?}", e)))?
            .ok_or(StorageError::Unavailable)?;
        Ok(Self { storage })
    }
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

/// Open `localStorage`, or keep the current list in memory for this page
pub fn open_store() -> Rc<dyn KeyValueStore> {
    match BrowserStore::open() {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("[STORAGE] localStorage unavailable ({}), using memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
