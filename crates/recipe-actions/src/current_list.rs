//! Current List Tracker
//!
//! Keeps the user's selected list name in key-value storage. Every read goes
//! back to storage so other tabs and scripts on the origin stay in step.

use crate::config::DEFAULT_STORAGE_KEY;
use crate::error::{ActionError, ActionResult};
use crate::storage::KeyValueStore;

pub struct CurrentListTracker<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CurrentListTracker<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Seed the current list on page activation.
    ///
    /// Persists `first_menu_entry` only when nothing is stored yet.
    /// Returns the value to display; `None` when there is neither a stored
    /// value nor a usable menu entry.
    pub fn initialize(&self, first_menu_entry: Option<&str>) -> ActionResult<Option<String>> {
        if let Some(current) = self.current()? {
            return Ok(Some(current));
        }

        match first_menu_entry.map(str::trim).filter(|t| !t.is_empty()) {
            Some(first) => {
                self.store.set(&self.key, first)?;
                log::info!("Current list initialized to {first:?}");
                Ok(Some(first.to_string()))
            }
            None => {
                log::warn!("No list menu entries; current list left unset");
                Ok(None)
            }
        }
    }

    /// Persist a menu selection. Returns the value to display.
    pub fn select(&self, name: &str) -> ActionResult<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ActionError::EmptyListTitle);
        }
        self.store.set(&self.key, name)?;
        log::info!("Current list set to {name:?}");
        Ok(name.to_string())
    }

    /// Fresh read of the stored value. Blank values count as unset.
    pub fn current(&self) -> ActionResult<Option<String>> {
        let value = self.store.get(&self.key)?;
        Ok(value.filter(|v| !v.trim().is_empty()))
    }
}
