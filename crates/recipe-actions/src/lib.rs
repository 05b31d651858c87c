//! Recipe Actions
//!
//! Platform-independent behavior behind the recipe list client:
//! the persisted current list, favorite toggling and add-to-list.
//! The browser crate supplies storage and renders; everything here is
//! plain Rust and is tested natively.

mod api;
mod config;
mod current_list;
mod error;
mod favorites;
mod in_flight;
mod lists;
mod models;
mod notice;
mod storage;

#[cfg(test)]
mod test_support;

pub use api::{interpret_response, ApiMessage, HttpRecipeApi, RecipeApi};
pub use config::{ClientConfig, UpdatePolicy, DEFAULT_NOTICE_MS, DEFAULT_STORAGE_KEY};
pub use current_list::CurrentListTracker;
pub use error::{ActionError, ActionResult, ApiError, StorageError};
pub use favorites::{toggle_favorite, FavoriteAction, FavoriteState, FAVORITED_CLASS, NOT_FAVORITED_CLASS};
pub use in_flight::{InFlight, InFlightGuard};
pub use lists::add_to_current_list;
pub use models::{AddToListRequest, FavoriteRequest, ListEntry, PageData, RecipeEntry, RecipeId};
pub use notice::{Notice, NoticeLevel};
pub use storage::{KeyValueStore, MemoryStore};
