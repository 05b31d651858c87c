//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use recipe_actions::{ActionError, ListEntry, Notice, PageData, RecipeEntry, RecipeId};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Lists offered in the current-list menu
    pub lists: Vec<ListEntry>,
    /// Recipe rows on this page
    pub recipes: Vec<RecipeEntry>,
    /// Displayed current list (mirrors storage)
    pub current_list: Option<String>,
    /// Visible notices, oldest first
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn from_page(page: PageData, current_list: Option<String>) -> Self {
        Self {
            lists: page.lists,
            recipes: page.recipes,
            current_list,
            notices: Vec::new(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Favorited flag of a recipe row
pub fn store_is_favorited(store: &AppStore, recipe_id: &RecipeId) -> bool {
    store.recipes().read().iter()
        .find(|recipe| &recipe.id == recipe_id)
        .map(|recipe| recipe.favorited)
        .unwrap_or(false)
}

/// Set the favorited flag of a recipe row by ID
pub fn store_set_favorited(store: &AppStore, recipe_id: &RecipeId, favorited: bool) {
    if let Some(recipe) = store.recipes().write().iter_mut().find(|recipe| &recipe.id == recipe_id) {
        recipe.favorited = favorited;
    }
}

/// Show a notice and dismiss it after `ms`
pub fn store_push_notice(store: &AppStore, notice: Notice, ms: u32) {
    let id = notice.id;
    store.notices().write().push(notice);

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(ms).await;
        store_dismiss_notice(&store, id);
    });
}

/// Show the notice for a failed action
pub fn store_push_error(store: &AppStore, err: &ActionError, ms: u32) {
    store_push_notice(store, Notice::from_error(err), ms);
}

pub fn store_dismiss_notice(store: &AppStore, notice_id: u64) {
    store.notices().write().retain(|notice| notice.id != notice_id);
}
