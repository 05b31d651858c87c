//! Current List Badge
//!
//! Shows the list that new recipes are added to.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CurrentListBadge() -> impl IntoView {
    let store = use_app_store();

    view! {
        <span id="currentList" class="current-list">
            {move || store.current_list().get().unwrap_or_else(|| "No list selected".to_string())}
        </span>
    }
}
