//! Recipe Lists Frontend App
//!
//! Current-list menu and badge on top, recipe rows below, notices floating.

use leptos::prelude::*;
use reactive_stores::Store;
use recipe_actions::PageData;

use crate::components::{CurrentListBadge, CurrentListMenu, NoticeBar, RecipeRow};
use crate::context::{AppContext, Services};
use crate::store::{store_push_error, AppState, AppStateStoreFields};

#[component]
pub fn App(services: Services, page: PageData) -> impl IntoView {
    // Seed the current list before first render so the badge never flashes empty
    let initial = services.tracker.initialize(page.first_list_title());
    let notice_ms = services.config.notice_ms;

    let store = Store::new(AppState::from_page(page, None));
    match initial {
        Ok(current) => {
            log::info!("[APP] Current list: {:?}", current);
            *store.current_list().write() = current;
        }
        Err(e) => {
            log::warn!("[APP] Could not initialize current list: {}", e);
            store_push_error(&store, &e, notice_ms);
        }
    }

    provide_context(store);
    provide_context(AppContext::new(services));

    view! {
        <div class="recipe-app">
            <nav class="list-nav">
                <span class="list-nav-label">"Adding to: "</span>
                <CurrentListBadge />
                <CurrentListMenu />
            </nav>

            <ul class="recipe-list list-group">
                <For
                    each=move || store.recipes().get()
                    key=|recipe| recipe.id.clone()
                    children=move |recipe| view! { <RecipeRow recipe=recipe /> }
                />
            </ul>

            <NoticeBar />
        </div>
    }
}
