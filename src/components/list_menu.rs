//! Current List Menu Component
//!
//! Dropdown entries; clicking one makes it the current list.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{store_push_error, use_app_store, AppStateStoreFields};

#[component]
pub fn CurrentListMenu() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let select = move |title: String| {
        let services = ctx.services();
        match services.tracker.select(&title) {
            Ok(shown) => *store.current_list().write() = Some(shown),
            Err(e) => {
                log::warn!("[MENU] Could not select list {:?}: {}", title, e);
                store_push_error(&store, &e, ctx.notice_ms());
            }
        }
    };

    view! {
        <ul id="currentListMenu" class="dropdown-menu">
            <For
                each=move || store.lists().get()
                key=|list| list.title.clone()
                children=move |list| {
                    let title = list.title.clone();
                    let is_active = {
                        let title = title.clone();
                        move || store.current_list().get().as_deref() == Some(title.as_str())
                    };
                    view! {
                        <li>
                            <a
                                class=move || if is_active() { "dropdown-item active" } else { "dropdown-item" }
                                href="#"
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    select(title.clone());
                                }
                            >
                                {list.title}
                            </a>
                        </li>
                    }
                }
            />
        </ul>
    }
}
