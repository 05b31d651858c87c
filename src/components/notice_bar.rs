//! Notice Bar Component

use leptos::prelude::*;

use crate::store::{store_dismiss_notice, use_app_store, AppStateStoreFields};

#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="notice-bar" role="status">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.level.css_class()>
                            <span>{notice.text}</span>
                            <button class="notice-close" on:click=move |_| store_dismiss_notice(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
