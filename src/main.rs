//! Recipe Lists Frontend Entry Point

mod app;
mod components;
mod context;
mod page;
mod storage;
mod store;

use app::App;
use context::Services;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    let config = page::load_config();
    let page = page::load_page_data();
    log::info!(
        "[APP] Starting with {} lists, {} recipes, policy {:?}",
        page.lists.len(),
        page.recipes.len(),
        config.update_policy
    );

    let services = match Services::load(config) {
        Ok(services) => services,
        Err(e) => {
            log::error!("[APP] Cannot start: {}", e);
            return;
        }
    };

    mount_to_body(move || view! { <App services=services page=page /> });
}
