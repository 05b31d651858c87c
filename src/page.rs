//! Page Globals
//!
//! The server template embeds page data and optional config as JS globals.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use recipe_actions::{ClientConfig, PageData};

const PAGE_GLOBAL: &str = "__RECIPE_PAGE__";
const CONFIG_GLOBAL: &str = "__RECIPE_CONFIG__";

/// Read `window[name]`; missing or malformed values fall back to the default.
fn read_global<T: DeserializeOwned + Default>(name: &str) -> T {
    let Some(window) = web_sys::window() else {
        return T::default();
    };

    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED);
    if value.is_undefined() || value.is_null() {
        return T::default();
    }

    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        log::warn!("[PAGE] Ignoring malformed {}: {}", name, e);
        T::default()
    })
}

/// Page data with list titles trimmed so they match the stored current list
pub fn load_page_data() -> PageData {
    read_global::<PageData>(PAGE_GLOBAL).normalized()
}

pub fn load_config() -> ClientConfig {
    read_global(CONFIG_GLOBAL)
}

/// `window.location.origin`, used as the API base
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
