//! Application Context
//!
//! Services shared by all components, provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;
use recipe_actions::{
    ActionError, ActionResult, ClientConfig, CurrentListTracker, HttpRecipeApi, InFlight, KeyValueStore,
    UpdatePolicy,
};

use crate::page;
use crate::storage;

/// Browser-bound services. Not `Send`: lives on the UI thread only.
pub struct Services {
    pub api: HttpRecipeApi,
    pub tracker: CurrentListTracker<Rc<dyn KeyValueStore>>,
    pub in_flight: InFlight,
    pub config: ClientConfig,
}

impl Services {
    /// Wire up storage and the HTTP client from page config
    pub fn load(config: ClientConfig) -> ActionResult<Self> {
        let origin = page::page_origin().unwrap_or_default();
        let api = HttpRecipeApi::new(&config.resolve_api_base(&origin)).map_err(ActionError::from)?;
        let tracker = CurrentListTracker::with_key(storage::open_store(), config.storage_key.clone());

        Ok(Self {
            api,
            tracker,
            in_flight: InFlight::new(),
            config,
        })
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Rc<Services>, LocalStorage>,
}

impl AppContext {
    pub fn new(services: Services) -> Self {
        Self {
            services: StoredValue::new_local(Rc::new(services)),
        }
    }

    /// Shared services, cloneable into async tasks
    pub fn services(&self) -> Rc<Services> {
        self.services.get_value()
    }

    pub fn update_policy(&self) -> UpdatePolicy {
        self.services.with_value(|s| s.config.update_policy)
    }

    pub fn notice_ms(&self) -> u32 {
        self.services.with_value(|s| s.config.notice_ms)
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
