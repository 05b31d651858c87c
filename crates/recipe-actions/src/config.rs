//! Client Configuration
//!
//! Settings the page may override; everything has a working default.

use serde::{Deserialize, Serialize};

/// Storage key shared with any other script on the origin
pub const DEFAULT_STORAGE_KEY: &str = "currentList";

/// How long a notice stays visible
pub const DEFAULT_NOTICE_MS: u32 = 4000;

/// When the favorite indicator flips relative to the server call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdatePolicy {
    /// Flip immediately, roll back if the request fails
    #[default]
    Optimistic,
    /// Flip only once the server has answered with success
    Confirmed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Absolute base URL for the API. `None` means the page origin.
    pub api_base: Option<String>,
    pub storage_key: String,
    pub update_policy: UpdatePolicy,
    pub notice_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            update_policy: UpdatePolicy::default(),
            notice_ms: DEFAULT_NOTICE_MS,
        }
    }
}

impl ClientConfig {
    /// Base URL to use, falling back to the given page origin
    pub fn resolve_api_base(&self, origin: &str) -> String {
        match &self.api_base {
            Some(base) if !base.trim().is_empty() => base.trim().to_string(),
            _ => origin.to_string(),
        }
    }
}
