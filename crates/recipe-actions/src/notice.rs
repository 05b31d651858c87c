//! User-facing notices for action outcomes.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{ActionError, ApiError};

static NEXT_NOTICE_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn css_class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice notice-info",
            NoticeLevel::Error => "notice notice-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Info, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::with_level(NoticeLevel::Error, text)
    }

    fn with_level(level: NoticeLevel, text: impl Into<String>) -> Self {
        Self { id: NEXT_NOTICE_ID.fetch_add(1, Ordering::Relaxed), level, text: text.into() }
    }

    /// Short message for a failed action. Details go to the log, not the user.
    pub fn from_error(err: &ActionError) -> Self {
        let text = match err {
            ActionError::NoCurrentList => "Pick a list first.".to_string(),
            ActionError::EmptyListTitle => "That list has no name.".to_string(),
            ActionError::Busy(_) => "Still saving, try again in a moment.".to_string(),
            ActionError::Storage(_) => "Your list choice could not be saved in this browser.".to_string(),
            ActionError::Api(ApiError::Status { status: 401, .. }) => "Please log in first.".to_string(),
            ActionError::Api(ApiError::Status { status, .. }) => format!("The server refused the change ({status})."),
            ActionError::Api(ApiError::Network(_)) => "Could not reach the server.".to_string(),
            ActionError::Api(ApiError::InvalidUrl(_)) => "The client is misconfigured.".to_string(),
        };
        Self::error(text)
    }
}
