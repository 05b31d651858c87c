//! Error Types
//!
//! Storage, transport and action-level failures.

use thiserror::Error;

/// Common result type for actions
pub type ActionResult<T> = Result<T, ActionError>;

/// Key-value storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Storage exists but refused the operation (quota, privacy mode)
    #[error("storage access denied: {0}")]
    Access(String),
    /// No storage is available at all
    #[error("storage unavailable")]
    Unavailable,
}

/// HTTP request failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// Errors surfaced to the UI by the recipe actions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("no current list selected")]
    NoCurrentList,
    #[error("list title is empty")]
    EmptyListTitle,
    #[error("a request for recipe {0} is already in flight")]
    Busy(String),
}
