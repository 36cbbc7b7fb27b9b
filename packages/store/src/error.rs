//! Error types for session validation and persistence.

use thiserror::Error;

/// Errors raised while validating a login payload or persisting the session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("unknown role `{0}` (expected USER or ADMIN)")]
    InvalidRole(String),

    #[error("cart count {0} is out of range")]
    InvalidCart(i64),

    #[error("session storage: {0}")]
    Storage(#[from] StorageError),

    #[error("persisted session is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors surfaced by a [`crate::SessionStorage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store does not exist on this platform or was refused
    /// (e.g. `localStorage` disabled in a private window).
    #[error("storage backend unavailable")]
    Unavailable,

    /// Keys must be plain names; `..` or path separators are refused.
    #[error("invalid storage key `{0}`")]
    InvalidKey(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("browser storage error: {0}")]
    Js(String),
}
