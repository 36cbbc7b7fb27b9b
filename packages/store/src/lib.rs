//! # Session store for the storefront client
//!
//! Platform-neutral state crate: the signed-in user's [`Session`], the typed
//! [`LoginPayload`] validation in front of it, and the [`SessionStore`] that
//! persists the token through a [`SessionStorage`] backend.
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`MemoryStorage`] | everywhere (tests, ephemeral sessions) |
//! | [`FileStorage`] | native |
//! | `LocalStorage` | `wasm32` with the `web` feature |

pub mod config;
pub mod error;
pub mod models;
pub mod persist;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

mod file_store;
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::StorefrontConfig;
pub use error::{SessionError, StorageError};
pub use models::{LoginPayload, Role, SessionUpdate};
pub use persist::{SessionStorage, SessionStore};
pub use session::{PersistedSession, Session, AVATAR_URL_BASE};
