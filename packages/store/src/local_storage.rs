//! # Browser `localStorage` session storage
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the **web platform**.
//! It reads and writes `window.localStorage` through `web-sys`, so the
//! persisted token survives page reloads the same way any other SPA state
//! under a namespaced key would.
//!
//! The struct is zero-size: the `Storage` handle is looked up on every call
//! because `web_sys::Storage` is neither `Send` nor `Sync`.

use crate::error::StorageError;
use crate::persist::SessionStorage;

/// `window.localStorage`-backed SessionStorage.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|e| StorageError::Js(format!("{e:?}")))?
            .ok_or(StorageError::Unavailable)
    }
}

impl SessionStorage for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::Js(format!("{e:?}")))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Js(format!("{e:?}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Js(format!("{e:?}")))
    }
}
