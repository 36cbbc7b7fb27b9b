//! # SessionStore — the session plus its partial persistence
//!
//! [`SessionStore`] owns the current [`Session`] and writes the persisted
//! subset (the token) to a [`SessionStorage`] backend under a namespaced key.
//! It is constructed explicitly at startup and handed to whoever needs it;
//! there is no process-wide instance.
//!
//! ## [`SessionStorage`] trait
//!
//! A synchronous string key/value interface, the shape of the browser's
//! `localStorage`. Implementations live in sibling modules
//! ([`crate::memory`], [`crate::file_store`], and `local_storage` on web).
//!
//! ## Write-back
//!
//! | Method | Persists |
//! |--------|----------|
//! | [`login`](SessionStore::login) | when the token changed |
//! | [`logout`](SessionStore::logout) | always (`{"token":""}`) |
//!
//! Storage failures are logged and never roll back the in-memory session:
//! the UI keeps working, the token just won't survive a reload.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{SessionError, StorageError};
use crate::models::LoginPayload;
use crate::session::{PersistedSession, Session};

/// Key/value storage for the persisted session.
pub trait SessionStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// The session together with the storage it persists to.
#[derive(Clone)]
pub struct SessionStore {
    session: Session,
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl SessionStore {
    /// Open the store, restoring the token saved under `key`.
    ///
    /// Unreadable or malformed persisted state is discarded with a warning
    /// and the store starts logged out.
    pub fn open(storage: Arc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let session = match load(storage.as_ref(), &key) {
            Ok(Some(persisted)) => {
                tracing::info!(key = %key, restored = !persisted.token.is_empty(), "restored session");
                Session::restore(persisted)
            }
            Ok(None) => Session::default(),
            Err(e) => {
                tracing::warn!(key = %key, "discarding persisted session: {e}");
                Session::default()
            }
        };

        Self {
            session,
            storage,
            key,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Validate and apply a login payload, persisting the token if it changed.
    pub fn login(&mut self, payload: &LoginPayload) -> Result<(), SessionError> {
        let previous = self.session.token.clone();
        self.session.login(payload)?;
        if self.session.token != previous {
            self.persist();
        }
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save(self.storage.as_ref(), &self.key, &self.session.persisted()) {
            tracing::error!(key = %self.key, "failed to persist session: {e}");
        }
    }
}

impl Deref for SessionStore {
    type Target = Session;

    fn deref(&self) -> &Session {
        &self.session
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.session == other.session && self.key == other.key
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("key", &self.key)
            .field("logged_in", &self.session.is_logged_in())
            .field("account", &self.session.account)
            .finish_non_exhaustive()
    }
}

fn load(storage: &dyn SessionStorage, key: &str) -> Result<Option<PersistedSession>, SessionError> {
    match storage.get_item(key)? {
        Some(raw) => Ok(Some(PersistedSession::from_json(&raw)?)),
        None => Ok(None),
    }
}

fn save(storage: &dyn SessionStorage, key: &str, persisted: &PersistedSession) -> Result<(), SessionError> {
    storage.set_item(key, &persisted.to_json()?)?;
    Ok(())
}
