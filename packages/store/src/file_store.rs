//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is a [`SessionStorage`] implementation for native hosts
//! (desktop builds and tests). Each key is one small JSON file:
//!
//! ```text
//! <base_dir>/
//! └── <key>.json         # e.g. shop-user.json → {"token":"..."}
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/storefront/` on Linux.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::persist::SessionStorage;

/// Filesystem-backed SessionStorage.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Path of the file holding `key`. Keys are single file-name
    /// components, so they can never point outside the base directory.
    fn item_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_plain = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0'])
            && Path::new(key).components().count() == 1;
        if !is_plain {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base.join(format!("{key}.json")))
    }
}

impl SessionStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.item_path(key)?) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.item_path(key)?;
        std::fs::create_dir_all(&self.base)?;
        std::fs::write(path, value)?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.item_path(key)?) {
            Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
