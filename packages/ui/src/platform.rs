//! Shared session-storage constructor for all platforms.
//!
//! Returns the [`store::SessionStorage`] appropriate for the target:
//! - **Web** (WASM + `web` feature): `window.localStorage`
//! - **WASM without `web`**: in-memory, nothing survives a reload
//! - **Native**: one JSON file per key under `<data_dir>/storefront/`

use std::sync::Arc;

use store::SessionStorage;

/// Create the platform-appropriate storage for the persisted session.
pub fn platform_storage() -> Arc<dyn SessionStorage> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Arc::new(store::LocalStorage::new())
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Arc::new(store::MemoryStorage::new())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("storefront");
        Arc::new(store::FileStorage::new(base))
    }
}
