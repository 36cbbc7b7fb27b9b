//! # Application configuration — `storefront.toml`
//!
//! Static configuration read once at startup by the web entry point. It names
//! the DOM node the app mounts into, the storage key the session persists
//! under, and the UI defaults handed to the theme and locale plugins.
//!
//! ## Structure
//!
//! ```toml
//! [app]
//! mount_point = "app"        # id of the element the app mounts into
//!
//! [session]
//! storage_key = "shop-user"  # namespaced key for the persisted token
//!
//! [ui]
//! default_theme = "pink"
//! default_locale = "en"
//! fallback_locale = "en"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`StorefrontConfig`] | Top-level config. TOML (de)serialisation and the canonical filename. |
//! | [`AppConfig`] | Mount point. |
//! | [`SessionConfig`] | Persistence key. |
//! | [`UiDefaults`] | Default theme name and locales. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `storefront.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub ui: UiDefaults,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Element id the root component mounts into.
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Storage key for the persisted session.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiDefaults {
    #[serde(default = "default_theme")]
    pub default_theme: String,
    #[serde(default = "default_locale")]
    pub default_locale: String,
    #[serde(default = "default_locale")]
    pub fallback_locale: String,
}

fn default_mount_point() -> String {
    "app".to_string()
}

fn default_storage_key() -> String {
    "shop-user".to_string()
}

fn default_theme() -> String {
    "pink".to_string()
}

fn default_locale() -> String {
    "en".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mount_point: default_mount_point(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl Default for UiDefaults {
    fn default() -> Self {
        Self {
            default_theme: default_theme(),
            default_locale: default_locale(),
            fallback_locale: default_locale(),
        }
    }
}

impl StorefrontConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "storefront.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
