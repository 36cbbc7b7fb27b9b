//! This crate contains the shared UI layer of the storefront: themes,
//! translations, plugin registration and the session context.

pub mod config;
pub mod error;
pub mod i18n;
pub mod plugins;
pub mod theme;

pub use config::UiConfig;
pub use error::StartupError;
pub use i18n::{I18n, LocaleAdapter};
pub use plugins::{
    default_plugins, register_plugins, AppBuilder, Capabilities, I18nPlugin, Plugin,
    SessionPlugin, UiPlugin,
};
pub use theme::{Theme, ThemeColors, ThemeConfig};

mod platform;
pub use platform::platform_storage;

mod session;
pub use session::{use_session, use_ui_config, LogoutButton, SessionBadge, StorefrontProvider};
