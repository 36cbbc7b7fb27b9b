//! # Plugin registration
//!
//! Startup is an ordered list of [`Plugin`]s, each installing one named
//! capability into the [`AppBuilder`]:
//!
//! | Plugin | Capability | Requires |
//! |--------|-----------|----------|
//! | [`I18nPlugin`] | `i18n` — translation catalogs | — |
//! | [`UiPlugin`] | `ui` — themes + locale adapter | `i18n` |
//! | [`SessionPlugin`] | `session` — the restored [`SessionStore`] | — |
//!
//! [`register_plugins`] installs them in order and stops at the first
//! failure, wrapping it in [`StartupError::Plugin`] so the entry point can
//! report which step broke. [`AppBuilder::finish`] then hands back the
//! [`Capabilities`] the root component provides as context.

use std::sync::Arc;

use store::{SessionStorage, SessionStore, StorefrontConfig};

use crate::config::UiConfig;
use crate::error::StartupError;
use crate::i18n::{I18n, LocaleAdapter};
use crate::theme::ThemeConfig;

/// A registration step that grants the application a named capability.
pub trait Plugin {
    fn name(&self) -> &'static str;
    fn install(&self, app: &mut AppBuilder) -> Result<(), StartupError>;
}

/// Everything the plugins installed, ready to be provided to the UI tree.
#[derive(Clone, Debug, PartialEq)]
pub struct Capabilities {
    pub ui: UiConfig,
    /// The session as restored at startup. [`crate::StorefrontProvider`]
    /// seeds its signal from this and it is never updated afterwards;
    /// components read the live session through [`crate::use_session`].
    pub session: SessionStore,
    pub installed: Vec<&'static str>,
}

/// Root application handle passed to each plugin.
#[derive(Default)]
pub struct AppBuilder {
    installed: Vec<&'static str>,
    i18n: Option<Arc<I18n>>,
    ui: Option<UiConfig>,
    session: Option<SessionStore>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a single plugin.
    pub fn use_plugin(&mut self, plugin: &dyn Plugin) -> Result<&mut Self, StartupError> {
        let name = plugin.name();
        plugin.install(self).map_err(|e| StartupError::Plugin {
            name,
            source: Box::new(e),
        })?;
        tracing::info!(plugin = name, "installed plugin");
        self.installed.push(name);
        Ok(self)
    }

    /// Names of the installed plugins, in installation order.
    pub fn installed(&self) -> &[&'static str] {
        &self.installed
    }

    pub fn i18n(&self) -> Option<&Arc<I18n>> {
        self.i18n.as_ref()
    }

    pub fn provide_i18n(&mut self, i18n: I18n) {
        self.i18n = Some(Arc::new(i18n));
    }

    pub fn provide_ui(&mut self, ui: UiConfig) {
        self.ui = Some(ui);
    }

    pub fn provide_session(&mut self, session: SessionStore) {
        self.session = Some(session);
    }

    /// Check that every capability the root component needs was installed.
    pub fn finish(self) -> Result<Capabilities, StartupError> {
        let ui = self.ui.ok_or(StartupError::MissingCapability {
            plugin: "app",
            capability: UiPlugin::NAME,
        })?;
        let session = self.session.ok_or(StartupError::MissingCapability {
            plugin: "app",
            capability: SessionPlugin::NAME,
        })?;
        Ok(Capabilities {
            ui,
            session,
            installed: self.installed,
        })
    }
}

/// Install `plugins` in order, stopping at the first failure.
pub fn register_plugins(app: &mut AppBuilder, plugins: &[Box<dyn Plugin>]) -> Result<(), StartupError> {
    for plugin in plugins {
        app.use_plugin(plugin.as_ref())?;
    }
    Ok(())
}

/// The storefront's plugin list: translations, then UI, then the session.
pub fn default_plugins(config: &StorefrontConfig, storage: Arc<dyn SessionStorage>) -> Vec<Box<dyn Plugin>> {
    vec![
        Box::new(I18nPlugin::new(
            &config.ui.default_locale,
            &config.ui.fallback_locale,
        )),
        Box::new(UiPlugin::new(&config.ui.default_theme)),
        Box::new(SessionPlugin::new(storage, &config.session.storage_key)),
    ]
}

/// Loads the bundled translation catalogs.
pub struct I18nPlugin {
    locale: String,
    fallback: String,
}

impl I18nPlugin {
    pub const NAME: &'static str = "i18n";

    pub fn new(locale: &str, fallback: &str) -> Self {
        Self {
            locale: locale.to_string(),
            fallback: fallback.to_string(),
        }
    }
}

impl Plugin for I18nPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn install(&self, app: &mut AppBuilder) -> Result<(), StartupError> {
        app.provide_i18n(I18n::storefront(&self.locale, &self.fallback)?);
        Ok(())
    }
}

/// Builds the theme set and binds the locale adapter to the loaded i18n.
pub struct UiPlugin {
    default_theme: String,
}

impl UiPlugin {
    pub const NAME: &'static str = "ui";

    pub fn new(default_theme: &str) -> Self {
        Self {
            default_theme: default_theme.to_string(),
        }
    }
}

impl Plugin for UiPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn install(&self, app: &mut AppBuilder) -> Result<(), StartupError> {
        let i18n = app.i18n().cloned().ok_or(StartupError::MissingCapability {
            plugin: Self::NAME,
            capability: I18nPlugin::NAME,
        })?;
        let theme = ThemeConfig::storefront().with_default(&self.default_theme)?;
        app.provide_ui(UiConfig::new(theme, LocaleAdapter::bind(i18n)));
        Ok(())
    }
}

/// Opens the session store, restoring the persisted token.
pub struct SessionPlugin {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl SessionPlugin {
    pub const NAME: &'static str = "session";

    pub fn new(storage: Arc<dyn SessionStorage>, key: &str) -> Self {
        Self {
            storage,
            key: key.to_string(),
        }
    }
}

impl Plugin for SessionPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn install(&self, app: &mut AppBuilder) -> Result<(), StartupError> {
        app.provide_session(SessionStore::open(self.storage.clone(), self.key.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use store::{LoginPayload, MemoryStorage};

    use super::*;

    fn memory() -> Arc<dyn SessionStorage> {
        Arc::new(MemoryStorage::new())
    }

    #[test]
    fn test_default_plugins_install_in_order() {
        let config = StorefrontConfig::default();
        let mut app = AppBuilder::new();
        register_plugins(&mut app, &default_plugins(&config, memory())).unwrap();
        assert_eq!(app.installed(), &["i18n", "ui", "session"]);

        let caps = app.finish().unwrap();
        assert_eq!(caps.ui.theme.default_theme(), "pink");
        assert_eq!(caps.ui.locale.current(), "en");
        assert_eq!(caps.session.key(), "shop-user");
        assert!(!caps.session.is_logged_in());
    }

    #[test]
    fn test_session_plugin_restores_token() {
        let storage = MemoryStorage::new();
        let mut previous = SessionStore::open(Arc::new(storage.clone()), "shop-user");
        previous
            .login(&LoginPayload::default().with_token("T1").with_account("a"))
            .unwrap();

        let mut app = AppBuilder::new();
        app.use_plugin(&SessionPlugin::new(Arc::new(storage), "shop-user"))
            .unwrap();
        let session = app.session.unwrap();
        assert_eq!(session.token, "T1");
        assert_eq!(session.account, "");
    }

    #[test]
    fn test_ui_plugin_requires_i18n() {
        let mut app = AppBuilder::new();
        let err = app.use_plugin(&UiPlugin::new("pink")).err().unwrap();
        match err {
            StartupError::Plugin { name, source } => {
                assert_eq!(name, "ui");
                assert!(matches!(
                    *source,
                    StartupError::MissingCapability {
                        plugin: "ui",
                        capability: "i18n"
                    }
                ));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(app.installed().is_empty());
    }

    struct Recording {
        name: &'static str,
        log: Rc<RefCell<Vec<&'static str>>>,
        fail: bool,
    }

    impl Plugin for Recording {
        fn name(&self) -> &'static str {
            self.name
        }

        fn install(&self, _app: &mut AppBuilder) -> Result<(), StartupError> {
            self.log.borrow_mut().push(self.name);
            if self.fail {
                return Err(StartupError::UnknownTheme("broken".to_string()));
            }
            Ok(())
        }
    }

    #[test]
    fn test_registration_stops_at_first_failure() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let plugin = |name, fail| -> Box<dyn Plugin> {
            Box::new(Recording {
                name,
                log: log.clone(),
                fail,
            })
        };
        let plugins = vec![plugin("first", false), plugin("second", true), plugin("third", false)];

        let mut app = AppBuilder::new();
        let err = register_plugins(&mut app, &plugins).unwrap_err();
        assert!(matches!(err, StartupError::Plugin { name: "second", .. }));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
        assert_eq!(app.installed(), &["first"]);
    }

    #[test]
    fn test_unknown_theme_surfaces_as_plugin_error() {
        let config = StorefrontConfig::from_toml("[ui]\ndefault_theme = \"neon\"").unwrap();
        let mut app = AppBuilder::new();
        let err = register_plugins(&mut app, &default_plugins(&config, memory())).unwrap_err();
        assert_eq!(err.to_string(), "plugin `ui` failed to install");
        assert_eq!(app.installed(), &["i18n"]);
    }

    #[test]
    fn test_finish_requires_session() {
        let mut app = AppBuilder::new();
        app.use_plugin(&I18nPlugin::new("en", "en")).unwrap();
        app.use_plugin(&UiPlugin::new("dark")).unwrap();
        let err = app.finish().unwrap_err();
        assert!(matches!(
            err,
            StartupError::MissingCapability {
                capability: "session",
                ..
            }
        ));
    }
}
