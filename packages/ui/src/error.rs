//! Startup errors raised while registering plugins.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("plugin `{name}` failed to install")]
    Plugin {
        name: &'static str,
        #[source]
        source: Box<StartupError>,
    },

    #[error("plugin `{plugin}` requires the `{capability}` capability")]
    MissingCapability {
        plugin: &'static str,
        capability: &'static str,
    },

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),

    #[error("no translations for locale `{0}`")]
    UnknownLocale(String),

    #[error("invalid translation catalog for `{locale}`: {source}")]
    Catalog {
        locale: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}
