//! # Translations and the locale adapter
//!
//! Catalogs are TOML files under `locales/`, one per locale. Nested tables
//! are flattened to dotted keys, so
//!
//! ```toml
//! [session]
//! logout = "Sign out"
//! ```
//!
//! is looked up as `session.logout`. Lookups fall back to the fallback locale
//! and finally to the key itself, so a missing string shows up on screen
//! instead of failing.
//!
//! The locale is chosen once at startup. [`LocaleAdapter`] is the handle the
//! UI configuration carries; it shares the loaded [`I18n`] instead of copying
//! the catalogs.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::StartupError;

/// Catalogs bundled with the storefront, `(locale, toml source)`.
const BUNDLED_CATALOGS: &[(&str, &str)] = &[
    ("en", include_str!("../locales/en.toml")),
    ("zh-TW", include_str!("../locales/zh-TW.toml")),
];

type Catalog = BTreeMap<String, String>;

/// Translation catalogs plus the active and fallback locale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct I18n {
    locale: String,
    fallback: String,
    catalogs: BTreeMap<String, Catalog>,
}

impl I18n {
    /// Load the bundled catalogs and select `locale`, falling back to
    /// `fallback` for missing keys.
    pub fn storefront(locale: &str, fallback: &str) -> Result<Self, StartupError> {
        let mut i18n = Self::default();
        for (name, source) in BUNDLED_CATALOGS {
            i18n.add_catalog(name, source)?;
        }
        i18n.select(locale, fallback)
    }

    /// Parse a TOML catalog and register it under `locale`, merging with any
    /// keys already loaded for that locale.
    pub fn add_catalog(&mut self, locale: &str, source: &str) -> Result<(), StartupError> {
        let table: toml::Table = toml::from_str(source).map_err(|source| StartupError::Catalog {
            locale: locale.to_string(),
            source,
        })?;
        let catalog = self.catalogs.entry(locale.to_string()).or_default();
        flatten("", &table, catalog);
        Ok(())
    }

    /// Choose the active and fallback locales. Both must have a catalog.
    pub fn select(mut self, locale: &str, fallback: &str) -> Result<Self, StartupError> {
        for name in [locale, fallback] {
            if !self.catalogs.contains_key(name) {
                return Err(StartupError::UnknownLocale(name.to_string()));
            }
        }
        self.locale = locale.to_string();
        self.fallback = fallback.to_string();
        Ok(self)
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.catalogs.keys().map(String::as_str)
    }

    /// Translate `key`.
    pub fn t(&self, key: &str) -> String {
        self.lookup(&self.locale, key)
            .or_else(|| self.lookup(&self.fallback, key))
            .unwrap_or(key)
            .to_string()
    }

    /// Translate `key` and substitute `{name}` placeholders from `args`.
    ///
    /// The template is scanned once; substituted values are never
    /// re-scanned. Unknown placeholders are left as written.
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let template = self.t(key);
        let mut out = String::with_capacity(template.len());
        let mut rest = template.as_str();

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                out.push_str(&rest[open..]);
                rest = "";
                break;
            };
            let name = &after[..close];
            match args.iter().find(|(arg, _)| *arg == name) {
                Some((_, value)) => out.push_str(value),
                None => out.push_str(&rest[open..open + close + 2]),
            }
            rest = &after[close + 1..];
        }
        out.push_str(rest);
        out
    }

    fn lookup(&self, locale: &str, key: &str) -> Option<&str> {
        self.catalogs.get(locale)?.get(key).map(String::as_str)
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut Catalog) {
    for (key, value) in table {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            toml::Value::Table(inner) => flatten(&path, inner, out),
            toml::Value::String(s) => {
                out.insert(path, s.clone());
            }
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}

/// Binds the translation subsystem into the UI configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct LocaleAdapter {
    i18n: Arc<I18n>,
}

impl LocaleAdapter {
    pub fn bind(i18n: Arc<I18n>) -> Self {
        Self { i18n }
    }

    pub fn current(&self) -> &str {
        self.i18n.locale()
    }

    pub fn fallback(&self) -> &str {
        self.i18n.fallback()
    }

    pub fn t(&self, key: &str) -> String {
        self.i18n.t(key)
    }

    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        self.i18n.t_with(key, args)
    }
}
