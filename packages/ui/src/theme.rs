//! # Theme configuration
//!
//! The storefront ships two named themes, consumed by the rendering layer as
//! CSS custom properties:
//!
//! | Theme | Dark | Primary | App bar |
//! |-------|------|---------|---------|
//! | `pink` (default) | no | `#cd8a93ff` | `#F06292` |
//! | `dark` | yes | `#684a4cff` | `#322d2dff` |
//!
//! Colour values are passed through as-is; nothing here parses or validates
//! them.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::StartupError;

/// Prefix of the CSS custom properties emitted by [`Theme::css_variables`].
pub const CSS_VAR_PREFIX: &str = "--storefront";

/// Named colour tokens of a theme.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub surface: String,
    pub app_bar_background: String,
    #[serde(rename = "on-surface", default, skip_serializing_if = "Option::is_none")]
    pub on_surface: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    /// Render the theme as an inline style declaration list, e.g.
    /// `color-scheme: light; --storefront-primary: #cd8a93ff; ...`.
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let mut tokens = vec![
            ("primary", c.primary.as_str()),
            ("secondary", c.secondary.as_str()),
            ("background", c.background.as_str()),
            ("surface", c.surface.as_str()),
            ("app-bar-background", c.app_bar_background.as_str()),
        ];
        if let Some(on_surface) = c.on_surface.as_deref() {
            tokens.push(("on-surface", on_surface));
        }

        let scheme = if self.dark { "dark" } else { "light" };
        let mut css = format!("color-scheme: {scheme};");
        for (name, value) in tokens {
            // Writing into a String cannot fail.
            let _ = write!(css, " {CSS_VAR_PREFIX}-{name}: {value};");
        }
        css
    }
}

/// The immutable set of themes plus the name of the one in use.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeConfig {
    default_theme: String,
    themes: BTreeMap<String, Theme>,
}

impl ThemeConfig {
    /// The storefront's `pink` and `dark` themes, `pink` selected.
    pub fn storefront() -> Self {
        let mut themes = BTreeMap::new();
        themes.insert(
            "pink".to_string(),
            Theme {
                dark: false,
                colors: ThemeColors {
                    primary: "#cd8a93ff".to_string(),
                    secondary: "#FFC107".to_string(),
                    background: "#ffffff".to_string(),
                    surface: "#ffffff".to_string(),
                    app_bar_background: "#F06292".to_string(),
                    on_surface: None,
                },
            },
        );
        themes.insert(
            "dark".to_string(),
            Theme {
                dark: true,
                colors: ThemeColors {
                    primary: "#684a4cff".to_string(),
                    secondary: "#FFC107".to_string(),
                    background: "#a99b9bff".to_string(),
                    surface: "#2a2929ff".to_string(),
                    app_bar_background: "#322d2dff".to_string(),
                    on_surface: Some("#8d8a8aff".to_string()),
                },
            },
        );

        Self {
            default_theme: "pink".to_string(),
            themes,
        }
    }

    /// Select a different default theme by name.
    pub fn with_default(mut self, name: &str) -> Result<Self, StartupError> {
        if !self.themes.contains_key(name) {
            return Err(StartupError::UnknownTheme(name.to_string()));
        }
        self.default_theme = name.to_string();
        Ok(self)
    }

    pub fn default_theme(&self) -> &str {
        &self.default_theme
    }

    pub fn theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// The default theme.
    pub fn current(&self) -> Option<&Theme> {
        self.theme(&self.default_theme)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }
}
