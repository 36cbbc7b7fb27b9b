//! The immutable UI configuration handed to the rendering layer.

use crate::i18n::LocaleAdapter;
use crate::theme::ThemeConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct UiConfig {
    pub theme: ThemeConfig,
    pub locale: LocaleAdapter,
}

impl UiConfig {
    pub fn new(theme: ThemeConfig, locale: LocaleAdapter) -> Self {
        Self { theme, locale }
    }

    /// Inline style for the root element: the default theme's CSS variables.
    pub fn root_style(&self) -> String {
        self.theme
            .current()
            .map(|theme| theme.css_variables())
            .unwrap_or_default()
    }

    /// Root element class, e.g. `storefront-theme--pink`.
    pub fn root_class(&self) -> String {
        format!("storefront-theme--{}", self.theme.default_theme())
    }
}
