//! Library configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, UiError};

/// Configuration shared by every component created from one context.
///
/// Loadable from TOML; every key is optional:
///
/// ```toml
/// locale = "fr"
/// input_debounce_ms = 500
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    /// Active translation locale.
    pub locale: String,
    /// Locale consulted when a key is missing from the active one.
    pub fallback_locale: String,
    /// Debounce for validated inputs, rendered as `data-action-debounce`.
    pub input_debounce_ms: u64,
    /// Default toast lifetime.
    pub toast_duration_ms: u64,
    /// Default select dropdown height in pixels.
    pub select_max_height: u64,
    /// Whether components publish their non-protected state for hydration.
    pub expose_states: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_owned(),
            fallback_locale: "en".to_owned(),
            input_debounce_ms: 300,
            toast_duration_ms: 5000,
            select_max_height: 200,
            expose_states: true,
        }
    }
}

impl UiConfig {
    /// Create a new default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }

    /// Set the locale (builder).
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the fallback locale (builder).
    pub fn with_fallback_locale(mut self, locale: impl Into<String>) -> Self {
        self.fallback_locale = locale.into();
        self
    }

    /// Set the input debounce (builder).
    pub fn with_input_debounce_ms(mut self, ms: u64) -> Self {
        self.input_debounce_ms = ms;
        self
    }

    /// Set the default toast duration (builder).
    pub fn with_toast_duration_ms(mut self, ms: u64) -> Self {
        self.toast_duration_ms = ms;
        self
    }

    /// Set the default select height (builder).
    pub fn with_select_max_height(mut self, px: u64) -> Self {
        self.select_max_height = px;
        self
    }

    /// Enable or disable state exposure (builder).
    pub fn with_expose_states(mut self, expose: bool) -> Self {
        self.expose_states = expose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = UiConfig::default();
        assert_eq!(config.locale, "en");
        assert_eq!(config.input_debounce_ms, 300);
        assert_eq!(config.toast_duration_ms, 5000);
        assert_eq!(config.select_max_height, 200);
        assert!(config.expose_states);
    }

    #[test]
    fn builder_chain() {
        let config = UiConfig::new()
            .with_locale("fr")
            .with_input_debounce_ms(150)
            .with_expose_states(false);
        assert_eq!(config.locale, "fr");
        assert_eq!(config.fallback_locale, "en");
        assert_eq!(config.input_debounce_ms, 150);
        assert!(!config.expose_states);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = UiConfig::from_toml_str("locale = \"fr\"\ntoast_duration_ms = 8000\n").unwrap();
        assert_eq!(config.locale, "fr");
        assert_eq!(config.toast_duration_ms, 8000);
        assert_eq!(config.select_max_height, 200);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = UiConfig::from_toml_str("colour = \"red\"").unwrap_err();
        assert!(matches!(err, UiError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = UiConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, UiError::Io(_)));
    }
}
