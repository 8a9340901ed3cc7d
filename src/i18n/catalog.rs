//! TOML-backed message catalogs.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::warn;

use super::Translator;
use crate::error::{Result, UiError};

const BUILTIN: &[(&str, &str)] = &[
    ("en", include_str!("../../translations/en.toml")),
    ("fr", include_str!("../../translations/fr.toml")),
];

/// Namespace the built-in catalogs are registered under.
pub const UI_NAMESPACE: &str = "ui";

/// A [`Translator`] over per-locale catalogs loaded from TOML.
///
/// Nested tables flatten to dotted keys under a namespace, so
/// `[select] no_results = "..."` in the `ui` namespace answers
/// `ui.select.no_results`. Lookups try the active locale, then the fallback.
#[derive(Debug, Clone)]
pub struct CatalogTranslator {
    locale: String,
    fallback: String,
    catalogs: HashMap<String, IndexMap<String, String>>,
}

impl CatalogTranslator {
    /// An empty translator.
    pub fn new(locale: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            fallback: fallback.into(),
            catalogs: HashMap::new(),
        }
    }

    /// A translator preloaded with the built-in `en` and `fr` catalogs.
    pub fn with_builtin(locale: impl Into<String>, fallback: impl Into<String>) -> Result<Self> {
        let mut translator = Self::new(locale, fallback);
        for (locale, source) in BUILTIN {
            translator.add_toml(locale, UI_NAMESPACE, source)?;
        }
        Ok(translator)
    }

    /// Merge a TOML catalog into `locale` under `namespace`.
    pub fn add_toml(&mut self, locale: &str, namespace: &str, source: &str) -> Result<()> {
        let table: toml::Table = source
            .parse()
            .map_err(|e: toml::de::Error| UiError::Catalog(format!("{locale}/{namespace}: {e}")))?;
        let catalog = self.catalogs.entry(locale.to_owned()).or_default();
        flatten(namespace, &table, catalog);
        Ok(())
    }

    /// Add or replace a single message.
    pub fn insert(&mut self, locale: &str, key: impl Into<String>, message: impl Into<String>) {
        self.catalogs
            .entry(locale.to_owned())
            .or_default()
            .insert(key.into(), message.into());
    }

    pub fn set_locale(&mut self, locale: impl Into<String>) {
        self.locale = locale.into();
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        [&self.locale, &self.fallback]
            .into_iter()
            .find_map(|locale| self.catalogs.get(locale)?.get(key))
            .map(String::as_str)
    }
}

fn flatten(prefix: &str, table: &toml::Table, out: &mut IndexMap<String, String>) {
    for (key, value) in table {
        let path = format!("{prefix}.{key}");
        match value {
            toml::Value::Table(inner) => flatten(&path, inner, out),
            toml::Value::String(text) => {
                out.insert(path, text.clone());
            }
            other => {
                out.insert(path, other.to_string());
            }
        }
    }
}

impl Translator for CatalogTranslator {
    fn trans(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(message) = self.lookup(key) else {
            warn!(key, locale = %self.locale, "missing translation");
            return key.to_owned();
        };
        params
            .iter()
            .fold(message.to_owned(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}
