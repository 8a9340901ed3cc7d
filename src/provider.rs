//! Provider bootstrap and the shared component context.
//!
//! [`UiProvider`] collects the services components depend on and checks them
//! once at boot. The resulting [`UiContext`] is cheap to clone and is handed
//! to every component constructor.

use std::fmt;
use std::sync::Arc;

use tracing::info;

use crate::config::UiConfig;
use crate::error::{Result, UiError};
use crate::i18n::{CatalogTranslator, Translator};
use crate::icons::{IconResolver, IconSet, IconVariant};
use crate::validation::{RuleValidator, Validator};

// ---------------------------------------------------------------------------
// UiProvider
// ---------------------------------------------------------------------------

/// Builder for a [`UiContext`].
#[derive(Default)]
pub struct UiProvider {
    config: UiConfig,
    translator: Option<Arc<dyn Translator>>,
    validator: Option<Arc<dyn Validator>>,
    icons: Option<Arc<dyn IconResolver>>,
}

impl UiProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the configuration (builder).
    pub fn with_config(mut self, config: UiConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the translation service (builder).
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    /// Set the validation service (builder).
    pub fn with_validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Set the icon resolver (builder). Without one, every icon renders the
    /// fallback glyph.
    pub fn with_icons(mut self, icons: impl IconResolver + 'static) -> Self {
        self.icons = Some(Arc::new(icons));
        self
    }

    /// Fill any missing translator or validator with the built-in ones.
    pub fn with_builtin_services(mut self) -> Result<Self> {
        if self.translator.is_none() {
            let translator =
                CatalogTranslator::with_builtin(&self.config.locale, &self.config.fallback_locale)?;
            self.translator = Some(Arc::new(translator));
        }
        if self.validator.is_none() {
            self.validator = Some(Arc::new(RuleValidator::new()));
        }
        Ok(self)
    }

    /// Check the services and build the context.
    pub fn boot(self) -> Result<UiContext> {
        let translator = self.translator.ok_or(UiError::MissingService("translator"))?;
        let validator = self.validator.ok_or(UiError::MissingService("validator"))?;
        let icons = self.icons.unwrap_or_else(|| Arc::new(IconSet::new()));
        info!(locale = %self.config.locale, "ui provider booted");
        Ok(UiContext {
            inner: Arc::new(Services {
                config: self.config,
                translator,
                validator,
                icons,
            }),
        })
    }
}

// ---------------------------------------------------------------------------
// UiContext
// ---------------------------------------------------------------------------

struct Services {
    config: UiConfig,
    translator: Arc<dyn Translator>,
    validator: Arc<dyn Validator>,
    icons: Arc<dyn IconResolver>,
}

/// Services shared by components: translation, validation, icons, config.
#[derive(Clone)]
pub struct UiContext {
    inner: Arc<Services>,
}

impl UiContext {
    /// Translate a library key. Keys live under the `ui.` namespace.
    pub fn trans(&self, key: &str, params: &[(&str, &str)]) -> String {
        self.inner.translator.trans(&format!("ui.{key}"), params)
    }

    /// Validate a field value. Returns `None` when no rules apply or the
    /// field has no name.
    pub fn validate_current_field(&self, name: &str, value: &str, rules: &str) -> Option<String> {
        if rules.is_empty() || name.is_empty() {
            return None;
        }
        self.inner.validator.validate_field(name, value, rules)
    }

    pub fn icon(&self, name: &str, variant: IconVariant) -> Option<String> {
        self.inner.icons.resolve(name, variant)
    }

    pub fn config(&self) -> &UiConfig {
        &self.inner.config
    }
}

impl fmt::Debug for UiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiContext")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Never;

    impl Validator for Never {
        fn validate_field(&self, field: &str, _value: &str, _rules: &str) -> Option<String> {
            Some(format!("{field} is never valid"))
        }
    }

    #[test]
    fn boot_requires_translator() {
        let err = UiProvider::new().with_validator(RuleValidator::new()).boot().unwrap_err();
        assert!(matches!(err, UiError::MissingService("translator")));
    }

    #[test]
    fn boot_requires_validator() {
        let err = UiProvider::new()
            .with_translator(CatalogTranslator::new("en", "en"))
            .boot()
            .unwrap_err();
        assert!(matches!(err, UiError::MissingService("validator")));
    }

    #[test]
    fn builtin_services_follow_config_locale() {
        let ctx = UiProvider::new()
            .with_config(UiConfig::new().with_locale("fr"))
            .with_builtin_services()
            .unwrap()
            .boot()
            .unwrap();
        assert_eq!(ctx.trans("button.label", &[]), "Bouton");
        assert_eq!(ctx.config().locale, "fr");
    }

    #[test]
    fn validation_is_skipped_without_rules_or_name() {
        let ctx = UiProvider::new()
            .with_validator(Never)
            .with_builtin_services()
            .unwrap()
            .boot()
            .unwrap();
        assert_eq!(ctx.validate_current_field("email", "x", ""), None);
        assert_eq!(ctx.validate_current_field("", "x", "required"), None);
        assert_eq!(
            ctx.validate_current_field("email", "x", "required").as_deref(),
            Some("email is never valid")
        );
    }

    #[test]
    fn missing_icons_resolve_to_none() {
        let ctx = UiProvider::new().with_builtin_services().unwrap().boot().unwrap();
        assert_eq!(ctx.icon("check", IconVariant::Outline), None);
    }
}
