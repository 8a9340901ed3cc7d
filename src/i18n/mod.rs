//! Translation of default labels, placeholders and messages.

mod catalog;

pub use catalog::CatalogTranslator;

/// A translation service.
///
/// `params` replace `{name}` placeholders in the translated text. A missing
/// key translates to the key itself.
pub trait Translator: Send + Sync {
    fn trans(&self, key: &str, params: &[(&str, &str)]) -> String;
}
