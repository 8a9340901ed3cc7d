//! Headless testing helpers: a ready-made context, rendering helpers, and a
//! [`Pilot`] that drives components through their rendered action
//! attributes.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::{document_of, render_to_string};

use crate::config::UiConfig;
use crate::error::Result;
use crate::provider::{UiContext, UiProvider};

/// A context with the built-in translator and validator, English locale and
/// no icon set.
pub fn context() -> Result<UiContext> {
    context_for_locale("en")
}

/// Same as [`context`] with another active locale.
pub fn context_for_locale(locale: &str) -> Result<UiContext> {
    UiProvider::new()
        .with_config(UiConfig::new().with_locale(locale))
        .with_builtin_services()?
        .boot()
}
