//! Field validation.
//!
//! Components never interpret rule strings themselves. They hand the field
//! name, the flattened value and the rule string to a [`Validator`] and
//! store whatever message comes back.

mod rules;

pub use rules::{parse_rules, Rule, RuleValidator};

/// A field-level validation service.
pub trait Validator: Send + Sync {
    /// Validate one field. `None` means valid.
    fn validate_field(&self, field: &str, value: &str, rules: &str) -> Option<String>;
}
