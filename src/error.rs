//! Crate-wide error type.
//!
//! Only construction-time and wiring failures are errors. Field validation
//! failures are stored on the component as a message and rendered, never
//! returned through [`UiError`].

use crate::state::ValueKind;

/// Errors raised while declaring state, booting the provider, or dispatching actions.
#[derive(Debug, thiserror::Error)]
pub enum UiError {
    #[error("{component}: value {value:?} for field `{field}` is not one of [{}]", allowed.join(", "))]
    Configuration {
        component: String,
        field: String,
        value: String,
        allowed: Vec<String>,
    },
    #[error("field `{field}` holds {expected} values, got {found}")]
    TypeMismatch {
        field: String,
        expected: ValueKind,
        found: ValueKind,
    },
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("field `{0}` is already declared")]
    DuplicateField(String),
    #[error("{0} service is required for UI components")]
    MissingService(&'static str),
    #[error("{component} has no action named `{action}`")]
    UnknownAction { component: String, action: String },
    #[error("invalid arguments for `{action}`: {message}")]
    InvalidArguments { action: String, message: String },
    #[error("no element matches `{0}`")]
    NoMatch(String),
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("invalid translation catalog: {0}")]
    Catalog(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate result alias.
pub type Result<T, E = UiError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_message_lists_allowed_values() {
        let err = UiError::Configuration {
            component: "button".into(),
            field: "size".into(),
            value: "huge".into(),
            allowed: vec!["small".into(), "normal".into(), "large".into()],
        };
        assert_eq!(
            err.to_string(),
            "button: value \"huge\" for field `size` is not one of [small, normal, large]"
        );
    }

    #[test]
    fn missing_service_message() {
        let err = UiError::MissingService("validator");
        assert_eq!(err.to_string(), "validator service is required for UI components");
    }
}
