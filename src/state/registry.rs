//! Declared component state.
//!
//! Each component declares its fields once, in `setup`, with a default, an
//! optional allowed set, and a protected flag. After declaration the field's
//! type class is fixed, and every write is checked against it and against the
//! allowed set.

use indexmap::IndexMap;
use tracing::trace;

use super::value::{Props, StateValue, ValueKind};
use crate::error::{Result, UiError};
use crate::style::Token;

// ---------------------------------------------------------------------------
// Field declaration
// ---------------------------------------------------------------------------

/// A field declaration: default value plus constraints.
#[derive(Debug, Clone)]
pub struct Field {
    default: StateValue,
    allowed: Option<Vec<String>>,
    protected: bool,
}

impl Field {
    /// A free field with the given default.
    pub fn new(default: impl Into<StateValue>) -> Self {
        Self {
            default: default.into(),
            allowed: None,
            protected: false,
        }
    }

    /// A string field restricted to the members of a [`Token`] enum.
    pub fn token<T: Token>(default: T) -> Self {
        Self::new(default.as_str()).allowed(T::names())
    }

    /// Restrict string values to `values`.
    pub fn allowed<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Hide this field from the client-visible state.
    pub fn protected(mut self) -> Self {
        self.protected = true;
        self
    }
}

#[derive(Debug, Clone)]
struct Slot {
    value: StateValue,
    kind: ValueKind,
    allowed: Option<Vec<String>>,
    protected: bool,
}

// ---------------------------------------------------------------------------
// ComponentState
// ---------------------------------------------------------------------------

/// The ordered set of declared fields for one component instance.
#[derive(Debug, Clone)]
pub struct ComponentState {
    component: &'static str,
    slots: IndexMap<String, Slot>,
}

impl ComponentState {
    /// Create an empty registry for the named component kind.
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            slots: IndexMap::new(),
        }
    }

    /// Declare a field.
    ///
    /// Fails when the name is already declared or when the default is not a
    /// member of the allowed set.
    pub fn declare(&mut self, name: &str, field: Field) -> Result<()> {
        if self.slots.contains_key(name) {
            return Err(UiError::DuplicateField(name.to_owned()));
        }
        self.check_allowed(name, &field.default, field.allowed.as_deref())?;
        self.slots.insert(
            name.to_owned(),
            Slot {
                kind: field.default.kind(),
                value: field.default,
                allowed: field.allowed,
                protected: field.protected,
            },
        );
        Ok(())
    }

    /// Write a field, enforcing its type class and allowed set.
    pub fn set(&mut self, name: &str, value: impl Into<StateValue>) -> Result<()> {
        let value = value.into();
        let slot = self
            .slots
            .get(name)
            .ok_or_else(|| UiError::UnknownField(name.to_owned()))?;
        if value.kind() != slot.kind {
            return Err(UiError::TypeMismatch {
                field: name.to_owned(),
                expected: slot.kind,
                found: value.kind(),
            });
        }
        self.check_allowed(name, &value, slot.allowed.as_deref())?;
        if let Some(slot) = self.slots.get_mut(name) {
            slot.value = value;
        }
        Ok(())
    }

    /// Apply caller props over the declared defaults.
    ///
    /// Undeclared keys are skipped. Attribute-style strings are coerced to the
    /// field's type class when the conversion is unambiguous.
    pub fn apply(&mut self, props: &Props) -> Result<()> {
        for (name, value) in props.iter() {
            let Some(kind) = self.slots.get(name).map(|slot| slot.kind) else {
                trace!(component = self.component, prop = name, "ignoring undeclared prop");
                continue;
            };
            let value = value.clone().coerce(kind).unwrap_or_else(|original| original);
            self.set(name, value)?;
        }
        Ok(())
    }

    fn check_allowed(
        &self,
        name: &str,
        value: &StateValue,
        allowed: Option<&[String]>,
    ) -> Result<()> {
        let (Some(allowed), StateValue::Str(text)) = (allowed, value) else {
            return Ok(());
        };
        if allowed.iter().any(|a| a == text) {
            return Ok(());
        }
        Err(UiError::Configuration {
            component: self.component.to_owned(),
            field: name.to_owned(),
            value: text.clone(),
            allowed: allowed.to_vec(),
        })
    }

    // -- Reads ------------------------------------------------------------

    /// The component kind this registry belongs to.
    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn get(&self, name: &str) -> Option<&StateValue> {
        self.slots.get(name).map(|slot| &slot.value)
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn is_protected(&self, name: &str) -> bool {
        self.slots.get(name).is_some_and(|slot| slot.protected)
    }

    /// The allowed set of a field, if it has one.
    pub fn allowed(&self, name: &str) -> Option<&[String]> {
        self.slots.get(name).and_then(|slot| slot.allowed.as_deref())
    }

    /// Declared field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// String field, or `""` when missing or of another type.
    pub fn str(&self, name: &str) -> &str {
        self.get(name).and_then(StateValue::as_str).unwrap_or("")
    }

    /// Boolean field, or `false`.
    pub fn bool(&self, name: &str) -> bool {
        self.get(name).and_then(StateValue::as_bool).unwrap_or(false)
    }

    /// Integer field, or `0`.
    pub fn int(&self, name: &str) -> i64 {
        self.get(name).and_then(StateValue::as_int).unwrap_or(0)
    }

    /// List field, or an empty slice.
    pub fn list(&self, name: &str) -> &[StateValue] {
        self.get(name).and_then(StateValue::as_list).unwrap_or(&[])
    }

    /// Map field, if present.
    pub fn map(&self, name: &str) -> Option<&IndexMap<String, StateValue>> {
        self.get(name).and_then(StateValue::as_map)
    }

    /// Enumerated field read back as its token, or the token's default.
    pub fn token<T: Token>(&self, name: &str) -> T {
        T::parse(self.str(name)).unwrap_or_default()
    }

    /// The client-visible fields as JSON, protected fields excluded.
    pub fn exposed(&self) -> serde_json::Map<String, serde_json::Value> {
        self.slots
            .iter()
            .filter(|(_, slot)| !slot.protected)
            .map(|(name, slot)| (name.clone(), slot.value.to_json()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Size;

    fn sample() -> ComponentState {
        let mut state = ComponentState::new("button");
        state.declare("label", Field::new("Button")).unwrap();
        state.declare("size", Field::token(Size::Normal)).unwrap();
        state.declare("disabled", Field::new(false)).unwrap();
        state.declare("rules", Field::new("").protected()).unwrap();
        state
    }

    #[test]
    fn declare_rejects_duplicates() {
        let mut state = sample();
        let err = state.declare("label", Field::new("x")).unwrap_err();
        assert!(matches!(err, UiError::DuplicateField(name) if name == "label"));
    }

    #[test]
    fn declare_rejects_default_outside_allowed() {
        let mut state = ComponentState::new("badge");
        let err = state
            .declare("shape", Field::new("oval").allowed(["pill", "square"]))
            .unwrap_err();
        assert!(matches!(err, UiError::Configuration { field, .. } if field == "shape"));
    }

    #[test]
    fn set_enforces_allowed_set() {
        let mut state = sample();
        state.set("size", "large").unwrap();
        assert_eq!(state.token::<Size>("size"), Size::Large);

        let err = state.set("size", "huge").unwrap_err();
        match err {
            UiError::Configuration {
                component,
                value,
                allowed,
                ..
            } => {
                assert_eq!(component, "button");
                assert_eq!(value, "huge");
                assert_eq!(allowed, vec!["small", "normal", "large"]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(state.str("size"), "large");
    }

    #[test]
    fn set_enforces_type_class() {
        let mut state = sample();
        let err = state.set("disabled", "yes").unwrap_err();
        assert!(matches!(
            err,
            UiError::TypeMismatch {
                expected: ValueKind::Bool,
                found: ValueKind::Str,
                ..
            }
        ));
        assert!(matches!(
            state.set("missing", 1),
            Err(UiError::UnknownField(_))
        ));
    }

    #[test]
    fn apply_coerces_and_skips_unknown() {
        let mut state = sample();
        let props = Props::new()
            .set("disabled", "true")
            .set("label", "Save")
            .set("onclick", "alert(1)");
        state.apply(&props).unwrap();
        assert!(state.bool("disabled"));
        assert_eq!(state.str("label"), "Save");
        assert!(!state.is_declared("onclick"));
    }

    #[test]
    fn apply_surfaces_configuration_errors() {
        let mut state = sample();
        let props = Props::new().set("size", "giant");
        assert!(matches!(
            state.apply(&props),
            Err(UiError::Configuration { .. })
        ));
    }

    #[test]
    fn exposed_omits_protected_fields() {
        let state = sample();
        let exposed = state.exposed();
        assert!(exposed.contains_key("label"));
        assert!(!exposed.contains_key("rules"));
        assert!(state.is_protected("rules"));
        assert!(!state.is_protected("label"));
    }

    #[test]
    fn typed_reads_default_when_missing() {
        let state = sample();
        assert_eq!(state.str("nope"), "");
        assert!(!state.bool("nope"));
        assert_eq!(state.int("nope"), 0);
        assert!(state.list("nope").is_empty());
        assert_eq!(state.names().collect::<Vec<_>>(), vec!["label", "size", "disabled", "rules"]);
    }
}
