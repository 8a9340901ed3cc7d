//! State values and caller-supplied props.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, UiError};

// ---------------------------------------------------------------------------
// ValueKind
// ---------------------------------------------------------------------------

/// The type class of a [`StateValue`]. Fixed per field once declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Str,
    List,
    Map,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Str => "string",
            ValueKind::List => "list",
            ValueKind::Map => "map",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// StateValue
// ---------------------------------------------------------------------------

/// A single piece of component state.
///
/// Serialized untagged, so props arriving as JSON (`"blue"`, `true`, `["a"]`,
/// `{"value": "fr", "label": "Français"}`) map directly onto variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StateValue {
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<StateValue>),
    Map(IndexMap<String, StateValue>),
}

impl StateValue {
    /// An empty string value.
    pub fn empty_str() -> Self {
        StateValue::Str(String::new())
    }

    /// An empty list value.
    pub fn empty_list() -> Self {
        StateValue::List(Vec::new())
    }

    /// The type class of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            StateValue::Bool(_) => ValueKind::Bool,
            StateValue::Int(_) => ValueKind::Int,
            StateValue::Str(_) => ValueKind::Str,
            StateValue::List(_) => ValueKind::List,
            StateValue::Map(_) => ValueKind::Map,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            StateValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[StateValue]> {
        match self {
            StateValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, StateValue>> {
        match self {
            StateValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key when this value is a map.
    pub fn get(&self, key: &str) -> Option<&StateValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Look up a key when this value is a map and render it as text.
    ///
    /// Missing keys and empty strings both yield `None`.
    pub fn get_text(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(StateValue::to_text)
            .filter(|text| !text.is_empty())
    }

    /// Whether the value counts as "empty": `""`, `false`, `0`, `[]` or `{}`.
    pub fn is_empty(&self) -> bool {
        match self {
            StateValue::Bool(b) => !b,
            StateValue::Int(n) => *n == 0,
            StateValue::Str(s) => s.is_empty(),
            StateValue::List(items) => items.is_empty(),
            StateValue::Map(map) => map.is_empty(),
        }
    }

    /// Flatten to the text handed to validators and templates.
    ///
    /// Lists are comma-joined, booleans render as `"1"` / `""`.
    pub fn to_text(&self) -> String {
        match self {
            StateValue::Bool(true) => "1".to_owned(),
            StateValue::Bool(false) => String::new(),
            StateValue::Int(n) => n.to_string(),
            StateValue::Str(s) => s.clone(),
            StateValue::List(items) => items
                .iter()
                .map(StateValue::to_text)
                .collect::<Vec<_>>()
                .join(","),
            StateValue::Map(map) => map
                .values()
                .map(StateValue::to_text)
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    /// Convert into the JSON value used for event payloads and state dumps.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            StateValue::Bool(b) => serde_json::Value::Bool(*b),
            StateValue::Int(n) => serde_json::Value::from(*n),
            StateValue::Str(s) => serde_json::Value::String(s.clone()),
            StateValue::List(items) => {
                serde_json::Value::Array(items.iter().map(StateValue::to_json).collect())
            }
            StateValue::Map(map) => serde_json::Value::Object(
                map.iter().map(|(k, v)| (k.clone(), v.to_json())).collect(),
            ),
        }
    }

    /// Coerce an attribute-style value into `kind` when the conversion is unambiguous.
    ///
    /// Returns the original value unchanged in `Err` when no conversion applies.
    pub fn coerce(self, kind: ValueKind) -> std::result::Result<StateValue, StateValue> {
        if self.kind() == kind {
            return Ok(self);
        }
        match (self, kind) {
            (StateValue::Str(s), ValueKind::Bool) => match s.as_str() {
                "true" | "1" | "on" | "yes" => Ok(StateValue::Bool(true)),
                "false" | "0" | "off" | "no" | "" => Ok(StateValue::Bool(false)),
                _ => Err(StateValue::Str(s)),
            },
            (StateValue::Str(s), ValueKind::Int) => match s.trim().parse::<i64>() {
                Ok(n) => Ok(StateValue::Int(n)),
                Err(_) => Err(StateValue::Str(s)),
            },
            (StateValue::Int(n), ValueKind::Str) => Ok(StateValue::Str(n.to_string())),
            (StateValue::Str(s), ValueKind::List) if s.is_empty() => Ok(StateValue::empty_list()),
            (StateValue::Str(s), ValueKind::List) => Ok(StateValue::List(vec![StateValue::Str(s)])),
            (other, _) => Err(other),
        }
    }
}

impl Default for StateValue {
    fn default() -> Self {
        StateValue::empty_str()
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::Str(value.to_owned())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::Str(value)
    }
}

impl From<&String> for StateValue {
    fn from(value: &String) -> Self {
        StateValue::Str(value.clone())
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Int(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        StateValue::Int(i64::from(value))
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        StateValue::Int(i64::from(value))
    }
}

impl<T: Into<StateValue>> From<Vec<T>> for StateValue {
    fn from(items: Vec<T>) -> Self {
        StateValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<StateValue>, const N: usize> From<[(K, V); N]> for StateValue {
    fn from(entries: [(K, V); N]) -> Self {
        StateValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ---------------------------------------------------------------------------
// Props
// ---------------------------------------------------------------------------

/// Initial values supplied by the caller when a component is constructed.
///
/// Props override the defaults declared in `setup`. Keys that do not match a
/// declared field are ignored, so a host can pass its whole attribute map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(IndexMap<String, StateValue>);

impl Props {
    /// Create an empty prop set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a prop (builder).
    pub fn set(mut self, name: impl Into<String>, value: impl Into<StateValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Set a prop in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<StateValue>) {
        self.0.insert(name.into(), value.into());
    }

    /// Parse props from a JSON object. A `null` prop is dropped, so the
    /// field keeps its declared default.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: IndexMap<String, Option<StateValue>> =
            serde_json::from_str(json).map_err(|e| UiError::Config(e.to_string()))?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(name, value)| value.map(|value| (name, value)))
                .collect(),
        ))
    }

    pub fn get(&self, name: &str) -> Option<&StateValue> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StateValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
