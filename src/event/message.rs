//! Event trait, envelope, and the events components emit.
//!
//! The [`Event`] trait is object-safe and supports downcasting via `Any`.
//! [`Envelope`] pairs a boxed event with the id of the component that
//! emitted it. Payloads serialize with camelCase keys, matching the names a
//! browser-side listener sees.

use std::any::Any;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Event trait
// ---------------------------------------------------------------------------

/// Object-safe event trait.
pub trait Event: Send + 'static {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Wire name of this event (`field-updated`, `tab-changed`, ...).
    fn event_name(&self) -> &'static str;

    /// Event payload as JSON.
    fn payload(&self) -> serde_json::Value;
}

macro_rules! impl_event {
    ($ty:ty, $name:literal) => {
        impl Event for $ty {
            fn as_any(&self) -> &dyn Any {
                self
            }

            fn event_name(&self) -> &'static str {
                $name
            }

            fn payload(&self) -> serde_json::Value {
                serde_json::to_value(self).unwrap_or_default()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// A boxed event plus the id of the component that emitted it.
pub struct Envelope {
    pub event: Box<dyn Event>,
    pub source: String,
}

impl Envelope {
    pub fn new(event: impl Event, source: impl Into<String>) -> Self {
        Self {
            event: Box::new(event),
            source: source.into(),
        }
    }

    /// Wire name of the wrapped event.
    pub fn name(&self) -> &'static str {
        self.event.event_name()
    }

    pub fn payload(&self) -> serde_json::Value {
        self.event.payload()
    }

    /// Attempt to downcast the event to a concrete type.
    pub fn downcast_ref<T: Event>(&self) -> Option<&T> {
        self.event.as_any().downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("event", &self.event.event_name())
            .field("source", &self.source)
            .field("payload", &self.event.payload())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Component events
// ---------------------------------------------------------------------------

/// A form field committed a new value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldUpdated {
    pub field: String,
    pub value: serde_json::Value,
    pub error: String,
    pub is_valid: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl_event!(FieldUpdated, "field-updated");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertDismissed {
    pub title: String,
    pub color: String,
}

impl_event!(AlertDismissed, "alert-dismissed");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeRemoved {
    pub label: String,
    pub color: String,
}

impl_event!(BadgeRemoved, "badge-removed");

/// The active tab changed. `tab` is the full tab definition.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TabChanged {
    pub tab_id: String,
    pub index: usize,
    pub tab: serde_json::Value,
}

impl_event!(TabChanged, "tab-changed");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToastShown {
    pub color: String,
    pub message: String,
    pub title: String,
}

impl_event!(ToastShown, "toast-shown");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToastHidden {
    pub color: String,
    pub message: String,
}

impl_event!(ToastHidden, "toast-hidden");

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToastAction {
    pub url: String,
    pub text: String,
}

impl_event!(ToastAction, "toast-action");

/// One of an empty state's call-to-action buttons was pressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmptyStateAction {
    pub action: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl_event!(EmptyStateAction, "empty-state-action");

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_updated_payload_uses_wire_names() {
        let event = FieldUpdated {
            field: "email".into(),
            value: json!("a@b.c"),
            error: String::new(),
            is_valid: true,
            kind: None,
        };
        assert_eq!(event.event_name(), "field-updated");
        assert_eq!(
            event.payload(),
            json!({"field": "email", "value": "a@b.c", "error": "", "isValid": true})
        );
    }

    #[test]
    fn type_tag_is_included_when_present() {
        let event = FieldUpdated {
            field: "terms".into(),
            value: json!(true),
            error: String::new(),
            is_valid: true,
            kind: Some("toggle".into()),
        };
        assert_eq!(event.payload()["type"], json!("toggle"));
    }

    #[test]
    fn tab_changed_payload() {
        let event = TabChanged {
            tab_id: "t2".into(),
            index: 1,
            tab: json!({"id": "t2", "label": "Two"}),
        };
        assert_eq!(event.payload()["tabId"], json!("t2"));
        assert_eq!(event.payload()["index"], json!(1));
    }

    #[test]
    fn envelope_downcast() {
        let envelope = Envelope::new(
            BadgeRemoved {
                label: "New".into(),
                color: "green".into(),
            },
            "badge-1",
        );
        assert_eq!(envelope.name(), "badge-removed");
        assert_eq!(envelope.source, "badge-1");
        let badge = envelope.downcast_ref::<BadgeRemoved>().unwrap();
        assert_eq!(badge.label, "New");
        assert!(envelope.downcast_ref::<AlertDismissed>().is_none());
    }

    #[test]
    fn envelope_debug_shows_name() {
        let envelope = Envelope::new(
            EmptyStateAction {
                action: "create".into(),
                kind: "primary".into(),
            },
            "empty",
        );
        let debug = format!("{envelope:?}");
        assert!(debug.contains("empty-state-action"));
    }
}
