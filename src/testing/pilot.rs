//! Pilot: drive a component the way the browser runtime would.
//!
//! The Pilot renders its component, finds an element by a small selector,
//! reads the element's `data-action-*` attribute, parses it with
//! [`ActionCall::parse`] and dispatches the call back into the component.
//! `change` events append the new field value as a final argument, which is
//! how the client runtime reports what the user typed or picked.

use tracing::debug;

use crate::action::{ActionArg, ActionCall};
use crate::component::Component;
use crate::error::{Result, UiError};
use crate::event::Envelope;
use crate::markup::{Document, NodeId};

use super::snapshot::document_of;

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// Find the first node matching `selector`.
///
/// Supported forms: `#id`, `.class`, `tag`, `[attr]` and `[attr=value]`
/// (the value may be quoted).
pub fn select(doc: &Document, selector: &str) -> Option<NodeId> {
    let selector = selector.trim();
    if let Some(id) = selector.strip_prefix('#') {
        return doc.query_by_id(id);
    }
    if let Some(class) = selector.strip_prefix('.') {
        return doc.query_by_class(class).first().copied();
    }
    if let Some(inner) = selector.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        let (name, value) = match inner.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim().trim_matches(|c| c == '"' || c == '\''))),
            None => (inner.trim(), None),
        };
        return doc.query_by_attr(name, value).first().copied();
    }
    doc.query_by_tag(selector).first().copied()
}

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless driver around one component.
///
/// ```ignore
/// let mut pilot = Pilot::new(select);
/// pilot.perform("toggleDropdown()")?;
/// pilot.click("[data-search-text=English]")?;
/// assert_eq!(pilot.component().state().str("value"), "en");
/// ```
pub struct Pilot<C: Component> {
    component: C,
}

impl<C: Component> Pilot<C> {
    pub fn new(component: C) -> Self {
        Self { component }
    }

    /// Fire the `data-action-click` of the first element matching `selector`.
    pub fn click(&mut self, selector: &str) -> Result<()> {
        let call = self.action_at(selector, "data-action-click")?;
        self.run(call)
    }

    /// Fire the `data-action-change` of the matching element, appending
    /// `value` as the last argument.
    pub fn change(&mut self, selector: &str, value: &str) -> Result<()> {
        self.change_with(selector, ActionArg::from(value))
    }

    /// Like [`change`](Self::change) with a typed argument.
    pub fn change_with(&mut self, selector: &str, value: impl Into<ActionArg>) -> Result<()> {
        let call = self.action_at(selector, "data-action-change")?.arg(value);
        self.run(call)
    }

    /// Dispatch a call written in attribute form, such as `"hide()"`.
    pub fn perform(&mut self, call: &str) -> Result<()> {
        let call = ActionCall::parse(call)?;
        self.run(call)
    }

    /// The current markup.
    pub fn html(&self) -> String {
        self.component.render()
    }

    /// The current markup as a queryable document.
    pub fn document(&self) -> Document {
        document_of(&self.component)
    }

    /// Whether an element matches `selector` in the current markup.
    pub fn exists(&self, selector: &str) -> bool {
        select(&self.document(), selector).is_some()
    }

    /// Text content of the first element matching `selector`.
    pub fn text(&self, selector: &str) -> Option<String> {
        let doc = self.document();
        select(&doc, selector).map(|id| doc.text_content(id))
    }

    pub fn component(&self) -> &C {
        &self.component
    }

    pub fn component_mut(&mut self) -> &mut C {
        &mut self.component
    }

    /// Drain the events emitted so far.
    pub fn take_events(&mut self) -> Vec<Envelope> {
        self.component.take_events()
    }

    pub fn into_inner(self) -> C {
        self.component
    }

    fn action_at(&self, selector: &str, attribute: &str) -> Result<ActionCall> {
        let doc = self.document();
        let node = select(&doc, selector).ok_or_else(|| UiError::NoMatch(selector.to_owned()))?;
        let source = doc
            .attr(node, attribute)
            .ok_or_else(|| UiError::NoMatch(format!("{selector} with {attribute}")))?;
        ActionCall::parse(&source)
    }

    fn run(&mut self, call: ActionCall) -> Result<()> {
        debug!(component = self.component.kind(), action = %call, "pilot dispatch");
        self.component.dispatch(&call.name, &call.args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Input, Select, Tabs, Toggle};
    use crate::state::Props;
    use crate::testing::context;
    use pretty_assertions::assert_eq;

    #[test]
    fn selector_forms() {
        let tabs = Tabs::new(&context().unwrap(), "t", Props::new().set("tabs", vec!["A", "B"])).unwrap();
        let doc = document_of(&tabs);
        assert!(select(&doc, "#tab-tab-1").is_some());
        assert!(select(&doc, ".ui-tabs").is_some());
        assert!(select(&doc, "button").is_some());
        assert!(select(&doc, "[role=tablist]").is_some());
        assert!(select(&doc, "[aria-selected='false']").is_some());
        assert!(select(&doc, "[data-missing]").is_none());
    }

    #[test]
    fn click_dispatches_rendered_action() {
        let tabs = Tabs::new(&context().unwrap(), "t", Props::new().set("tabs", vec!["A", "B"])).unwrap();
        let mut pilot = Pilot::new(tabs);
        pilot.click("#tab-tab-1").unwrap();
        assert_eq!(pilot.component().active_index(), Some(1));
        assert_eq!(pilot.take_events()[0].name(), "tab-changed");
        assert_eq!(pilot.text("[aria-selected=true]").as_deref(), Some("B"));
    }

    #[test]
    fn click_option_by_search_text() {
        let props = Props::from_json(r#"{"options": [{"value": "fr", "label": "Français"}, {"value": "en", "label": "English"}]}"#)
            .unwrap();
        let mut pilot = Pilot::new(Select::new(&context().unwrap(), "lang", props).unwrap());
        pilot.perform("toggleDropdown()").unwrap();
        pilot.click("[data-search-text=English]").unwrap();
        assert_eq!(pilot.component().state().str("value"), "en");
    }

    #[test]
    fn change_appends_value() {
        let input = Input::new(&context().unwrap(), "email", Props::new().set("rules", "required|email")).unwrap();
        let mut pilot = Pilot::new(input);
        pilot.change("input", "nope").unwrap();
        assert_eq!(pilot.component().state().str("value"), "nope");
        assert!(pilot.exists("[role=alert]"));
    }

    #[test]
    fn missing_targets_are_errors() {
        let toggle = Toggle::new(&context().unwrap(), "t", Props::new()).unwrap();
        let mut pilot = Pilot::new(toggle);
        assert!(matches!(pilot.click("#nope"), Err(UiError::NoMatch(_))));
        assert!(matches!(pilot.click(".ui-toggle"), Err(UiError::NoMatch(_))));
        pilot.change_with("[type=checkbox]", true).unwrap();
        assert!(pilot.component().is_on());
    }
}
