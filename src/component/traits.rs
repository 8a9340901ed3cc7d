//! Component trait: template, dispatch, events.
//!
//! The [`Component`] trait is the core abstraction for every widget. A
//! component owns a [`Base`] (context, id, declared state, event queue),
//! renders its current state with `template`, and mutates it through named
//! actions. [`ComponentExt`] adds builder-style helpers.

use std::any::Any;

use tracing::debug;

use crate::action::{ActionArg, ActionCall};
use crate::error::{Result, UiError};
use crate::event::{Envelope, Event, EventQueue};
use crate::markup::Element;
use crate::provider::UiContext;
use crate::state::{ComponentState, Props};
use crate::style::ClassList;

// ---------------------------------------------------------------------------
// Base
// ---------------------------------------------------------------------------

/// State every component carries.
#[derive(Debug)]
pub struct Base {
    pub ctx: UiContext,
    pub id: String,
    pub state: ComponentState,
    pub events: EventQueue,
}

impl Base {
    pub fn new(ctx: &UiContext, kind: &'static str, id: &str) -> Self {
        Self {
            ctx: ctx.clone(),
            id: id.to_owned(),
            state: ComponentState::new(kind),
            events: EventQueue::new(),
        }
    }

    /// Apply caller props once the schema is declared.
    pub fn apply(&mut self, props: &Props) -> Result<()> {
        self.state.apply(props)?;
        debug!(component = self.state.component(), id = %self.id, "component set up");
        Ok(())
    }

    /// Queue an event from this component.
    pub fn emit(&mut self, event: impl Event) {
        self.events.emit(&self.id, event);
    }

    pub fn trans(&self, key: &str) -> String {
        self.ctx.trans(key, &[])
    }

    /// The error for an action that does not exist on this component.
    pub fn unknown_action(&self, action: &str) -> UiError {
        UiError::UnknownAction {
            component: self.state.component().to_owned(),
            action: action.to_owned(),
        }
    }
}

/// Argument `index` of an action as text.
pub fn text_arg(action: &str, args: &[ActionArg], index: usize) -> Result<String> {
    args.get(index)
        .map(ActionArg::as_text)
        .ok_or_else(|| UiError::InvalidArguments {
            action: action.to_owned(),
            message: format!("missing argument {}", index + 1),
        })
}

/// Argument `index` as text, or `""` when absent.
pub fn optional_text_arg(args: &[ActionArg], index: usize) -> String {
    args.get(index).map(ActionArg::as_text).unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Component trait
// ---------------------------------------------------------------------------

/// Core trait implemented by all components.
///
/// Object-safe: hosts can keep heterogeneous `Box<dyn Component>` lists and
/// route actions by name.
pub trait Component {
    fn base(&self) -> &Base;

    fn base_mut(&mut self) -> &mut Base;

    /// Render the current state. Pure: no state changes, no events.
    fn template(&self) -> Element;

    /// Invoke a named action.
    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()>;

    /// Component kind (`"button"`, `"select"`, ...).
    fn kind(&self) -> &'static str {
        self.base().state.component()
    }

    /// The caller-supplied id.
    fn component_id(&self) -> &str {
        &self.base().id
    }

    fn state(&self) -> &ComponentState {
        &self.base().state
    }

    /// Render to an HTML string.
    fn render(&self) -> String {
        self.template().render()
    }

    /// Client-visible state: every non-protected field, or an empty object
    /// when state exposure is disabled.
    fn exposed_state(&self) -> serde_json::Value {
        if !self.base().ctx.config().expose_states {
            return serde_json::Value::Object(serde_json::Map::new());
        }
        serde_json::Value::Object(self.state().exposed())
    }

    /// Take the events emitted since the last call.
    fn take_events(&mut self) -> Vec<Envelope> {
        self.base_mut().events.drain()
    }

    /// Parse an action attribute value and dispatch it.
    fn perform(&mut self, action: &str) -> Result<()> {
        let call = ActionCall::parse(action)?;
        self.dispatch(&call.name, &call.args)
    }

    /// Downcast to `&dyn Any` for runtime type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Downcast to `&mut dyn Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

// ---------------------------------------------------------------------------
// ComponentExt
// ---------------------------------------------------------------------------

/// Builder-style helpers, implemented for every component.
pub trait ComponentExt: Component {
    /// Add classes to the root element of this component's template.
    fn with_class(self, classes: &str) -> Styled<Self>
    where
        Self: Sized,
    {
        Styled {
            inner: self,
            classes: ClassList::from(classes),
        }
    }
}

impl<T: Component> ComponentExt for T {}

/// A component whose root element carries extra classes.
#[derive(Debug)]
pub struct Styled<C: Component> {
    pub inner: C,
    pub classes: ClassList,
}

impl<C: Component> Styled<C> {
    /// Add more classes (chainable).
    pub fn add_class(mut self, classes: &str) -> Self {
        self.classes.push(classes);
        self
    }
}

impl<C: Component + 'static> Component for Styled<C> {
    fn base(&self) -> &Base {
        self.inner.base()
    }

    fn base_mut(&mut self) -> &mut Base {
        self.inner.base_mut()
    }

    fn template(&self) -> Element {
        let root = self.inner.template();
        if root.is_fragment() {
            return root;
        }
        root.classes(&self.classes)
    }

    fn dispatch(&mut self, action: &str, args: &[ActionArg]) -> Result<()> {
        self.inner.dispatch(action, args)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

// ===========================================================================
// Tests
// ===========================================================================
