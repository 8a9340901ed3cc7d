//! # tailkit
//!
//! Server-rendered UI components styled with Tailwind utility classes.
//!
//! Each component declares a typed state schema, applies caller props over
//! the defaults, and renders a pure [`markup::Element`] tree. Interactions
//! come back as named actions (`selectOption('en')`, `toggle()`, ...) that
//! mutate state, run field validation and emit events for the host.
//!
//! ## Core Systems
//!
//! - **[`state`]**: declared fields, allowed-value sets, protected fields, props
//! - **[`style`]**: token vocabularies, the colour palette, class composition
//! - **[`markup`]**: element builder and the slotmap-backed document it renders through
//! - **[`component`]**: the `Component` trait and shared form helpers
//! - **[`components`]**: the fourteen built-in components
//! - **[`event`]** / **[`action`]**: emitted events and parsed action calls
//! - **[`provider`]**: service wiring (translator, validator, icons, config)
//! - **[`timer`]**: the tokio countdown that drives toasts
//! - **[`testing`]**: a ready context, render helpers and the `Pilot`
//!
//! ```ignore
//! use tailkit::prelude::*;
//!
//! let ctx = UiProvider::new().with_builtin_services()?.boot()?;
//! let mut select = Select::new(&ctx, "lang", Props::new()
//!     .set("options", vec!["fr", "en"]))?;
//! select.select_option("en")?;
//! let html = select.render();
//! ```

// Foundation
pub mod error;
pub mod state;
pub mod style;

// Rendering
pub mod markup;

// Services
pub mod config;
pub mod i18n;
pub mod icons;
pub mod provider;
pub mod validation;

// Components
pub mod action;
pub mod component;
pub mod components;
pub mod event;
pub mod timer;

// Testing
pub mod testing;

pub use error::{Result, UiError};

/// The types most hosts need.
pub mod prelude {
    pub use crate::action::{ActionArg, ActionCall};
    pub use crate::component::{Component, ComponentExt};
    pub use crate::components::*;
    pub use crate::config::UiConfig;
    pub use crate::error::{Result, UiError};
    pub use crate::event::{Envelope, Event};
    pub use crate::markup::{Document, Element};
    pub use crate::provider::{UiContext, UiProvider};
    pub use crate::state::{Props, StateValue};
    pub use crate::style::{Color, Size};
}
