//! Action calls carried by rendered markup.
//!
//! Components render attributes like `data-action-click="selectOption('en')"`.
//! The host sends the attribute back when the user interacts, and
//! [`ActionCall::parse`] turns it into a name and arguments for
//! `Component::dispatch`.

mod call;
pub mod lexer;

pub use call::{ActionArg, ActionCall};
