//! The component contract and helpers shared across components.

pub mod common;
mod traits;

pub use traits::{optional_text_arg, text_arg, Base, Component, ComponentExt, Styled};
