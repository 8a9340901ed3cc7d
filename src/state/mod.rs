//! Declared component state: values, props, and the per-component registry.

mod registry;
mod value;

pub use registry::{ComponentState, Field};
pub use value::{Props, StateValue, ValueKind};
