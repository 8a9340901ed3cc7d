//! Markup model: owned element builders and the arena document they
//! render through.

mod document;
mod node;
mod query;

pub use document::{Document, NodeData, NodeId};
pub use node::{Element, Node};
