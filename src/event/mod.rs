//! Events emitted by components and the queue that buffers them.

mod message;
mod queue;

pub use message::{
    AlertDismissed, BadgeRemoved, EmptyStateAction, Envelope, Event, FieldUpdated, TabChanged,
    ToastAction, ToastHidden, ToastShown,
};
pub use queue::EventQueue;
