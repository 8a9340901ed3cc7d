//! Per-component queue of emitted events.

use std::collections::VecDeque;

use tracing::debug;

use super::message::{Envelope, Event};

/// FIFO of events a component emitted since the host last drained it.
#[derive(Debug, Default)]
pub struct EventQueue {
    queue: VecDeque<Envelope>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event emitted by `source`.
    pub fn emit(&mut self, source: &str, event: impl Event) {
        debug!(source, event = event.event_name(), "event emitted");
        self.queue.push_back(Envelope::new(event, source));
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<Envelope> {
        self.queue.drain(..).collect()
    }

    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
