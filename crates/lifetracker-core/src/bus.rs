use std::collections::VecDeque;
use std::time::Instant;

use crate::event::Stage;

/// Everything the app loop reacts to, in one queue.
#[derive(Debug, Clone)]
pub enum Event {
    /// A host lifecycle notification for the screen controller.
    Lifecycle(Stage),
    Key(crossterm::event::KeyEvent),
    FocusGained,
    FocusLost,
    Resize { cols: u16, rows: u16 },
    Tick { now: Instant },
    Quit,
}

/// A simple FIFO event queue.
///
/// The app loop uses the bus in a three-phase cycle:
/// 1. **Publish** — input polling and timers push events into the queue.
/// 2. **Drain** — all pending events are pulled out in order.
/// 3. **Apply** — each event is applied to the state in order.
///
/// Strict FIFO ordering is what keeps the event log's append order equal to
/// notification arrival order.
pub struct EventBus {
    queue: VecDeque<Event>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Create an empty event bus.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an event at the back of the queue.
    pub fn publish(&mut self, event: Event) {
        self.queue.push_back(event);
    }

    /// Remove and return all pending events, preserving insertion order.
    pub fn drain(&mut self) -> Vec<Event> {
        self.queue.drain(..).collect()
    }

    /// Return `true` if the queue contains at least one event.
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }
}
