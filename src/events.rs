//! Interrupt-driven event queue.
//!
//! Events are produced by:
//! - GPIO edge callbacks (button presses, one callback thread per pin)
//! - the main loop itself (control ticks)
//!
//! Events are consumed by the main control loop, which drains the queue
//! once per iteration and applies all mutations serially. Button
//! callbacks never touch controller state directly — they only enqueue.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ up/down ISR  │────▶│              │     │              │
//! │ enter ISR    │────▶│  Event Queue │────▶│  Main Loop   │
//! │ back ISR     │────▶│  (bounded)   │     │  (consumer)  │
//! │ tick timer   │────▶│              │     │              │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! The GPIO library delivers each pin's callback on its own thread, so
//! the producer side must tolerate several concurrent writers; a mutex
//! is the right tool at human button-press rates. The queue is bounded
//! and drops events when full rather than blocking an interrupt thread.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Maximum number of pending events before new ones are dropped.
const EVENT_QUEUE_CAP: usize = 32;

/// System event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Falling edge on the *up* button.
    ButtonUp,
    /// Falling edge on the *down* button.
    ButtonDown,
    /// Falling edge on the *enter* (confirm) button.
    ButtonEnter,
    /// Falling edge on the *back* (abort) button.
    ButtonBack,
    /// Control loop tick (fires every `tick_interval_ms`).
    ControlTick,
}

static EVENT_QUEUE: Mutex<VecDeque<Event>> = Mutex::new(VecDeque::new());

/// Push an event into the queue. Safe to call from any thread.
/// Returns `false` if the queue is full (event dropped).
pub fn push_event(event: Event) -> bool {
    let Ok(mut queue) = EVENT_QUEUE.lock() else {
        return false;
    };
    if queue.len() >= EVENT_QUEUE_CAP {
        return false;
    }
    queue.push_back(event);
    true
}

/// Pop the next event in FIFO order. Returns `None` if the queue is empty.
pub fn pop_event() -> Option<Event> {
    EVENT_QUEUE.lock().ok().and_then(|mut q| q.pop_front())
}

/// Drain all pending events into a callback, in FIFO order.
pub fn drain_events(mut handler: impl FnMut(Event)) {
    while let Some(event) = pop_event() {
        handler(event);
    }
}

/// Discard everything pending. Called at session boundaries so stale
/// presses from a previous session cannot leak into the next one.
pub fn clear_events() {
    if let Ok(mut queue) = EVENT_QUEUE.lock() {
        queue.clear();
    }
}

/// Number of pending events.
pub fn queue_len() -> usize {
    EVENT_QUEUE.lock().map(|q| q.len()).unwrap_or(0)
}
