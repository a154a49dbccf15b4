//! Outbound application events.
//!
//! The [`CookService`](super::service::CookService) emits these through
//! the [`EventSink`](super::ports::EventSink) port. The production
//! adapter logs them; tests capture them.

use crate::fsm::StateId;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The cook service has started (carries the initial phase).
    Started(StateId),

    /// The FSM transitioned between phases.
    StateChanged { from: StateId, to: StateId },

    /// The cook timer was armed on entry to Cooking.
    CookingStarted { end_time_ms: u64 },

    /// Per-tick status: phase, temperature, relay state, and time left
    /// while cooking.
    Status {
        phase: StateId,
        celsius: f32,
        cooker_on: bool,
        remaining_ms: Option<u64>,
    },

    /// The probe could not be read this tick; the loop carried on with
    /// the last good reading.
    SensorUnavailable,

    /// The back button forced the session to Finished.
    Aborted,
}
