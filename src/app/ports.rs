//! Port traits — the boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ CookService (domain)
//! ```
//!
//! Driven adapters (probe, relay+LED, LCD, event sinks) implement these
//! traits. The [`CookService`](super::service::CookService) consumes
//! them via generics, so the domain core never touches hardware
//! directly. Every hardware call is fallible and typed: the service
//! decides per call whether a failure is skippable (all of them are —
//! a cook must survive a transient I/O hiccup).

use crate::error::{DisplayError, RelayError, SensorError};

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain the bath temperature.
pub trait SensorPort {
    /// Synchronously read the probe, in Celsius.
    fn read_temperature(&mut self) -> Result<f32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Cooker port (driven adapter: domain → relay and LED)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command the cooker.
pub trait CookerPort {
    /// Energize the mains relay.
    fn switch_on(&mut self) -> Result<(), RelayError>;

    /// De-energize the mains relay.
    fn switch_off(&mut self) -> Result<(), RelayError>;

    /// Last state successfully commanded.
    fn is_on(&self) -> bool;

    /// Drive the status LED.
    fn set_led(&mut self, on: bool);

    /// Relay off, LED off — safe shutdown, used on every exit path.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → 2x8 character LCD)
// ───────────────────────────────────────────────────────────────

/// Which of the two display lines to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Top,
    Bottom,
}

/// Write-side port for the character display. Text longer than the
/// panel width is truncated by the adapter.
pub trait DisplayPort {
    fn write_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port. Adapters decide where they go (serial log in
/// production, a capture buffer in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
