//! Shared mutable context threaded through every FSM handler.
//!
//! `CookContext` is the single struct that state handlers read from and
//! write to. It holds the latest probe snapshot, actuator command
//! outputs, the cook timer, configuration, and timing — the blackboard
//! that the state table operates on.

use crate::config::CookConfig;

// ---------------------------------------------------------------------------
// Probe snapshot (read-only to state handlers; written by the service)
// ---------------------------------------------------------------------------

/// A point-in-time reading from the temperature probe.
#[derive(Debug, Clone, Copy)]
pub struct ProbeSnapshot {
    /// Water-bath temperature (Celsius). Only meaningful when
    /// `sensor_ok` is set.
    pub celsius: f32,
    /// False until the probe has produced at least one good reading.
    pub sensor_ok: bool,
}

impl Default for ProbeSnapshot {
    fn default() -> Self {
        Self {
            celsius: 0.0,
            sensor_ok: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Actuator commands (written by handlers and moderation; applied by service)
// ---------------------------------------------------------------------------

/// Commands the control cycle writes to request actuator actions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActuatorCommands {
    /// Desired cooker relay state.
    pub cooker_on: bool,
    /// Desired status LED state (mirrors the relay).
    pub led_on: bool,
}

impl ActuatorCommands {
    /// Everything off — safe default.
    pub fn all_off() -> Self {
        Self::default()
    }
}

// ---------------------------------------------------------------------------
// CookContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct CookContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,
    /// Monotonic wall time (milliseconds since process start).
    pub now_ms: u64,

    // -- Probe data --
    /// Latest good probe reading. Updated before each FSM tick.
    pub probe: ProbeSnapshot,

    // -- Actuator outputs --
    /// Commands to be applied to the relay and LED after the tick.
    pub commands: ActuatorCommands,

    // -- Cook timer --
    /// Absolute end of the cook. Set exactly once, on entry to Cooking,
    /// to `now_ms + duration`; `None` in every earlier phase.
    pub end_time_ms: Option<u64>,

    // -- Configuration --
    pub config: CookConfig,
}

impl CookContext {
    /// Create a new context with the given configuration.
    pub fn new(config: CookConfig) -> Self {
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            now_ms: 0,
            probe: ProbeSnapshot::default(),
            commands: ActuatorCommands::all_off(),
            end_time_ms: None,
            config,
        }
    }

    /// True when `celsius` lies strictly inside the margin window around
    /// the target. The boundary is exclusive on both ends.
    pub fn in_temperature_range(&self, celsius: f32) -> bool {
        let (lower, upper) = self.config.margin_bounds();
        lower < celsius && celsius < upper
    }

    /// True when the probe has a reading strictly inside the margin window.
    pub fn bath_in_range(&self) -> bool {
        self.probe.sensor_ok && self.in_temperature_range(self.probe.celsius)
    }

    /// Milliseconds of cook time left. `None` before Cooking is entered;
    /// zero once the timer has expired.
    pub fn remaining_ms(&self) -> Option<u64> {
        self.end_time_ms.map(|end| end.saturating_sub(self.now_ms))
    }
}
