//! Cook configuration parameters.
//!
//! All tunable parameters for a cooking session, collapsed into one
//! canonical struct. Target temperature and duration come either from the
//! caller or from the interactive setup; everything else is fixed board
//! behaviour.

use serde::{Deserialize, Serialize};

/// Core cook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CookConfig {
    // --- Targets ---
    /// Water-bath target temperature (Celsius).
    pub target_temperature_c: f32,
    /// Cook duration (minutes). May go negative during setup; a
    /// non-positive duration cooks for zero time.
    pub duration_mins: i64,

    // --- Margins and increments ---
    /// Symmetric tolerance band around the target (Celsius) used for
    /// phase-advance decisions and the relay dead band.
    pub temperature_margin_c: f32,
    /// Up/down button step for the target temperature (Celsius).
    pub temperature_increment_c: f32,
    /// Up/down button step for the duration (minutes).
    pub duration_increment_mins: i64,

    // --- Timing ---
    /// Control loop interval (milliseconds). Fixed cadence, no backoff.
    pub tick_interval_ms: u64,
}

impl Default for CookConfig {
    fn default() -> Self {
        Self {
            target_temperature_c: 55.0,
            duration_mins: 120,

            temperature_margin_c: 1.0,
            temperature_increment_c: 1.0,
            duration_increment_mins: 5,

            tick_interval_ms: 5000, // 0.2 Hz
        }
    }
}

impl CookConfig {
    /// Lower and upper bounds of the target margin window.
    pub fn margin_bounds(&self) -> (f32, f32) {
        (
            self.target_temperature_c - self.temperature_margin_c,
            self.target_temperature_c + self.temperature_margin_c,
        )
    }

    /// Cook duration in milliseconds, clamped at zero for non-positive
    /// durations dialled in during setup.
    pub fn duration_ms(&self) -> u64 {
        u64::try_from(self.duration_mins.max(0)).unwrap_or(0) * 60_000
    }
}
