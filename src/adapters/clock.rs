//! Monotonic millisecond clock.

use std::time::Instant;

/// Milliseconds since construction, monotonic. The control loop and
/// cook timer run entirely on this, so wall-clock adjustments never
/// shorten or stretch a cook.
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}
