//! Dead-band relay moderation.
//!
//! Mains relays hate chatter, so the cooker is driven with a symmetric
//! hysteresis band around the target instead of a strict threshold:
//! energize below `target − margin`, de-energize above `target + margin`,
//! and hold the previous state anywhere in between.

/// Two-point hysteresis controller for the cooker relay.
#[derive(Debug, Clone, Copy)]
pub struct Hysteresis {
    lower: f32,
    upper: f32,
    on: bool,
}

impl Hysteresis {
    /// Build a controller centred on `target` with a symmetric `margin`.
    /// Starts de-energized.
    pub fn new(target: f32, margin: f32) -> Self {
        Self {
            lower: target - margin,
            upper: target + margin,
            on: false,
        }
    }

    /// Feed one temperature sample; returns the demanded relay state.
    /// Inside the dead band the previous state is held.
    pub fn update(&mut self, celsius: f32) -> bool {
        if celsius < self.lower {
            self.on = true;
        } else if celsius > self.upper {
            self.on = false;
        }
        self.on
    }

    /// Current demanded relay state.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
