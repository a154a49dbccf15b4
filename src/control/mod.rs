//! Closed-loop control building blocks.

pub mod hysteresis;
