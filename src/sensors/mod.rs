//! Sensor drivers.

pub mod probe;

pub use probe::Ds18b20Probe;
