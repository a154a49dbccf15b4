//! Adapters wiring port traits to concrete peripherals and sinks.

pub mod clock;
pub mod hardware;
pub mod log_sink;

pub use clock::MonotonicClock;
pub use hardware::HardwareAdapter;
pub use log_sink::LogEventSink;
