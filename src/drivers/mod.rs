//! Peripheral drivers for the Chef HAT board.
//!
//! Each driver compiles in two flavours: real GPIO via `rppal` when the
//! `rpi` feature is on, and an in-memory stand-in otherwise so the rest
//! of the crate builds and tests on any host.

pub mod buttons;
pub mod relay;
pub mod status_led;

pub use buttons::ButtonBindings;
pub use relay::RemoteSwitch;
pub use status_led::StatusLed;
