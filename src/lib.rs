//! Chef HAT sous-vide controller library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection. All Raspberry-Pi-specific GPIO code is guarded by
//! `#[cfg(feature = "rpi")]` within each module, so the library and its
//! tests build on any host target.

#![deny(unused_must_use)]

pub mod app;
pub mod config;
pub mod control;
pub mod events;
pub mod fsm;

pub mod error;
pub mod pins;

// Hardware-facing modules; the real-GPIO paths are feature-gated inside.
pub mod adapters;
pub mod drivers;
pub mod sensors;
