//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the cook controller: FSM
//! orchestration, relay moderation, status rendering, and the interactive
//! setup flow. All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod commands;
pub mod events;
pub mod format;
pub mod ports;
pub mod service;
pub mod setup;
