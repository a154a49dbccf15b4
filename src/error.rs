//! Unified error types for the Chef HAT controller.
//!
//! A single `Error` enum that every subsystem can convert into, keeping
//! the control loop's error handling uniform. All variants are `Copy` so
//! they can be cheaply logged and discarded without allocation. Sensor,
//! relay, and display failures are recoverable: the loop logs them and
//! carries on with the last good state rather than killing a cook.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level controller error
// ---------------------------------------------------------------------------

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The temperature probe could not be read or returned garbage.
    Sensor(SensorError),
    /// A relay command could not be transmitted.
    Relay(RelayError),
    /// The LCD rejected a write.
    Display(DisplayError),
    /// Peripheral acquisition failed at startup.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Relay(e) => write!(f, "relay: {e}"),
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// No DS18B20 device present on the one-wire bus.
    Unavailable,
    /// The sysfs read failed or the CRC check did not pass.
    ReadFailed,
    /// The reading was present but could not be parsed.
    Malformed,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "probe unavailable"),
            Self::ReadFailed => write!(f, "probe read failed"),
            Self::Malformed => write!(f, "probe reading malformed"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Relay errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayError {
    /// The switch-on/switch-off transmission failed.
    CommandFailed,
}

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandFailed => write!(f, "switch command failed"),
        }
    }
}

impl From<RelayError> for Error {
    fn from(e: RelayError) -> Self {
        Self::Relay(e)
    }
}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// A line write was rejected by the display.
    WriteFailed,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WriteFailed => write!(f, "line write failed"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
