//! BCM pin assignments for the Chef HAT board.
//!
//! Single source of truth — every driver references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Status LED
// ---------------------------------------------------------------------------

/// Digital output: LED mirrors the cooker relay state.
pub const LED_GPIO: u8 = 15;

// ---------------------------------------------------------------------------
// Push buttons (active-low momentary switches, internal pull-ups)
// ---------------------------------------------------------------------------

pub const BUTTON_UP_GPIO: u8 = 2;
pub const BUTTON_DOWN_GPIO: u8 = 3;
pub const BUTTON_ENTER_GPIO: u8 = 4;
pub const BUTTON_BACK_GPIO: u8 = 10;

/// Edge-interrupt debounce window for all buttons.
pub const BUTTON_DEBOUNCE_MS: u64 = 100;

// ---------------------------------------------------------------------------
// Remote-switch transmitter (Energenie-style OOK encoder)
// ---------------------------------------------------------------------------

/// Encoder data bits D0–D3, least significant first.
pub const SWITCH_D0_GPIO: u8 = 17;
pub const SWITCH_D1_GPIO: u8 = 22;
pub const SWITCH_D2_GPIO: u8 = 23;
pub const SWITCH_D3_GPIO: u8 = 27;
/// Modulator mode select: LOW = OOK.
pub const SWITCH_MODE_GPIO: u8 = 24;
/// Modulator enable (active HIGH while transmitting).
pub const SWITCH_ENABLE_GPIO: u8 = 25;
