//! Canonical status formatting.
//!
//! One table keyed by phase produces both renderings of the controller
//! state: a full status line for the log sink and an abbreviated frame
//! for the 2x8-character LCD. Every user-visible string lives here.

use heapless::String as FixedString;

use crate::fsm::StateId;

/// Character width of one LCD line.
pub const LCD_WIDTH: usize = 8;

/// One LCD line, truncated to the panel width.
pub type LcdLine = FixedString<LCD_WIDTH>;

/// The two-line payload written to the LCD every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub top: LcdLine,
    pub bottom: LcdLine,
}

impl Frame {
    pub fn new(top: &str, bottom: &str) -> Self {
        Self {
            top: fit(top),
            bottom: fit(bottom),
        }
    }
}

/// Truncate `text` to the LCD width.
fn fit(text: &str) -> LcdLine {
    let mut line = LcdLine::new();
    for ch in text.chars().take(LCD_WIDTH) {
        if line.push(ch).is_err() {
            break;
        }
    }
    line
}

// ───────────────────────────────────────────────────────────────
// Remaining-time wording
// ───────────────────────────────────────────────────────────────

/// Long form: `"2 minutes left"`, `"1 minute left"`, `"59 seconds left"`,
/// `"1 second left"`. Minutes are floored; the cut-over is at 60 s.
pub fn remaining(secs_left: u64) -> String {
    if secs_left >= 60 {
        let mins = secs_left / 60;
        let unit = if mins == 1 { "minute" } else { "minutes" };
        format!("{mins} {unit} left")
    } else {
        let unit = if secs_left == 1 { "second" } else { "seconds" };
        format!("{secs_left} {unit} left")
    }
}

/// Short form for the LCD: `"118m left"` / `"59s left"`.
fn remaining_short(secs_left: u64) -> String {
    if secs_left >= 60 {
        format!("{}m left", secs_left / 60)
    } else {
        format!("{secs_left}s left")
    }
}

fn celsius_short(celsius: f32) -> String {
    format!("{celsius:.1}C")
}

// ───────────────────────────────────────────────────────────────
// Per-phase rendering table
// ───────────────────────────────────────────────────────────────

/// Full status line for the log sink.
pub fn status_line(
    phase: StateId,
    celsius: f32,
    cooker_on: bool,
    remaining_ms: Option<u64>,
) -> String {
    let relay = if cooker_on { "on" } else { "off" };
    match phase {
        StateId::Cooking => {
            let secs = remaining_ms.unwrap_or(0) / 1000;
            format!("{celsius:.2} {relay} | {}", remaining(secs))
        }
        StateId::Cooked => format!("{celsius:.2} {relay} | finished"),
        _ => format!("{celsius:.2} {relay}"),
    }
}

/// Abbreviated LCD frame, keyed by phase.
pub fn status_frame(phase: StateId, celsius: f32, remaining_ms: Option<u64>) -> Frame {
    let temp = celsius_short(celsius);
    match phase {
        StateId::Preparing => Frame::new("Prepare", &temp),
        StateId::Ready => Frame::new("Ready", "Add food"),
        StateId::FoodIn => Frame::new("Food in", &temp),
        StateId::Cooking => {
            let secs = remaining_ms.unwrap_or(0) / 1000;
            Frame::new(&temp, &remaining_short(secs))
        }
        StateId::Cooked => Frame::new("Cooked", &temp),
        StateId::Finished => Frame::new("Done", ""),
    }
}
