//! Interactive setup flow.
//!
//! Before a cook starts, the operator dials in the target temperature
//! and the timer with the up/down buttons, confirming each with enter.
//! Values supplied up front (e.g. from a config file) skip their stage.
//! Back cancels the whole session.

use log::info;

use crate::app::ports::{DisplayPort, Line};
use crate::config::CookConfig;
use crate::events::Event;

/// Which value the operator is currently adjusting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Temperature,
    Duration,
    Done,
}

/// Result of feeding one button event into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupOutcome {
    /// Still collecting input.
    Pending,
    /// Both values confirmed; read them with [`SetupSession::values`].
    Confirmed,
    /// Back pressed; the session is abandoned.
    Cancelled,
}

/// State of one setup dialogue.
///
/// Adjustments are deliberately unbounded: the increments can take the
/// values negative, and the cook loop copes (a non-positive duration
/// simply expires on the first cooking tick).
#[derive(Debug)]
pub struct SetupSession {
    stage: Stage,
    temperature_c: f32,
    duration_mins: i64,
    duration_preset: bool,
    temperature_increment_c: f32,
    duration_increment_mins: i64,
}

impl SetupSession {
    /// Start a session seeded from `config`. A `Some` in `temperature`
    /// or `duration` adopts that value verbatim and skips its stage.
    pub fn new(config: &CookConfig, temperature: Option<f32>, duration: Option<i64>) -> Self {
        let stage = match (temperature, duration) {
            (Some(_), Some(_)) => Stage::Done,
            (Some(_), None) => Stage::Duration,
            _ => Stage::Temperature,
        };
        Self {
            stage,
            temperature_c: temperature.unwrap_or(config.target_temperature_c),
            duration_mins: duration.unwrap_or(config.duration_mins),
            duration_preset: duration.is_some(),
            temperature_increment_c: config.temperature_increment_c,
            duration_increment_mins: config.duration_increment_mins,
        }
    }

    /// Render the opening prompt for the current stage, followed by the
    /// seeded value, so the operator sees what a bare confirm would keep.
    pub fn begin(&self, display: &mut impl DisplayPort) {
        let rendered = self
            .render_prompt(display)
            .and_then(|()| self.render_value(display));
        if let Err(e) = rendered {
            log::warn!("LCD | setup prompt dropped: {e}");
        }
    }

    /// Both values confirmed?
    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// `(target temperature, duration in minutes)` as currently dialed.
    pub fn values(&self) -> (f32, i64) {
        (self.temperature_c, self.duration_mins)
    }

    /// Feed one button event into the dialogue.
    pub fn handle_button(
        &mut self,
        event: Event,
        display: &mut impl DisplayPort,
    ) -> SetupOutcome {
        if self.stage == Stage::Done {
            return SetupOutcome::Confirmed;
        }
        match event {
            Event::ButtonUp => {
                self.adjust(1);
                self.show_value(display);
                SetupOutcome::Pending
            }
            Event::ButtonDown => {
                self.adjust(-1);
                self.show_value(display);
                SetupOutcome::Pending
            }
            Event::ButtonEnter => {
                self.stage = match self.stage {
                    Stage::Temperature => {
                        info!("SETUP | temperature set to {:.1} C", self.temperature_c);
                        if self.duration_preset {
                            Stage::Done
                        } else {
                            Stage::Duration
                        }
                    }
                    Stage::Duration => {
                        info!("SETUP | timer set to {} min", self.duration_mins);
                        Stage::Done
                    }
                    Stage::Done => Stage::Done,
                };
                if self.stage == Stage::Done {
                    SetupOutcome::Confirmed
                } else {
                    self.begin(display);
                    SetupOutcome::Pending
                }
            }
            Event::ButtonBack => {
                info!("SETUP | cancelled");
                SetupOutcome::Cancelled
            }
            Event::ControlTick => SetupOutcome::Pending,
        }
    }

    fn adjust(&mut self, direction: i64) {
        match self.stage {
            Stage::Temperature => {
                self.temperature_c += direction as f32 * self.temperature_increment_c;
            }
            Stage::Duration => {
                self.duration_mins += direction * self.duration_increment_mins;
            }
            Stage::Done => {}
        }
    }

    fn show_value(&self, display: &mut impl DisplayPort) {
        if let Err(e) = self.render_value(display) {
            log::warn!("LCD | setup value dropped: {e}");
        }
    }

    fn render_prompt(&self, display: &mut impl DisplayPort) -> crate::error::Result<()> {
        match self.stage {
            Stage::Temperature => {
                display.write_line(Line::Top, "Set")?;
                display.write_line(Line::Bottom, "temp")?;
            }
            Stage::Duration => {
                display.write_line(Line::Top, "Set")?;
                display.write_line(Line::Bottom, "timer")?;
            }
            Stage::Done => {}
        }
        Ok(())
    }

    fn render_value(&self, display: &mut impl DisplayPort) -> crate::error::Result<()> {
        match self.stage {
            Stage::Temperature => {
                display.write_line(Line::Top, "Temp:")?;
                display.write_line(Line::Bottom, &format!("{:>7.0}C", self.temperature_c))?;
            }
            Stage::Duration => {
                display.write_line(Line::Top, "Timer:")?;
                display.write_line(Line::Bottom, &format!("{:>3} mins", self.duration_mins))?;
            }
            Stage::Done => {}
        }
        Ok(())
    }
}
