//! Cook service — the application core.
//!
//! Owns the FSM, its context, and the relay hysteresis. Each control
//! tick it reads the probe, moderates the cooker, advances the state
//! machine, applies actuator commands, and renders status. All I/O goes
//! through the port traits, so the whole cycle runs unchanged against
//! mock hardware in tests.

use log::warn;

use crate::app::events::AppEvent;
use crate::app::format;
use crate::app::ports::{CookerPort, DisplayPort, EventSink, Line, SensorPort};
use crate::config::CookConfig;
use crate::control::hysteresis::Hysteresis;
use crate::fsm::context::CookContext;
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::commands::CookCommand;

/// Optional per-session overrides, typically parsed from the command
/// line or a config file. `None` means ask the operator during setup.
#[derive(Debug, Clone, Copy)]
pub struct SessionParams {
    pub temperature: Option<f32>,
    pub duration: Option<i64>,
    /// When false, the session stops after configuration instead of
    /// running the cook loop.
    pub auto_start: bool,
}

impl Default for SessionParams {
    fn default() -> Self {
        Self {
            temperature: None,
            duration: None,
            auto_start: true,
        }
    }
}

/// Drives one cook session from Preparing to Finished.
pub struct CookService {
    fsm: Fsm,
    ctx: CookContext,
    relay: Hysteresis,
    last_good_celsius: Option<f32>,
}

impl CookService {
    pub fn new(config: CookConfig) -> Self {
        let relay = Hysteresis::new(config.target_temperature_c, config.temperature_margin_c);
        Self {
            fsm: Fsm::new(build_state_table(), StateId::Preparing),
            ctx: CookContext::new(config),
            relay,
            last_good_celsius: None,
        }
    }

    /// Run the initial state's entry action and announce the session.
    pub fn start(&mut self, now_ms: u64, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
    }

    /// One full control cycle: sense, moderate, step, actuate, render.
    pub fn tick<H>(&mut self, now_ms: u64, hw: &mut H, sink: &mut impl EventSink)
    where
        H: SensorPort + CookerPort + DisplayPort,
    {
        // A tick drained after the session already finished (abort and
        // tick in the same batch) must not re-energize anything.
        if self.finished() {
            return;
        }
        self.ctx.now_ms = now_ms;

        // Sense. A failed read keeps the last good value; moderation and
        // phase logic then run on stale-but-plausible data rather than
        // slamming the relay off mid-cook.
        match hw.read_temperature() {
            Ok(celsius) => {
                self.last_good_celsius = Some(celsius);
                self.ctx.probe.celsius = celsius;
                self.ctx.probe.sensor_ok = true;
            }
            Err(e) => {
                warn!("PROBE | read failed: {e}");
                sink.emit(&AppEvent::SensorUnavailable);
                if let Some(last) = self.last_good_celsius {
                    self.ctx.probe.celsius = last;
                } else {
                    self.ctx.probe.sensor_ok = false;
                }
            }
        }

        // Moderate: the hysteresis runs every tick in every phase, so
        // the bath is already held at target while food goes in.
        if self.ctx.probe.sensor_ok {
            let on = self.relay.update(self.ctx.probe.celsius);
            self.ctx.commands.cooker_on = on;
            self.ctx.commands.led_on = on;
        }

        // Step the state machine.
        let before = self.fsm.current_state();
        self.fsm.tick(&mut self.ctx);
        let after = self.fsm.current_state();
        if before != after {
            sink.emit(&AppEvent::StateChanged {
                from: before,
                to: after,
            });
            if after == StateId::Cooking {
                if let Some(end) = self.ctx.end_time_ms {
                    sink.emit(&AppEvent::CookingStarted { end_time_ms: end });
                }
            }
        }

        self.apply_actuators(hw);
        self.render(hw, sink);
    }

    /// Handle a button-driven command between ticks.
    pub fn handle_command(
        &mut self,
        cmd: CookCommand,
        hw: &mut impl CookerPort,
        sink: &mut impl EventSink,
    ) {
        match cmd {
            CookCommand::Confirm => {
                let next = match self.fsm.current_state() {
                    StateId::Ready => Some(StateId::FoodIn),
                    StateId::Cooked => Some(StateId::Finished),
                    _ => None,
                };
                if let Some(next) = next {
                    let from = self.fsm.current_state();
                    self.fsm.force_transition(next, &mut self.ctx);
                    sink.emit(&AppEvent::StateChanged { from, to: next });
                    self.apply_actuators(hw);
                }
            }
            CookCommand::Abort => {
                if self.fsm.current_state() != StateId::Finished {
                    let from = self.fsm.current_state();
                    self.fsm.force_transition(StateId::Finished, &mut self.ctx);
                    sink.emit(&AppEvent::Aborted);
                    sink.emit(&AppEvent::StateChanged {
                        from,
                        to: StateId::Finished,
                    });
                    self.apply_actuators(hw);
                }
            }
        }
    }

    pub fn phase(&self) -> StateId {
        self.fsm.current_state()
    }

    pub fn finished(&self) -> bool {
        self.fsm.current_state() == StateId::Finished
    }

    pub fn end_time_ms(&self) -> Option<u64> {
        self.ctx.end_time_ms
    }

    /// Is `celsius` strictly inside the margin window around the target?
    pub fn in_temperature_range(&self, celsius: f32) -> bool {
        self.ctx.in_temperature_range(celsius)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    /// Push the context's actuator commands out to the hardware. Only
    /// touches the relay when the desired state differs from the last
    /// commanded one; a failed command logs and leaves the commanded
    /// state unchanged so the next tick retries.
    fn apply_actuators(&mut self, hw: &mut impl CookerPort) {
        let want_on = self.ctx.commands.cooker_on;
        if want_on != hw.is_on() {
            let result = if want_on {
                hw.switch_on()
            } else {
                hw.switch_off()
            };
            if let Err(e) = result {
                warn!("RELAY | command failed: {e}");
            }
        }
        hw.set_led(self.ctx.commands.led_on);
    }

    fn render<H>(&mut self, hw: &mut H, sink: &mut impl EventSink)
    where
        H: CookerPort + DisplayPort,
    {
        let phase = self.fsm.current_state();
        if phase == StateId::Finished {
            return;
        }
        let celsius = self.ctx.probe.celsius;
        let remaining = self.ctx.remaining_ms();

        sink.emit(&AppEvent::Status {
            phase,
            celsius,
            cooker_on: hw.is_on(),
            remaining_ms: remaining,
        });

        let frame = format::status_frame(phase, celsius, remaining);
        if let Err(e) = hw.write_line(Line::Top, frame.top.as_str()) {
            warn!("LCD | write failed: {e}");
            return;
        }
        if let Err(e) = hw.write_line(Line::Bottom, frame.bottom.as_str()) {
            warn!("LCD | write failed: {e}");
        }
    }
}
