//! Mock hardware for integration tests.
//!
//! Implements all three hardware ports with scriptable failures and a
//! call journal, so tests can assert both what the service decided and
//! what it actually asked the hardware to do.

use chef_hat::app::events::AppEvent;
use chef_hat::app::ports::{CookerPort, DisplayPort, EventSink, Line, SensorPort};
use chef_hat::error::{DisplayError, RelayError, SensorError};

/// One recorded hardware interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HwCall {
    SwitchOn,
    SwitchOff,
    Led(bool),
    AllOff,
}

pub struct MockHardware {
    /// Temperature returned by the probe.
    pub temperature: f32,
    /// When set, the probe fails with this error instead of reading.
    pub sensor_error: Option<SensorError>,
    /// When true, relay commands fail.
    pub relay_fail: bool,
    /// When true, display writes fail.
    pub display_fail: bool,

    pub relay_on: bool,
    pub led_on: bool,
    pub lines: [String; 2],
    pub calls: Vec<HwCall>,
}

impl MockHardware {
    pub fn new(temperature: f32) -> Self {
        Self {
            temperature,
            sensor_error: None,
            relay_fail: false,
            display_fail: false,
            relay_on: false,
            led_on: false,
            lines: [String::new(), String::new()],
            calls: Vec::new(),
        }
    }

    pub fn relay_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, HwCall::SwitchOn | HwCall::SwitchOff))
            .count()
    }
}

impl SensorPort for MockHardware {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        match self.sensor_error {
            Some(e) => Err(e),
            None => Ok(self.temperature),
        }
    }
}

impl CookerPort for MockHardware {
    fn switch_on(&mut self) -> Result<(), RelayError> {
        self.calls.push(HwCall::SwitchOn);
        if self.relay_fail {
            return Err(RelayError::CommandFailed);
        }
        self.relay_on = true;
        Ok(())
    }

    fn switch_off(&mut self) -> Result<(), RelayError> {
        self.calls.push(HwCall::SwitchOff);
        if self.relay_fail {
            return Err(RelayError::CommandFailed);
        }
        self.relay_on = false;
        Ok(())
    }

    fn is_on(&self) -> bool {
        self.relay_on
    }

    fn set_led(&mut self, on: bool) {
        if self.led_on != on {
            self.calls.push(HwCall::Led(on));
        }
        self.led_on = on;
    }

    fn all_off(&mut self) {
        self.calls.push(HwCall::AllOff);
        self.relay_on = false;
        self.led_on = false;
    }
}

impl DisplayPort for MockHardware {
    fn write_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError> {
        if self.display_fail {
            return Err(DisplayError::WriteFailed);
        }
        let idx = match line {
            Line::Top => 0,
            Line::Bottom => 1,
        };
        self.lines[idx] = text.to_owned();
        Ok(())
    }
}

/// Event sink that records everything emitted.
#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
