//! Production hardware adapter.
//!
//! Bundles the real peripherals behind the three hardware ports. The
//! character LCD is not fitted on current boards, so the display port
//! mirrors each frame to the log and keeps the last written lines for
//! inspection.

use log::info;

use crate::app::ports::{CookerPort, DisplayPort, Line, SensorPort};
use crate::drivers::{RemoteSwitch, StatusLed};
use crate::error::{DisplayError, RelayError, SensorError};
use crate::sensors::Ds18b20Probe;

pub struct HardwareAdapter {
    probe: Ds18b20Probe,
    cooker: RemoteSwitch,
    led: StatusLed,
    lines: [String; 2],
}

impl HardwareAdapter {
    /// Claim every peripheral the controller needs. Fails fast at
    /// startup if a pin is already held by another process.
    #[cfg(feature = "rpi")]
    pub fn new() -> crate::error::Result<Self> {
        let gpio = rppal::gpio::Gpio::new()
            .map_err(|_| crate::error::Error::Init("gpio unavailable"))?;
        Ok(Self {
            probe: Ds18b20Probe::new(),
            cooker: RemoteSwitch::new(&gpio)?,
            led: StatusLed::new(&gpio)?,
            lines: [String::new(), String::new()],
        })
    }

    #[cfg(not(feature = "rpi"))]
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self {
            probe: Ds18b20Probe::new(),
            cooker: RemoteSwitch::new()?,
            led: StatusLed::new()?,
            lines: [String::new(), String::new()],
        })
    }

    /// Last text written to each display line.
    pub fn display_lines(&self) -> (&str, &str) {
        (&self.lines[0], &self.lines[1])
    }
}

impl SensorPort for HardwareAdapter {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        self.probe.read_temperature()
    }
}

impl CookerPort for HardwareAdapter {
    fn switch_on(&mut self) -> Result<(), RelayError> {
        self.cooker.switch_on()
    }

    fn switch_off(&mut self) -> Result<(), RelayError> {
        self.cooker.switch_off()
    }

    fn is_on(&self) -> bool {
        self.cooker.is_on()
    }

    fn set_led(&mut self, on: bool) {
        self.led.set(on);
    }

    fn all_off(&mut self) {
        if let Err(e) = self.cooker.switch_off() {
            log::warn!("RELAY | shutdown command failed: {e}");
        }
        self.led.off();
    }
}

impl DisplayPort for HardwareAdapter {
    fn write_line(&mut self, line: Line, text: &str) -> Result<(), DisplayError> {
        let idx = match line {
            Line::Top => 0,
            Line::Bottom => 1,
        };
        if self.lines[idx] != text {
            info!("LCD | {:?}: {text}", line);
            self.lines[idx] = text.to_owned();
        }
        Ok(())
    }
}
