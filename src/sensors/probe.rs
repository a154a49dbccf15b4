//! DS18B20 one-wire temperature probe.
//!
//! The kernel's w1 bus exposes each probe as
//! `/sys/bus/w1/devices/28-*/w1_slave`. A read returns two lines:
//!
//! ```text
//! 72 01 4b 46 7f ff 0e 10 57 : crc=57 YES
//! 72 01 4b 46 7f ff 0e 10 57 t=23125
//! ```
//!
//! The first line ends in `YES` when the on-chip CRC checked out; the
//! second carries the temperature in millidegrees. Without the `rpi`
//! feature the driver reads a process-local simulated value instead.

use crate::app::ports::SensorPort;
use crate::error::SensorError;

/// Millidegree reading parsed out of a `w1_slave` dump.
fn parse_w1_slave(raw: &str) -> Result<f32, SensorError> {
    let mut lines = raw.lines();
    let crc_line = lines.next().ok_or(SensorError::Malformed)?;
    if !crc_line.trim_end().ends_with("YES") {
        return Err(SensorError::ReadFailed);
    }
    let data_line = lines.next().ok_or(SensorError::Malformed)?;
    let millis = data_line
        .rsplit_once("t=")
        .and_then(|(_, v)| v.trim().parse::<i32>().ok())
        .ok_or(SensorError::Malformed)?;
    Ok(millis as f32 / 1000.0)
}

/// Driver for a single DS18B20 on the w1 bus.
pub struct Ds18b20Probe {
    #[cfg(feature = "rpi")]
    bus_dir: std::path::PathBuf,
    #[cfg(feature = "rpi")]
    device: Option<std::path::PathBuf>,
}

impl Ds18b20Probe {
    /// The probe is discovered lazily on first read, so a sensor plugged
    /// in after boot still gets picked up.
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "rpi")]
            bus_dir: std::path::PathBuf::from(Self::W1_DEVICES),
            #[cfg(feature = "rpi")]
            device: None,
        }
    }
}

impl Default for Ds18b20Probe {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "rpi")]
impl Ds18b20Probe {
    const W1_DEVICES: &'static str = "/sys/bus/w1/devices";

    #[cfg(test)]
    fn at_bus(bus_dir: std::path::PathBuf) -> Self {
        Self {
            bus_dir,
            device: None,
        }
    }

    fn discover(&self) -> Option<std::path::PathBuf> {
        let entries = std::fs::read_dir(&self.bus_dir).ok()?;
        for entry in entries.flatten() {
            let name = entry.file_name();
            // Family code 0x28 = DS18B20.
            if name.to_string_lossy().starts_with("28-") {
                return Some(entry.path().join("w1_slave"));
            }
        }
        None
    }
}

#[cfg(feature = "rpi")]
impl SensorPort for Ds18b20Probe {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        if self.device.is_none() {
            self.device = self.discover();
        }
        let path = self.device.as_ref().ok_or(SensorError::Unavailable)?;
        match std::fs::read_to_string(path) {
            Ok(raw) => parse_w1_slave(&raw),
            Err(_) => {
                // The bus may have re-enumerated under a new serial;
                // drop the stale path so the next read rediscovers.
                self.device = None;
                Err(SensorError::ReadFailed)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Host simulation (no rpi feature)
// ---------------------------------------------------------------------------

#[cfg(not(feature = "rpi"))]
mod sim {
    use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};

    // Millidegrees, signed — sub-zero readings must survive the trip.
    static SIM_MILLIDEGREES: AtomicI32 = AtomicI32::new(20_000);
    static SIM_AVAILABLE: AtomicBool = AtomicBool::new(true);

    pub fn set_celsius(celsius: f32) {
        SIM_MILLIDEGREES.store((celsius * 1000.0) as i32, Ordering::Relaxed);
    }

    pub fn set_available(available: bool) {
        SIM_AVAILABLE.store(available, Ordering::Relaxed);
    }

    pub fn read() -> Option<f32> {
        if SIM_AVAILABLE.load(Ordering::Relaxed) {
            Some(SIM_MILLIDEGREES.load(Ordering::Relaxed) as f32 / 1000.0)
        } else {
            None
        }
    }
}

#[cfg(not(feature = "rpi"))]
pub use sim::{set_available as sim_set_available, set_celsius as sim_set_celsius};

#[cfg(not(feature = "rpi"))]
impl SensorPort for Ds18b20Probe {
    fn read_temperature(&mut self) -> Result<f32, SensorError> {
        sim::read().ok_or(SensorError::Unavailable)
    }
}
