//! Energenie ENER314 remote mains switch.
//!
//! The HAT carries a 433 MHz OOK transmitter board. Four data lines
//! select the socket code, the mode line stays low for OOK, and pulsing
//! the enable line keys the transmitter. Socket 1 codes:
//!
//! ```text
//!   on  = 0b1111   (D3 D2 D1 D0)
//!   off = 0b0111
//! ```
//!
//! The modulator needs the data lines stable before keying, hence the
//! settle delay, and the transmission itself repeats for the duration
//! of the enable pulse.

use log::debug;

use crate::error::RelayError;
#[cfg(feature = "rpi")]
use crate::pins;

/// Socket-1 "on" code.
const CODE_ON: u8 = 0b1111;
/// Socket-1 "off" code.
const CODE_OFF: u8 = 0b0111;

/// Data lines settle time before keying the transmitter.
#[cfg(feature = "rpi")]
const SETTLE_MS: u64 = 100;
/// Enable pulse width; the encoder chip repeats the frame throughout.
#[cfg(feature = "rpi")]
const TRANSMIT_MS: u64 = 250;

/// Driver for the on-board OOK transmitter.
pub struct RemoteSwitch {
    #[cfg(feature = "rpi")]
    data: [rppal::gpio::OutputPin; 4],
    #[cfg(feature = "rpi")]
    _mode: rppal::gpio::OutputPin,
    #[cfg(feature = "rpi")]
    enable: rppal::gpio::OutputPin,
    on: bool,
}

#[cfg(feature = "rpi")]
impl RemoteSwitch {
    /// Claim the transmitter pins. All lines start low: OOK mode,
    /// transmitter un-keyed.
    pub fn new(gpio: &rppal::gpio::Gpio) -> crate::error::Result<Self> {
        let claim = |bcm: u8| -> crate::error::Result<rppal::gpio::OutputPin> {
            gpio.get(bcm)
                .map(rppal::gpio::Pin::into_output_low)
                .map_err(|_| crate::error::Error::Init("transmitter pin busy"))
        };
        Ok(Self {
            data: [
                claim(pins::SWITCH_D0_GPIO)?,
                claim(pins::SWITCH_D1_GPIO)?,
                claim(pins::SWITCH_D2_GPIO)?,
                claim(pins::SWITCH_D3_GPIO)?,
            ],
            _mode: claim(pins::SWITCH_MODE_GPIO)?,
            enable: claim(pins::SWITCH_ENABLE_GPIO)?,
            on: false,
        })
    }

    fn transmit(&mut self, code: u8) -> Result<(), RelayError> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            if code & (1 << bit) != 0 {
                pin.set_high();
            } else {
                pin.set_low();
            }
        }
        std::thread::sleep(std::time::Duration::from_millis(SETTLE_MS));
        self.enable.set_high();
        std::thread::sleep(std::time::Duration::from_millis(TRANSMIT_MS));
        self.enable.set_low();
        Ok(())
    }
}

#[cfg(not(feature = "rpi"))]
impl RemoteSwitch {
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self { on: false })
    }

    fn transmit(&mut self, _code: u8) -> Result<(), RelayError> {
        Ok(())
    }
}

impl RemoteSwitch {
    /// Key the "socket on" frame and remember the commanded state.
    pub fn switch_on(&mut self) -> Result<(), RelayError> {
        debug!("RELAY | switching on");
        self.transmit(CODE_ON)?;
        self.on = true;
        Ok(())
    }

    /// Key the "socket off" frame and remember the commanded state.
    pub fn switch_off(&mut self) -> Result<(), RelayError> {
        debug!("RELAY | switching off");
        self.transmit(CODE_OFF)?;
        self.on = false;
        Ok(())
    }

    /// Last successfully commanded state. The link is one-way, so this
    /// is the best knowledge available.
    pub fn is_on(&self) -> bool {
        self.on
    }
}
