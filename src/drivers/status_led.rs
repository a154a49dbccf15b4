//! Status LED driver. The LED mirrors the cooker relay so the operator
//! can see at a glance whether the bath is being heated.

pub struct StatusLed {
    #[cfg(feature = "rpi")]
    pin: rppal::gpio::OutputPin,
    on: bool,
}

#[cfg(feature = "rpi")]
impl StatusLed {
    pub fn new(gpio: &rppal::gpio::Gpio) -> crate::error::Result<Self> {
        let pin = gpio
            .get(crate::pins::LED_GPIO)
            .map_err(|_| crate::error::Error::Init("led pin busy"))?
            .into_output_low();
        Ok(Self { pin, on: false })
    }

    pub fn set(&mut self, on: bool) {
        if on {
            self.pin.set_high();
        } else {
            self.pin.set_low();
        }
        self.on = on;
    }
}

#[cfg(not(feature = "rpi"))]
impl StatusLed {
    pub fn new() -> crate::error::Result<Self> {
        Ok(Self { on: false })
    }

    pub fn set(&mut self, on: bool) {
        self.on = on;
    }
}

impl StatusLed {
    pub fn off(&mut self) {
        self.set(false);
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
