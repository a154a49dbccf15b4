//! Push-button bindings.
//!
//! The four panel buttons are active-low momentary switches with the
//! internal pull-ups enabled. Each one gets a debounced falling-edge
//! interrupt whose callback does exactly one thing: enqueue the button's
//! event on the shared queue. All interpretation happens later, on the
//! main loop, which is the queue's only consumer.
//!
//! `rppal` runs each pin's callback on its own thread, so the callbacks
//! are genuinely concurrent producers. Dropping the bindings unbinds
//! every interrupt, which lets the main loop release the buttons between
//! sessions.

#[cfg(feature = "rpi")]
use crate::events::Event;

/// Holds the interrupt-bound button pins for the lifetime of a session.
pub struct ButtonBindings {
    #[cfg(feature = "rpi")]
    _pins: Vec<rppal::gpio::InputPin>,
}

#[cfg(feature = "rpi")]
impl ButtonBindings {
    /// Claim the four button pins and install their interrupts.
    pub fn bind(gpio: &rppal::gpio::Gpio) -> crate::error::Result<Self> {
        use rppal::gpio::Trigger;
        use std::time::Duration;

        let debounce = Some(Duration::from_millis(crate::pins::BUTTON_DEBOUNCE_MS));
        let mut pins = Vec::with_capacity(4);

        for (bcm, event) in [
            (crate::pins::BUTTON_UP_GPIO, Event::ButtonUp),
            (crate::pins::BUTTON_DOWN_GPIO, Event::ButtonDown),
            (crate::pins::BUTTON_ENTER_GPIO, Event::ButtonEnter),
            (crate::pins::BUTTON_BACK_GPIO, Event::ButtonBack),
        ] {
            let mut pin = gpio
                .get(bcm)
                .map_err(|_| crate::error::Error::Init("button pin busy"))?
                .into_input_pullup();
            pin.set_async_interrupt(Trigger::FallingEdge, debounce, move |_| {
                if !crate::events::push_event(event) {
                    log::warn!("EVENT | queue full, button press dropped");
                }
            })
            .map_err(|_| crate::error::Error::Init("button interrupt setup failed"))?;
            pins.push(pin);
        }

        log::info!("BUTTONS | bindings installed");
        Ok(Self { _pins: pins })
    }
}

#[cfg(not(feature = "rpi"))]
impl ButtonBindings {
    /// Host stand-in: no pins to claim. Tests push events directly.
    pub fn bind() -> crate::error::Result<Self> {
        Ok(Self {})
    }
}
