//! Dynamic pin allocation for config-driven hardware setup
//!
//! Pin numbers come from `wiper.toml`, so pins are handed out by number at
//! runtime instead of being named in the firmware source.

use embassy_rp::gpio::{AnyPin, Input, Level, Output, Pull};
use embassy_rp::{Peri, Peripherals};
use wiper_core::config::{PinConfig, GPIO_COUNT};

use crate::gpio::{RpInput, RpOutput};

/// Error when requesting a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number out of range (0-29 valid)
    InvalidPin(u8),
    /// Pin already taken
    AlreadyTaken(u8),
}

/// Pool holding every GPIO pin, handing them out by number
pub struct GpioPool {
    pins: [Option<Peri<'static, AnyPin>>; GPIO_COUNT as usize],
}

impl GpioPool {
    /// Take ownership of all GPIO pins
    pub fn new(p: Peripherals) -> Self {
        Self {
            pins: [
                Some(p.PIN_0.into()),
                Some(p.PIN_1.into()),
                Some(p.PIN_2.into()),
                Some(p.PIN_3.into()),
                Some(p.PIN_4.into()),
                Some(p.PIN_5.into()),
                Some(p.PIN_6.into()),
                Some(p.PIN_7.into()),
                Some(p.PIN_8.into()),
                Some(p.PIN_9.into()),
                Some(p.PIN_10.into()),
                Some(p.PIN_11.into()),
                Some(p.PIN_12.into()),
                Some(p.PIN_13.into()),
                Some(p.PIN_14.into()),
                Some(p.PIN_15.into()),
                Some(p.PIN_16.into()),
                Some(p.PIN_17.into()),
                Some(p.PIN_18.into()),
                Some(p.PIN_19.into()),
                Some(p.PIN_20.into()),
                Some(p.PIN_21.into()),
                Some(p.PIN_22.into()),
                Some(p.PIN_23.into()),
                Some(p.PIN_24.into()),
                Some(p.PIN_25.into()),
                Some(p.PIN_26.into()),
                Some(p.PIN_27.into()),
                Some(p.PIN_28.into()),
                Some(p.PIN_29.into()),
            ],
        }
    }

    /// Take a pin by number
    pub fn take(&mut self, pin_num: u8) -> Result<Peri<'static, AnyPin>, PinError> {
        if pin_num >= GPIO_COUNT {
            return Err(PinError::InvalidPin(pin_num));
        }
        self.pins[pin_num as usize]
            .take()
            .ok_or(PinError::AlreadyTaken(pin_num))
    }

    /// Take a pin as an output, driven low
    pub fn output(&mut self, pin_num: u8) -> Result<RpOutput<'static>, PinError> {
        let pin = self.take(pin_num)?;
        Ok(RpOutput::new(Output::new(pin, Level::Low)))
    }

    /// Take a pin as an output in its inactive state
    ///
    /// An inverted (active-low) output starts high.
    pub fn inactive_output(&mut self, config: PinConfig) -> Result<RpOutput<'static>, PinError> {
        let pin = self.take(config.pin)?;
        let level = if config.inverted { Level::High } else { Level::Low };
        Ok(RpOutput::new(Output::new(pin, level)))
    }

    /// Take a pin as an input with the configured pull
    ///
    /// Without `pull_up` the input is pulled down, so a released button
    /// wired to 3V3 reads low.
    pub fn input(&mut self, config: PinConfig) -> Result<RpInput<'static>, PinError> {
        let pin = self.take(config.pin)?;
        let pull = if config.pull_up { Pull::Up } else { Pull::Down };
        Ok(RpInput::new(Input::new(pin, pull)))
    }
}
