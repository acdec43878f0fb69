//! Winding and pump pin bank
//!
//! A plain level port: every call drives all six lines to the requested
//! levels. Pump pulsing is layered on top by
//! [`wiper_core::actuator::ToggleOnWrite`].

use wiper_core::config::PumpConfig;
use wiper_core::fsm::output::WINDING_COUNT;
use wiper_core::traits::LevelPort;
use wiper_hal::{Level, OutputPin};

/// Five winding pins and the pump pin
pub struct PinBank<W, P> {
    /// Winding lines, bit 0 first
    windings: [W; WINDING_COUNT],
    pump: P,
    /// If true, pump ON = pin LOW
    pump_inverted: bool,
}

impl<W: OutputPin, P: OutputPin> PinBank<W, P> {
    /// Create a pin bank with every line off
    pub fn new(windings: [W; WINDING_COUNT], pump: P, config: PumpConfig) -> Self {
        let mut bank = Self {
            windings,
            pump,
            pump_inverted: config.pin.inverted,
        };
        // Ensure motor and pump start off
        bank.set_levels(0, false);
        bank
    }

    /// Pump line currently commanded on
    pub fn pump_on(&self) -> bool {
        self.pump.is_set_high() != self.pump_inverted
    }

    /// Winding pattern currently driven (bits 0-4)
    pub fn windings(&self) -> u8 {
        self.windings
            .iter()
            .enumerate()
            .filter(|(_, pin)| pin.is_set_high())
            .fold(0, |bits, (line, _)| bits | (1 << line))
    }
}

impl<W: OutputPin, P: OutputPin> LevelPort for PinBank<W, P> {
    fn set_levels(&mut self, windings: u8, aux: bool) {
        for (line, pin) in self.windings.iter_mut().enumerate() {
            pin.set_level(Level::from(windings & (1 << line) != 0));
        }
        self.pump
            .set_level(Level::from(aux).inverted_if(self.pump_inverted));
    }
}
