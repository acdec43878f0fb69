//! Configuration type definitions
//!
//! These types mirror the `wiper.toml` file shipped with the firmware.
//! Every section is optional; missing sections take the defaults of the
//! reference wiring.

use heapless::FnvIndexSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::hardware::PinConfig;
use crate::fsm::output::WINDING_COUNT;

/// Default base time quantum (ms)
pub const DEFAULT_QUANTUM_MS: u32 = 10;

/// Longest base time quantum accepted (ms)
pub const MAX_QUANTUM_MS: u32 = 1000;

/// Buttons + windings + pump
const PIN_COUNT: usize = 2 + WINDING_COUNT + 1;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `timing.quantum_ms` outside `1..=MAX_QUANTUM_MS`
    QuantumOutOfRange(u32),
    /// Pin number does not exist on the chip
    InvalidPin(u8),
    /// Pin assigned to more than one function
    PinConflict(u8),
}

/// Timing of the interpreter loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TimingConfig {
    /// Length of one dwell unit in milliseconds
    pub quantum_ms: u32,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            quantum_ms: DEFAULT_QUANTUM_MS,
        }
    }
}

impl TimingConfig {
    /// Wall time of a dwell of `units` quanta
    pub fn dwell_ms(&self, units: u32) -> u32 {
        units.saturating_mul(self.quantum_ms)
    }
}

/// Button wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ButtonConfig {
    /// Wipe (minor) button, input bit 0
    pub wipe: PinConfig,
    /// Wash (major) button, input bit 1
    pub wash: PinConfig,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            wipe: PinConfig::new(14),
            wash: PinConfig::new(15),
        }
    }
}

/// Stepper winding wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotorConfig {
    /// GPIO for each winding line, output bit 0 first
    pub windings: [u8; WINDING_COUNT],
}

impl Default for MotorConfig {
    fn default() -> Self {
        Self {
            windings: [0, 1, 2, 3, 4],
        }
    }
}

/// Washer pump wiring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PumpConfig {
    /// Pump output; `inverted` means the pump runs when the pin is low
    pub pin: PinConfig,
}

impl Default for PumpConfig {
    fn default() -> Self {
        Self {
            pin: PinConfig::new(5),
        }
    }
}

/// Complete controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WiperConfig {
    pub timing: TimingConfig,
    pub buttons: ButtonConfig,
    pub motor: MotorConfig,
    pub pump: PumpConfig,
}

impl WiperConfig {
    /// Every GPIO the configuration claims
    pub fn pins(&self) -> [u8; PIN_COUNT] {
        let w = self.motor.windings;
        [
            self.buttons.wipe.pin,
            self.buttons.wash.pin,
            w[0],
            w[1],
            w[2],
            w[3],
            w[4],
            self.pump.pin.pin,
        ]
    }

    /// Check value ranges and pin assignments
    pub fn validate(&self) -> Result<(), ConfigError> {
        let quantum = self.timing.quantum_ms;
        if quantum == 0 || quantum > MAX_QUANTUM_MS {
            return Err(ConfigError::QuantumOutOfRange(quantum));
        }

        let mut claimed: FnvIndexSet<u8, 16> = FnvIndexSet::new();
        for pin in self.pins() {
            if !PinConfig::new(pin).is_valid() {
                return Err(ConfigError::InvalidPin(pin));
            }
            // insert() reports false when the pin was already present
            match claimed.insert(pin) {
                Ok(true) => {}
                Ok(false) | Err(_) => return Err(ConfigError::PinConflict(pin)),
            }
        }

        Ok(())
    }
}
