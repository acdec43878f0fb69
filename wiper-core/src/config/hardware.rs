//! Hardware configuration types
//!
//! Pin assignments for the buttons, the stepper windings and the pump.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of user GPIO pins on the RP2040
pub const GPIO_COUNT: u8 = 30;

/// Pin configuration with optional inversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// GPIO pin number (0-29 for RP2040)
    pub pin: u8,
    /// Pin is active-low (inverted)
    #[cfg_attr(feature = "serde", serde(default))]
    pub inverted: bool,
    /// Enable internal pull-up (pull-down otherwise, for inputs)
    #[cfg_attr(feature = "serde", serde(default))]
    pub pull_up: bool,
}

impl PinConfig {
    /// Create a new pin config
    pub const fn new(pin: u8) -> Self {
        Self {
            pin,
            inverted: false,
            pull_up: false,
        }
    }

    /// Create an inverted (active-low) pin
    pub const fn inverted(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: false,
        }
    }

    /// Create an active-low input with the pull-up enabled
    pub const fn active_low_with_pullup(pin: u8) -> Self {
        Self {
            pin,
            inverted: true,
            pull_up: true,
        }
    }

    /// Pin number exists on the chip
    pub const fn is_valid(&self) -> bool {
        self.pin < GPIO_COUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(
            PinConfig::new(4),
            PinConfig {
                pin: 4,
                inverted: false,
                pull_up: false
            }
        );
        assert!(PinConfig::inverted(4).inverted);
        let button = PinConfig::active_low_with_pullup(7);
        assert!(button.inverted && button.pull_up);
    }

    #[test]
    fn test_pin_range() {
        assert!(PinConfig::new(0).is_valid());
        assert!(PinConfig::new(29).is_valid());
        assert!(!PinConfig::new(30).is_valid());
    }
}
