//! Wipe and wash buttons
//!
//! Two momentary buttons on plain GPIO inputs. No debouncing: the raw
//! level at the moment of sampling is what the table sees.

use wiper_core::config::ButtonConfig;
use wiper_core::fsm::InputVector;
use wiper_core::traits::ButtonInput;
use wiper_hal::InputPin;

/// The two buttons, read together as one input vector
pub struct ButtonPair<M, J> {
    /// Wipe button (bit 0)
    minor: M,
    /// Wash button (bit 1)
    major: J,
    minor_active_low: bool,
    major_active_low: bool,
}

impl<M: InputPin, J: InputPin> ButtonPair<M, J> {
    /// Create a button pair
    ///
    /// # Arguments
    /// - `minor`: Wipe button pin
    /// - `major`: Wash button pin
    /// - `config`: Per-button polarity
    pub fn new(minor: M, major: J, config: ButtonConfig) -> Self {
        Self {
            minor,
            major,
            minor_active_low: config.wipe.inverted,
            major_active_low: config.wash.inverted,
        }
    }

    /// Create a button pair where a pressed button reads high
    pub fn new_active_high(minor: M, major: J) -> Self {
        Self::new(minor, major, ButtonConfig::default())
    }

    /// Wipe button currently pressed
    pub fn minor_pressed(&self) -> bool {
        self.minor.is_high() != self.minor_active_low
    }

    /// Wash button currently pressed
    pub fn major_pressed(&self) -> bool {
        self.major.is_high() != self.major_active_low
    }
}

impl<M: InputPin, J: InputPin> ButtonInput for ButtonPair<M, J> {
    fn read_input(&mut self) -> InputVector {
        InputVector::from_buttons(self.minor_pressed(), self.major_pressed())
    }
}
