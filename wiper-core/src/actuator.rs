//! Pump pulse adapter
//!
//! The table never writes an alternating code: a pulse state writes the
//! same aux-bit code on every pass through the loop. Turning that into a
//! pulsing pump is the actuator layer's job. [`ToggleOnWrite`] does it for
//! ports that can only set levels.

use crate::fsm::OutputCode;
use crate::traits::{ActuatorOutput, LevelPort};

/// [`ActuatorOutput`] over a level-only port
///
/// - A write with the aux bit set flips the pump level and drives it.
/// - A write with the aux bit clear drives the pump low and resets the
///   flip-flop, so the next pulse run starts with the pump on.
/// - Windings are always driven exactly as given.
#[derive(Debug)]
pub struct ToggleOnWrite<P> {
    port: P,
    /// Pump level driven by the last write
    aux_level: bool,
}

impl<P: LevelPort> ToggleOnWrite<P> {
    /// Wrap a level port; the pump is assumed off
    pub fn new(port: P) -> Self {
        Self {
            port,
            aux_level: false,
        }
    }

    /// Pump level currently driven
    pub fn aux_level(&self) -> bool {
        self.aux_level
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn into_inner(self) -> P {
        self.port
    }
}

impl<P: LevelPort> ActuatorOutput for ToggleOnWrite<P> {
    fn write_output(&mut self, code: OutputCode) {
        self.aux_level = code.aux() && !self.aux_level;
        self.port.set_levels(code.windings(), self.aux_level);
    }
}
