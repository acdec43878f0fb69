//! Input, output and timing traits

use crate::fsm::{InputVector, OutputCode};

/// Source of the 2-bit button vector
pub trait ButtonInput {
    /// Sample both buttons
    ///
    /// Must not block and must not have side effects on the buttons.
    /// Takes `&mut self` because pin reads on some HALs require it.
    fn read_input(&mut self) -> InputVector;
}

/// Sink for the combined winding/pump output code
///
/// Implementations must honor the pump pulse contract: every write of a
/// code with the aux bit set toggles the physical pump output, so holding
/// a pulse state (which writes the same code over and over) produces a
/// square wave rather than a steady level. Hardware with a native toggle
/// can implement this directly; level-only hardware should go through
/// [`crate::actuator::ToggleOnWrite`].
pub trait ActuatorOutput {
    fn write_output(&mut self, code: OutputCode);
}

/// Blocking delay measured in base time quanta
pub trait Dwell {
    /// Block for `units` quanta
    ///
    /// Always runs to completion; there is no way to cut a dwell short.
    fn wait(&mut self, units: u32);
}

/// Plain level-set output primitive
///
/// Writing the same levels twice leaves every line unchanged.
pub trait LevelPort {
    /// Drive the winding lines (bits 0-4 of `windings`) and the pump line
    fn set_levels(&mut self, windings: u8, aux: bool);
}

impl<T: ButtonInput + ?Sized> ButtonInput for &mut T {
    fn read_input(&mut self) -> InputVector {
        (**self).read_input()
    }
}

impl<T: ActuatorOutput + ?Sized> ActuatorOutput for &mut T {
    fn write_output(&mut self, code: OutputCode) {
        (**self).write_output(code)
    }
}

impl<T: Dwell + ?Sized> Dwell for &mut T {
    fn wait(&mut self, units: u32) {
        (**self).wait(units)
    }
}

impl<T: LevelPort + ?Sized> LevelPort for &mut T {
    fn set_levels(&mut self, windings: u8, aux: bool) {
        (**self).set_levels(windings, aux)
    }
}
