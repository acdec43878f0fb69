//! Collaborator traits
//!
//! These traits define the interface between the interpreter loop and the
//! platform: one for sampling the buttons, one for driving the actuators,
//! one for timing, plus the raw level port the toggle adapter writes to.

pub mod io;

pub use io::{ActuatorOutput, ButtonInput, Dwell, LevelPort};
