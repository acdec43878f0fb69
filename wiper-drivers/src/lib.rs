//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in wiper-core, written against the wiper-hal pin traits:
//!
//! - Button pair (wipe + wash) producing the input vector
//! - Stepper winding and pump pin bank (level port)
//! - Quantum delay over any `embedded-hal` blocking delay

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod button;
pub mod stepper;
pub mod timing;

pub use button::ButtonPair;
pub use stepper::PinBank;
pub use timing::QuantumDelay;
