//! Board-agnostic core logic for the wiper controller firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Transition table and the wiper sweep it encodes
//! - Interpreter loop (emit, dwell, sample, transition)
//! - Collaborator traits for buttons, actuators and timing
//! - Pump pulse adapter for level-only outputs
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod actuator;
pub mod config;
pub mod fsm;
pub mod traits;
