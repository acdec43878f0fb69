//! RP2040-specific HAL for the wiper controller firmware
//!
//! This crate provides RP2040 implementations of the shared `wiper-hal`
//! traits, plus RP2040-specific functionality:
//!
//! - GPIO wrappers implementing `wiper_hal::{InputPin, OutputPin}`
//! - Dynamic pin allocation for config-driven setup

#![no_std]

pub mod gpio;
pub mod pins;

pub use gpio::{RpInput, RpOutput};
pub use pins::{GpioPool, PinError};

// Re-export shared traits from wiper-hal for convenience
pub use wiper_hal::{InputPin, OutputPin};
