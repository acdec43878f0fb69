//! Stepper winding outputs
//!
//! The wiper motor is driven directly from GPIO: one pin per winding line
//! plus the washer pump pin, all set together from one output code.

pub mod pin_bank;

pub use pin_bank::PinBank;
