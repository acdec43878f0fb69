//! Dwell timing
//!
//! Turns dwell units from the table into a blocking wait on any
//! `embedded-hal` delay.

use embedded_hal::delay::DelayNs;
use wiper_core::config::TimingConfig;
use wiper_core::traits::Dwell;

/// Blocking delay counted in base time quanta
pub struct QuantumDelay<D> {
    delay: D,
    timing: TimingConfig,
}

impl<D: DelayNs> QuantumDelay<D> {
    pub fn new(delay: D, timing: TimingConfig) -> Self {
        Self { delay, timing }
    }

    /// Length of one quantum in milliseconds
    pub fn quantum_ms(&self) -> u32 {
        self.timing.quantum_ms
    }
}

impl<D: DelayNs> Dwell for QuantumDelay<D> {
    fn wait(&mut self, units: u32) {
        self.delay.delay_ms(self.timing.dwell_ms(units));
    }
}
