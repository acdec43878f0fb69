//! Actuator output code
//!
//! One byte drives every actuator: bits 0-4 select the energized stepper
//! winding(s) and bit 5 requests the washer pump.

/// Mask of the five winding lines
pub const WINDING_MASK: u8 = 0b0001_1111;

/// Auxiliary (pump) request bit
pub const AUX_BIT: u8 = 0b0010_0000;

/// Number of winding lines driven by an output code
pub const WINDING_COUNT: usize = 5;

/// Code written to the actuator interface on every loop iteration
///
/// The aux bit is a request to *pulse* the pump: the actuator layer toggles
/// its physical output on every write that carries it (see
/// [`crate::actuator::ToggleOnWrite`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutputCode(u8);

impl OutputCode {
    /// Everything off
    pub const OFF: Self = Self(0);

    /// Windings only, pump idle
    pub const fn plain(windings: u8) -> Self {
        Self(windings & WINDING_MASK)
    }

    /// Windings plus a pump pulse request
    pub const fn pulse(windings: u8) -> Self {
        Self((windings & WINDING_MASK) | AUX_BIT)
    }

    /// Build from a raw byte; bits above the aux bit are dropped
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & (WINDING_MASK | AUX_BIT))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Winding pattern (bits 0-4)
    pub const fn windings(self) -> u8 {
        self.0 & WINDING_MASK
    }

    /// Pump pulse requested
    pub const fn aux(self) -> bool {
        self.0 & AUX_BIT != 0
    }

    /// Whether winding line `line` (0-4) is energized
    pub const fn winding(self, line: usize) -> bool {
        line < WINDING_COUNT && self.0 & (1 << line) != 0
    }

    /// Same windings with the aux bit cleared
    pub const fn without_aux(self) -> Self {
        Self(self.0 & WINDING_MASK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_pulse() {
        let plain = OutputCode::plain(4);
        assert_eq!(plain.bits(), 4);
        assert!(!plain.aux());

        let pulse = OutputCode::pulse(4);
        assert_eq!(pulse.bits(), 4 + 32);
        assert!(pulse.aux());
        assert_eq!(pulse.windings(), 4);
        assert_eq!(pulse.without_aux(), plain);
    }

    #[test]
    fn test_winding_lines() {
        let code = OutputCode::pulse(16);
        assert!(code.winding(4));
        assert!(!code.winding(0));
        // The aux bit is not a winding line
        assert!(!code.winding(5));
    }

    #[test]
    fn test_from_bits_masks() {
        assert_eq!(OutputCode::from_bits(0xFF).bits(), 0x3F);
        assert_eq!(OutputCode::plain(0xFF).bits(), 0x1F);
    }
}
