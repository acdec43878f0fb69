//! Button input vector
//!
//! The two momentary buttons are sampled once per loop iteration and packed
//! into a 2-bit vector that indexes a state's transition row.

/// Bit set while the wipe (minor) button is pressed
pub const MINOR_BIT: u8 = 0b01;

/// Bit set while the wash (major) button is pressed
pub const MAJOR_BIT: u8 = 0b10;

const INPUT_MASK: u8 = MINOR_BIT | MAJOR_BIT;

/// Number of distinct input vectors, and so the width of a transition row
pub const INPUT_COMBINATIONS: usize = 4;

/// Sampled level of both buttons
///
/// The value is always within `0..=3`. Raw port readings are masked on the
/// way in, so an out-of-range reading can never reach the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputVector(u8);

impl InputVector {
    /// Neither button pressed
    pub const NONE: Self = Self(0);
    /// Wipe button only
    pub const MINOR: Self = Self(MINOR_BIT);
    /// Wash button only
    pub const MAJOR: Self = Self(MAJOR_BIT);
    /// Both buttons held
    pub const BOTH: Self = Self(MINOR_BIT | MAJOR_BIT);

    /// Every input vector, in index order
    pub const ALL: [Self; INPUT_COMBINATIONS] =
        [Self::NONE, Self::MINOR, Self::MAJOR, Self::BOTH];

    /// Build from a raw port reading, discarding everything above bit 1
    pub const fn from_bits(raw: u8) -> Self {
        Self(raw & INPUT_MASK)
    }

    /// Build from the two button levels
    pub const fn from_buttons(minor: bool, major: bool) -> Self {
        let mut bits = 0;
        if minor {
            bits |= MINOR_BIT;
        }
        if major {
            bits |= MAJOR_BIT;
        }
        Self(bits)
    }

    /// Packed 2-bit value
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Column in a transition row
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Wipe button pressed
    pub const fn minor(self) -> bool {
        self.0 & MINOR_BIT != 0
    }

    /// Wash button pressed
    pub const fn major(self) -> bool {
        self.0 & MAJOR_BIT != 0
    }
}

impl From<u8> for InputVector {
    fn from(raw: u8) -> Self {
        Self::from_bits(raw)
    }
}
