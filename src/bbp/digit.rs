// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A single base-16 digit.

use std::fmt;

/// One hexadecimal digit of π, always in `0..=15`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexDigit(u8);

impl HexDigit {
    /// Largest digit value.
    pub const MAX: u8 = 15;

    /// Create a digit, or `None` if `value` is not a base-16 digit.
    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(HexDigit(value))
        } else {
            None
        }
    }

    /// Digit obtained by truncating `16 * fraction`.
    ///
    /// `fraction` is expected in `[0, 1]`; a fraction of exactly 1.0 saturates at 15.
    pub(crate) fn from_fraction(fraction: f64) -> Self {
        let scaled = (fraction * 16.0) as u8;
        HexDigit(scaled.min(Self::MAX))
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Lowercase hex character for this digit.
    pub fn to_char(self) -> char {
        char::from_digit(u32::from(self.0), 16).unwrap_or('?')
    }
}

impl From<HexDigit> for u8 {
    fn from(digit: HexDigit) -> u8 {
        digit.0
    }
}

impl From<HexDigit> for f64 {
    fn from(digit: HexDigit) -> f64 {
        digit.as_f64()
    }
}

impl TryFrom<u8> for HexDigit {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        HexDigit::new(value).ok_or(value)
    }
}

impl fmt::Display for HexDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl fmt::LowerHex for HexDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::UpperHex for HexDigit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}
