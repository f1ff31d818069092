//! Sudoku value representation.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// A Sudoku value in the range 1-9.
///
/// Invalid values are unrepresentable; conversions from raw integers go
/// through [`Digit::from_value`] (panicking) or [`TryFrom<u8>`] (fallible).
///
/// Serializes as a bare integer 1-9.
///
/// # Examples
///
/// ```
/// use pencilmark_core::Digit;
///
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
/// assert_eq!(digit.value(), 7);
/// assert_eq!(digit.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Digit {
    /// The value 1.
    D1 = 1,
    /// The value 2.
    D2 = 2,
    /// The value 3.
    D3 = 3,
    /// The value 4.
    D4 = 4,
    /// The value 5.
    D5 = 5,
    /// The value 6.
    D6 = 6,
    /// The value 7.
    D7 = 7,
    /// The value 8.
    D8 = 8,
    /// The value 9.
    D9 = 9,
}

/// Error returned when converting an out-of-range integer to a [`Digit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("digit must be between 1 and 9, got {_0}")]
pub struct TryFromDigitError(#[error(not(source))] pub u8);

impl Digit {
    /// All digits from 1 to 9 in ascending order.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from(value).unwrap_or_else(|e| panic!("{e}"))
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Digit {
    type Error = TryFromDigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::D1),
            2 => Ok(Self::D2),
            3 => Ok(Self::D3),
            4 => Ok(Self::D4),
            5 => Ok(Self::D5),
            6 => Ok(Self::D6),
            7 => Ok(Self::D7),
            8 => Ok(Self::D8),
            9 => Ok(Self::D9),
            _ => Err(TryFromDigitError(value)),
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
