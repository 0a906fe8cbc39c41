//! Per-index classification markers.

use std::fmt;

/// Classification of a single index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Multiple of 15.
    FizzBuzz,
    /// Multiple of 3 but not of 15.
    Fizz,
    /// Multiple of 5 but not of 15.
    Buzz,
    /// Any other index, carried as-is.
    Number(usize),
}

impl Marker {
    pub const FIZZBUZZ_BYTE: u8 = b'*';
    pub const FIZZ_BYTE: u8 = b'F';
    pub const BUZZ_BYTE: u8 = b'B';

    /// Single-byte cell value for this marker.
    ///
    /// `Number` stores the raw numeric value, not its decimal text. Values
    /// above 255 keep only their low byte.
    ///
    /// ```
    /// use fizzbuzz_classify::Marker;
    ///
    /// assert_eq!(Marker::Fizz.as_byte(), b'F');
    /// assert_eq!(Marker::Number(7).as_byte(), 7);
    /// assert_eq!(Marker::Number(258).as_byte(), 2);
    /// ```
    pub fn as_byte(self) -> u8 {
        match self {
            Self::FizzBuzz => Self::FIZZBUZZ_BYTE,
            Self::Fizz => Self::FIZZ_BYTE,
            Self::Buzz => Self::BUZZ_BYTE,
            Self::Number(n) => n.to_le_bytes()[0],
        }
    }

    pub fn is_number(self) -> bool {
        matches!(self, Self::Number(_))
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FizzBuzz => f.write_str("*"),
            Self::Fizz => f.write_str("F"),
            Self::Buzz => f.write_str("B"),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}
