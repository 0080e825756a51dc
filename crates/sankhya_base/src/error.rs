//! Error types for birth-date validation.

use thiserror::Error;

/// Errors from parsing a `YYYYMMDD` birth date.
///
/// This is the only failure in the crate: every calculator and lookup is
/// total over a validated [`BirthDate`](crate::BirthDate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// Input is not exactly 8 characters.
    #[error("expected 8 digits (YYYYMMDD), got {len} characters")]
    Length { len: usize },
    /// A character is not an ASCII digit.
    #[error("non-digit {found:?} at position {position}")]
    NonDigit { position: usize, found: char },
    /// Digits do not form a real calendar date.
    #[error("{year:04}-{month:02}-{day:02} is not a valid calendar date")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    /// Year outside 0001..=9999.
    #[error("year {year} is outside 1..=9999")]
    YearOutOfRange { year: i32 },
}
