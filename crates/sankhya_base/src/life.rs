//! Life-path number and annual cycle number.

use sankhya_math::{Ceiling, digit_sum, reduce};

use crate::birth_date::{BirthDate, Segment};

/// Life-path number: all eight digits summed and reduced to 1..=9.
pub fn life_number(date: &BirthDate) -> u32 {
    reduce(date.digit_sum(Segment::Full), Ceiling::Digit)
}

/// Annual cycle number for `year`.
///
/// Digits of the target year plus the digits of the birth month and day,
/// reduced to 1..=9. The year is supplied by the caller; only its magnitude
/// contributes digits.
pub fn cycle_number(date: &BirthDate, year: i32) -> u32 {
    let total = digit_sum(year.unsigned_abs()) + date.digit_sum(Segment::MonthDay);
    reduce(total, Ceiling::Digit)
}
