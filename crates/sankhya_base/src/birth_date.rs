//! Validated `YYYYMMDD` birth date and positional digit access.
//!
//! [`BirthDate`] is the single point of input validation. Calculators never
//! slice strings themselves; they name a [`Segment`] and ask for its digits,
//! digit sum, or integer value.

use std::fmt::{Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::error::DateError;

/// Number of digits in a `YYYYMMDD` date.
pub const DATE_DIGITS: usize = 8;

/// A fixed index range of the 8-digit date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// `[0:8]`, all eight digits.
    Full,
    /// `[0:4]`, the year.
    Year,
    /// `[4:6]`, the month.
    Month,
    /// `[6:8]`, the day.
    Day,
    /// `[4:8]`, month and day.
    MonthDay,
    /// `[2:4]`, last two digits of the year.
    YearTail,
    /// `[1:3]`, middle two digits of the year.
    YearMiddle,
}

impl Segment {
    /// Index range into the 8-digit date.
    pub const fn range(self) -> Range<usize> {
        match self {
            Self::Full => 0..8,
            Self::Year => 0..4,
            Self::Month => 4..6,
            Self::Day => 6..8,
            Self::MonthDay => 4..8,
            Self::YearTail => 2..4,
            Self::YearMiddle => 1..3,
        }
    }
}

/// A birth date validated as a real calendar date in 0001..=9999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate {
    digits: [u8; DATE_DIGITS],
}

impl BirthDate {
    /// Parse the strict 8-digit `YYYYMMDD` form.
    pub fn parse(raw: &str) -> Result<Self, DateError> {
        let len = raw.chars().count();
        if len != DATE_DIGITS {
            return Err(DateError::Length { len });
        }
        let mut digits = [0u8; DATE_DIGITS];
        for (position, (c, slot)) in raw.chars().zip(digits.iter_mut()).enumerate() {
            match c.to_digit(10) {
                Some(d) if c.is_ascii_digit() => *slot = d as u8,
                _ => return Err(DateError::NonDigit { position, found: c }),
            }
        }
        let year = segment_value(&digits, Segment::Year) as i32;
        let month = segment_value(&digits, Segment::Month);
        let day = segment_value(&digits, Segment::Day);
        Self::from_ymd(year, month, day)
    }

    /// Strip every non-digit character, then parse strictly.
    ///
    /// Accepts separated forms such as `1990-01-01` or `1990/01/01`.
    pub fn parse_lenient(raw: &str) -> Result<Self, DateError> {
        let cleaned: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
        Self::parse(&cleaned)
    }

    /// Build from calendar components.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        if !(1..=9999).contains(&year) {
            return Err(DateError::YearOutOfRange { year });
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(DateError::InvalidCalendarDate { year, month, day })?;
        Ok(Self::from_naive(date))
    }

    fn from_naive(date: NaiveDate) -> Self {
        let (year, month, day) = (date.year() as u32, date.month(), date.day());
        let mut digits = [0u8; DATE_DIGITS];
        let packed = year * 10_000 + month * 100 + day;
        let mut rest = packed;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % 10) as u8;
            rest /= 10;
        }
        Self { digits }
    }

    /// All eight digits in `YYYYMMDD` order.
    pub fn digits(&self) -> &[u8; DATE_DIGITS] {
        &self.digits
    }

    /// Digits of one segment.
    pub fn segment(&self, segment: Segment) -> &[u8] {
        &self.digits[segment.range()]
    }

    /// Sum of the digits of one segment.
    pub fn digit_sum(&self, segment: Segment) -> u32 {
        sankhya_math::sum_digits(self.segment(segment))
    }

    /// Segment read as a decimal integer (leading zeros allowed).
    pub fn value(&self, segment: Segment) -> u32 {
        segment_value(&self.digits, segment)
    }

    /// Calendar year (1..=9999).
    pub fn year(&self) -> u32 {
        self.value(Segment::Year)
    }

    /// Calendar month (1..=12).
    pub fn month(&self) -> u32 {
        self.value(Segment::Month)
    }

    /// Day of month (1..=31).
    pub fn day(&self) -> u32 {
        self.value(Segment::Day)
    }
}

fn segment_value(digits: &[u8; DATE_DIGITS], segment: Segment) -> u32 {
    digits[segment.range()]
        .iter()
        .fold(0, |acc, &d| acc * 10 + u32::from(d))
}

impl Display for BirthDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for d in self.digits {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

impl FromStr for BirthDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for BirthDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> BirthDate {
        BirthDate::parse(s).unwrap()
    }

    #[test]
    fn parse_valid() {
        let d = date("19900101");
        assert_eq!(d.digits(), &[1, 9, 9, 0, 0, 1, 0, 1]);
        assert_eq!(d.year(), 1990);
        assert_eq!(d.month(), 1);
        assert_eq!(d.day(), 1);
    }

    #[test]
    fn parse_feb_30_rejected() {
        assert_eq!(
            BirthDate::parse("20230230"),
            Err(DateError::InvalidCalendarDate { year: 2023, month: 2, day: 30 })
        );
    }

    #[test]
    fn parse_leap_days() {
        assert!(BirthDate::parse("20240229").is_ok());
        assert!(BirthDate::parse("20000229").is_ok());
        assert!(BirthDate::parse("19000229").is_err());
        assert!(BirthDate::parse("20230229").is_err());
    }

    #[test]
    fn parse_month_out_of_range() {
        assert!(matches!(
            BirthDate::parse("19901301"),
            Err(DateError::InvalidCalendarDate { month: 13, .. })
        ));
        assert!(matches!(
            BirthDate::parse("19900001"),
            Err(DateError::InvalidCalendarDate { month: 0, .. })
        ));
    }

    #[test]
    fn parse_day_zero_rejected() {
        assert!(matches!(
            BirthDate::parse("19900100"),
            Err(DateError::InvalidCalendarDate { day: 0, .. })
        ));
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(BirthDate::parse("1990011"), Err(DateError::Length { len: 7 }));
        assert_eq!(BirthDate::parse("199001011"), Err(DateError::Length { len: 9 }));
        assert_eq!(BirthDate::parse(""), Err(DateError::Length { len: 0 }));
    }

    #[test]
    fn parse_non_digit() {
        assert_eq!(
            BirthDate::parse("1990O101"),
            Err(DateError::NonDigit { position: 4, found: 'O' })
        );
        // Strict form rejects separators even when stripping would succeed.
        assert!(matches!(
            BirthDate::parse("1990-1-1"),
            Err(DateError::NonDigit { position: 4, found: '-' })
        ));
    }

    #[test]
    fn parse_non_ascii_digit() {
        // Full-width digit one is numeric but not ASCII.
        assert!(matches!(
            BirthDate::parse("1990010\u{FF11}"),
            Err(DateError::NonDigit { position: 7, .. })
        ));
    }

    #[test]
    fn year_zero_rejected() {
        assert_eq!(
            BirthDate::parse("00000101"),
            Err(DateError::YearOutOfRange { year: 0 })
        );
    }

    #[test]
    fn lenient_strips_separators() {
        assert_eq!(BirthDate::parse_lenient("1990-01-01").unwrap(), date("19900101"));
        assert_eq!(BirthDate::parse_lenient(" 1979/06/19 ").unwrap(), date("19790619"));
    }

    #[test]
    fn lenient_still_validates() {
        assert!(BirthDate::parse_lenient("2023-02-30").is_err());
        assert_eq!(
            BirthDate::parse_lenient("1990-1-1"),
            Err(DateError::Length { len: 6 })
        );
    }

    #[test]
    fn segments() {
        let d = date("19790619");
        assert_eq!(d.segment(Segment::Year), &[1, 9, 7, 9]);
        assert_eq!(d.segment(Segment::MonthDay), &[0, 6, 1, 9]);
        assert_eq!(d.value(Segment::YearTail), 79);
        assert_eq!(d.value(Segment::YearMiddle), 97);
        assert_eq!(d.value(Segment::Month), 6);
        assert_eq!(d.digit_sum(Segment::Full), 42);
        assert_eq!(d.digit_sum(Segment::MonthDay), 16);
    }

    #[test]
    fn from_ymd_matches_parse() {
        assert_eq!(BirthDate::from_ymd(1979, 6, 19).unwrap(), date("19790619"));
        assert_eq!(BirthDate::from_ymd(10, 1, 5).unwrap(), date("00100105"));
    }

    #[test]
    fn from_ymd_rejects_out_of_range_year() {
        assert_eq!(
            BirthDate::from_ymd(10_000, 1, 1),
            Err(DateError::YearOutOfRange { year: 10_000 })
        );
        assert_eq!(
            BirthDate::from_ymd(-5, 1, 1),
            Err(DateError::YearOutOfRange { year: -5 })
        );
    }

    #[test]
    fn display_round_trips_text() {
        assert_eq!(date("00100105").to_string(), "00100105");
        assert_eq!("19900101".parse::<BirthDate>().unwrap(), date("19900101"));
    }
}
