//! Western sun sign and its modality number.
//!
//! Twelve fixed date ranges cover the calendar year. Each range starts in
//! one month and ends in the next (Capricorn wraps from December into
//! January), so membership is tested as "on or after the start day in the
//! start month, or on or before the end day in the end month".
//!
//! The number attached to each sign is not unique: the sequence 1..=9 runs
//! from Aries to Sagittarius and restarts at Capricorn.

use serde::Serialize;

use crate::birth_date::BirthDate;

/// The 12 sun signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// Modality number (1..=9), shared between signs.
    pub const fn number(self) -> u8 {
        match self {
            Self::Aries => 1,
            Self::Taurus => 2,
            Self::Gemini => 3,
            Self::Cancer => 4,
            Self::Leo => 5,
            Self::Virgo => 6,
            Self::Libra => 7,
            Self::Scorpio => 8,
            Self::Sagittarius => 9,
            Self::Capricorn => 1,
            Self::Aquarius => 2,
            Self::Pisces => 3,
        }
    }

    /// Date range of the sign.
    pub fn range(self) -> &'static ZodiacRange {
        &ZODIAC_RANGES[self as usize]
    }
}

/// A sign's date range, as `(month, day)` start and end, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZodiacRange {
    pub sign: ZodiacSign,
    pub start: (u32, u32),
    pub end: (u32, u32),
}

impl ZodiacRange {
    /// Whether `(month, day)` falls in this range.
    pub const fn contains(&self, month: u32, day: u32) -> bool {
        (month == self.start.0 && day >= self.start.1) || (month == self.end.0 && day <= self.end.1)
    }
}

/// The 12 ranges in sign order.
pub const ZODIAC_RANGES: [ZodiacRange; 12] = [
    ZodiacRange { sign: ZodiacSign::Aries, start: (3, 21), end: (4, 19) },
    ZodiacRange { sign: ZodiacSign::Taurus, start: (4, 20), end: (5, 20) },
    ZodiacRange { sign: ZodiacSign::Gemini, start: (5, 21), end: (6, 21) },
    ZodiacRange { sign: ZodiacSign::Cancer, start: (6, 22), end: (7, 22) },
    ZodiacRange { sign: ZodiacSign::Leo, start: (7, 23), end: (8, 22) },
    ZodiacRange { sign: ZodiacSign::Virgo, start: (8, 23), end: (9, 22) },
    ZodiacRange { sign: ZodiacSign::Libra, start: (9, 23), end: (10, 23) },
    ZodiacRange { sign: ZodiacSign::Scorpio, start: (10, 24), end: (11, 22) },
    ZodiacRange { sign: ZodiacSign::Sagittarius, start: (11, 23), end: (12, 21) },
    ZodiacRange { sign: ZodiacSign::Capricorn, start: (12, 22), end: (1, 19) },
    ZodiacRange { sign: ZodiacSign::Aquarius, start: (1, 20), end: (2, 18) },
    ZodiacRange { sign: ZodiacSign::Pisces, start: (2, 19), end: (3, 20) },
];

/// Name reported when no range matches.
pub const UNKNOWN_SIGN: &str = "Unknown sign";

/// Sun sign lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacResult {
    /// Modality number 1..=9, or 0 when no range matched.
    pub index: u8,
    pub name: &'static str,
    pub sign: Option<ZodiacSign>,
}

/// First sign whose range contains `(month, day)`.
pub fn zodiac_sign(month: u32, day: u32) -> Option<ZodiacSign> {
    ZODIAC_RANGES
        .iter()
        .find(|r| r.contains(month, day))
        .map(|r| r.sign)
}

/// Sun sign of a birth date.
pub fn zodiac(date: &BirthDate) -> ZodiacResult {
    match zodiac_sign(date.month(), date.day()) {
        Some(sign) => ZodiacResult {
            index: sign.number(),
            name: sign.name(),
            sign: Some(sign),
        },
        None => ZodiacResult {
            index: 0,
            name: UNKNOWN_SIGN,
            sign: None,
        },
    }
}
