//! Numerology indicators derived from a single calendar date.
//!
//! This crate provides:
//! - `YYYYMMDD` validation and positional digit access ([`BirthDate`])
//! - Life-path and annual cycle numbers
//! - Eight tarot-number variants over a 22-card major arcana catalog,
//!   plus the fixed natal spreads
//! - Ziwei and connection triads
//! - Sun sign with its modality number
//! - The nine-cell digit grid with strengths, weaknesses and lines
//! - Static interpretation tables for every indicator
//!
//! Every calculator is a pure function of an already-validated
//! [`BirthDate`]; the only fallible step is parsing.

pub mod birth_date;
pub mod connection;
pub mod error;
pub mod grid;
pub mod life;
pub mod meaning;
pub mod spread;
pub mod tarot;
pub mod ziwei;
pub mod zodiac;

pub use birth_date::{BirthDate, DATE_DIGITS, Segment};
pub use connection::{ALL_CONNECTION_KINDS, ConnectionKind, ConnectionTriad, connection_triad};
pub use error::DateError;
pub use grid::{
    ALL_BUCKETS, ALL_GRID_LINES, Bucket, BucketCount, GRID_LAYOUT, Grid, GridAnalysis, GridLine,
    NO_LINES, NO_STRENGTHS, NO_WEAKNESSES, analyze, build_grid,
};
pub use life::{cycle_number, life_number};
pub use meaning::{
    MeaningKind, NO_MEANING, connection_meaning, life_meaning, meaning, year_meaning,
    ziwei_meaning, zodiac_meaning,
};
pub use spread::{
    ALL_COINCIDENCES, ALL_SPREADS, Coincidence, Spread, SpreadReading, coincidences, tarot_spreads,
};
pub use tarot::{
    ALL_ARCANA, ALL_TAROT_POSITIONS, Arcana, NatalTarot, TarotCard, TarotPosition, UNKNOWN_CARD,
    acquired_tarot, innate_tarot, life_tarot, natal_tarot, personality_tarot, shadow_tarot,
    soul_tarot, talent_tarot, tarot_card, year_tarot,
};
pub use ziwei::{ZiweiTriad, ziwei_triad};
pub use zodiac::{
    ALL_SIGNS, UNKNOWN_SIGN, ZODIAC_RANGES, ZodiacRange, ZodiacResult, ZodiacSign, zodiac,
    zodiac_sign,
};

pub use sankhya_math::{Ceiling, reduce, reduce_steps};
