//! Convenience wrapper for the sankhya numerology engine.
//!
//! One call turns a date string into a [`Reading`]: every indicator from
//! `sankhya_base`, each paired with its interpretation, plus the cycle
//! outlook for the configured target years.
//!
//! # Quick start
//!
//! ```rust
//! use sankhya_rs::*;
//!
//! let config = ReadingConfig::for_year(2025);
//! let r = reading("19790619", &config).unwrap();
//! assert_eq!(r.life.number, 6);
//! assert_eq!(r.outlook[0].cycle_number, 7);
//! assert_eq!(r.outlook[0].tarot.name, "Lovers");
//! ```

pub mod config;
pub mod error;
pub mod reading;

// Primary re-exports: `use sankhya_rs::*` covers the common surface.
pub use config::{DEFAULT_HORIZON, ReadingConfig};
pub use error::SankhyaError;
pub use reading::{
    ConnectionReading, GridReading, Interpreted, LifeReading, PositionedCard, Reading,
    TarotReading, YearOutlook, ZiweiReading, ZodiacReading, life_reading, reading, reading_for,
    year_outlook,
};

// Re-export base types so callers don't need to depend on sankhya_base directly.
pub use sankhya_base::{
    BirthDate, Bucket, Coincidence, ConnectionKind, DateError, GRID_LAYOUT, GridLine, NO_LINES,
    NO_STRENGTHS, NO_WEAKNESSES, Spread, TarotCard, TarotPosition, ZodiacSign,
};
