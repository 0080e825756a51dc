//! Reading configuration.
//!
//! The calculators never consult the clock. The target year is always an
//! explicit input carried here; only [`ReadingConfig::default`] reads the
//! local date to pick "this year".

use chrono::{Datelike, Local};

use crate::error::SankhyaError;

/// Years covered by the outlook when not specified: this year and next.
pub const DEFAULT_HORIZON: u8 = 2;

/// Parameters for assembling a [`Reading`](crate::Reading).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingConfig {
    /// First year of the outlook.
    pub year: i32,
    /// Number of consecutive outlook years, starting at `year`.
    pub horizon: u8,
    /// Strip separators (`1990-01-01`) before strict parsing.
    pub lenient: bool,
}

impl ReadingConfig {
    /// Outlook for `year` and the year after, strict parsing.
    pub fn for_year(year: i32) -> Self {
        Self {
            year,
            horizon: DEFAULT_HORIZON,
            lenient: false,
        }
    }

    pub fn with_horizon(mut self, horizon: u8) -> Self {
        self.horizon = horizon;
        self
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    /// Years in the outlook, in order. Stops early rather than past `i32::MAX`.
    pub fn years(&self) -> impl Iterator<Item = i32> + use<> {
        let start = self.year;
        (0..i32::from(self.horizon)).map_while(move |offset| start.checked_add(offset))
    }

    pub(crate) fn validate(&self) -> Result<(), SankhyaError> {
        if self.horizon == 0 {
            return Err(SankhyaError::EmptyHorizon);
        }
        Ok(())
    }
}

impl Default for ReadingConfig {
    /// Outlook starting at the current local year.
    fn default() -> Self {
        Self::for_year(Local::now().year())
    }
}
