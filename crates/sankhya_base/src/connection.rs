//! Connection triad: innate, life and talent numbers.

use serde::Serialize;

use sankhya_math::{Ceiling, reduce};

use crate::birth_date::{BirthDate, Segment};

/// Sub-kind of a connection number, selecting its meaning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConnectionKind {
    Innate,
    Life,
    Talent,
}

pub const ALL_CONNECTION_KINDS: [ConnectionKind; 3] = [
    ConnectionKind::Innate,
    ConnectionKind::Life,
    ConnectionKind::Talent,
];

impl ConnectionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Innate => "Innate number",
            Self::Life => "Life number",
            Self::Talent => "Talent number",
        }
    }
}

/// The three connection numbers, each in 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectionTriad {
    /// Day digits summed.
    pub innate: u32,
    /// Month digits summed.
    pub life: u32,
    /// Innate plus life.
    pub talent: u32,
}

impl ConnectionTriad {
    pub const fn get(&self, kind: ConnectionKind) -> u32 {
        match kind {
            ConnectionKind::Innate => self.innate,
            ConnectionKind::Life => self.life,
            ConnectionKind::Talent => self.talent,
        }
    }
}

/// Compute the connection triad for a birth date.
pub fn connection_triad(date: &BirthDate) -> ConnectionTriad {
    let innate = reduce(date.digit_sum(Segment::Day), Ceiling::Digit);
    let life = reduce(date.digit_sum(Segment::Month), Ceiling::Digit);
    let talent = reduce(innate + life, Ceiling::Digit);
    ConnectionTriad {
        innate,
        life,
        talent,
    }
}
