//! The full reading bundle: every indicator, its trace and its text.

use serde::Serialize;
use tracing::{debug, trace};

use sankhya_base::{
    ALL_CONNECTION_KINDS, ALL_TAROT_POSITIONS, BirthDate, Ceiling, Coincidence, ConnectionKind,
    ConnectionTriad, Grid, GridAnalysis, Segment, SpreadReading, TarotCard, TarotPosition,
    ZiweiTriad, ZodiacResult, analyze, build_grid, coincidences, connection_meaning,
    connection_triad, cycle_number, life_meaning, life_number, natal_tarot, reduce_steps,
    tarot_card, tarot_spreads, year_meaning, year_tarot, ziwei_meaning, ziwei_triad, zodiac,
    zodiac_meaning,
};

use crate::config::ReadingConfig;
use crate::error::SankhyaError;

/// Life-path number with its reduction trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LifeReading {
    pub number: u32,
    /// Digit total followed by each reduction step.
    pub steps: Vec<u32>,
    pub meaning: &'static str,
}

/// Cycle number and year tarot for one target year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearOutlook {
    pub year: i32,
    pub cycle_number: u32,
    pub cycle_meaning: &'static str,
    pub tarot: TarotCard,
}

/// A number with the sentence it maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Interpreted {
    pub number: u32,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZiweiReading {
    pub triad: ZiweiTriad,
    pub main: &'static str,
    pub sub: &'static str,
    pub destiny: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConnectionReading {
    pub triad: ConnectionTriad,
    pub meanings: Vec<(ConnectionKind, Interpreted)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZodiacReading {
    pub result: ZodiacResult,
    pub meaning: &'static str,
}

/// One natal position with its card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PositionedCard {
    pub position: TarotPosition,
    pub card: TarotCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TarotReading {
    pub natal: Vec<PositionedCard>,
    pub spreads: Vec<SpreadReading>,
    pub coincidences: Vec<Coincidence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridReading {
    pub grid: Grid,
    pub analysis: GridAnalysis,
}

/// Everything computed for one birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub birth_date: BirthDate,
    pub life: LifeReading,
    pub outlook: Vec<YearOutlook>,
    pub ziwei: ZiweiReading,
    pub connection: ConnectionReading,
    pub zodiac: ZodiacReading,
    pub tarot: TarotReading,
    pub grid: GridReading,
}

/// Parse `raw` and assemble a full reading.
///
/// Parsing is the only step that can fail; once the date is valid every
/// indicator is produced.
pub fn reading(raw: &str, config: &ReadingConfig) -> Result<Reading, SankhyaError> {
    config.validate()?;
    let parsed = if config.lenient {
        BirthDate::parse_lenient(raw)
    } else {
        BirthDate::parse(raw)
    };
    let date = parsed.inspect_err(|e| debug!(input = raw, error = %e, "birth date rejected"))?;
    Ok(reading_for(&date, config))
}

/// Assemble a full reading for an already-validated date.
pub fn reading_for(date: &BirthDate, config: &ReadingConfig) -> Reading {
    debug!(date = %date, year = config.year, horizon = config.horizon, "assembling reading");

    let life = life_reading(date);
    trace!(number = life.number, steps = ?life.steps, "life number");

    let outlook = config.years().map(|year| year_outlook(date, year)).collect();

    let triad = ziwei_triad(date);
    let ziwei = ZiweiReading {
        triad,
        main: ziwei_meaning(triad.main),
        sub: ziwei_meaning(triad.sub),
        destiny: ziwei_meaning(triad.destiny),
    };

    let triad = connection_triad(date);
    let connection = ConnectionReading {
        triad,
        meanings: ALL_CONNECTION_KINDS
            .iter()
            .map(|&kind| {
                let number = triad.get(kind);
                let meaning = connection_meaning(kind, number);
                (kind, Interpreted { number, meaning })
            })
            .collect(),
    };

    let result = zodiac(date);
    let zodiac = ZodiacReading {
        result,
        meaning: zodiac_meaning(u32::from(result.index)),
    };

    let natal = natal_tarot(date);
    let tarot = TarotReading {
        natal: ALL_TAROT_POSITIONS
            .iter()
            .map(|&position| PositionedCard {
                position,
                card: natal.card(position),
            })
            .collect(),
        spreads: tarot_spreads(&natal),
        coincidences: coincidences(&natal),
    };

    let grid = build_grid(date);
    let analysis = analyze(&grid);
    trace!(
        strengths = analysis.strengths.len(),
        weaknesses = analysis.weaknesses.len(),
        lines = analysis.connections.len(),
        "grid analysed"
    );

    Reading {
        birth_date: *date,
        life,
        outlook,
        ziwei,
        connection,
        zodiac,
        tarot,
        grid: GridReading { grid, analysis },
    }
}

/// Life-path number with the trace from the raw digit total.
pub fn life_reading(date: &BirthDate) -> LifeReading {
    let number = life_number(date);
    LifeReading {
        number,
        steps: reduce_steps(date.digit_sum(Segment::Full), Ceiling::Digit),
        meaning: life_meaning(number),
    }
}

/// Cycle number and year tarot for a single target year.
pub fn year_outlook(date: &BirthDate, year: i32) -> YearOutlook {
    let cycle = cycle_number(date, year);
    YearOutlook {
        year,
        cycle_number: cycle,
        cycle_meaning: year_meaning(cycle),
        tarot: tarot_card(year_tarot(date, year)),
    }
}
