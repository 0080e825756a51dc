//! Nine-cell digit frequency grid and its analysis.
//!
//! Every non-zero digit of the birth date lands in the cell named for its
//! value, duplicates preserved in scan order. Zeros are dropped. The board
//! is drawn 3x3:
//!
//! ```text
//! thought   spirit    love
//! health    willpower intuition
//! material  talent    wisdom
//! ```

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::birth_date::BirthDate;

/// One of the nine grid cells, one per digit 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Thought,
    Spirit,
    Love,
    Health,
    Willpower,
    Intuition,
    Material,
    Talent,
    Wisdom,
}

/// All buckets in digit order (index 0 = digit 1).
pub const ALL_BUCKETS: [Bucket; 9] = [
    Bucket::Thought,
    Bucket::Spirit,
    Bucket::Love,
    Bucket::Health,
    Bucket::Willpower,
    Bucket::Intuition,
    Bucket::Material,
    Bucket::Talent,
    Bucket::Wisdom,
];

/// Board layout, row by row.
pub const GRID_LAYOUT: [[Bucket; 3]; 3] = [
    [Bucket::Thought, Bucket::Spirit, Bucket::Love],
    [Bucket::Health, Bucket::Willpower, Bucket::Intuition],
    [Bucket::Material, Bucket::Talent, Bucket::Wisdom],
];

impl Bucket {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thought => "thought",
            Self::Spirit => "spirit",
            Self::Love => "love",
            Self::Health => "health",
            Self::Willpower => "willpower",
            Self::Intuition => "intuition",
            Self::Material => "material",
            Self::Talent => "talent",
            Self::Wisdom => "wisdom",
        }
    }

    /// The digit this bucket collects.
    pub const fn digit(self) -> u8 {
        self as u8 + 1
    }

    /// Bucket for a digit 1..=9; `None` for 0 and anything above 9.
    pub fn from_digit(digit: u8) -> Option<Self> {
        ALL_BUCKETS.get(usize::from(digit).checked_sub(1)?).copied()
    }
}

/// Digit occurrences per bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    cells: [Vec<u8>; 9],
}

impl Grid {
    /// Occurrences in a bucket, in scan order.
    pub fn occurrences(&self, bucket: Bucket) -> &[u8] {
        &self.cells[bucket as usize]
    }

    pub fn count(&self, bucket: Bucket) -> usize {
        self.cells[bucket as usize].len()
    }

    pub fn is_empty(&self, bucket: Bucket) -> bool {
        self.cells[bucket as usize].is_empty()
    }

    /// Total occurrences across all buckets.
    pub fn total(&self) -> usize {
        self.cells.iter().map(Vec::len).sum()
    }

    fn push(&mut self, digit: u8) {
        if let Some(bucket) = Bucket::from_digit(digit) {
            self.cells[bucket as usize].push(digit);
        }
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_BUCKETS.len()))?;
        for bucket in ALL_BUCKETS {
            map.serialize_entry(bucket.name(), self.occurrences(bucket))?;
        }
        map.end()
    }
}

/// Scan the date's digits into a grid.
pub fn build_grid(date: &BirthDate) -> Grid {
    let mut grid = Grid::default();
    for &d in date.digits() {
        grid.push(d);
    }
    grid
}

/// A fixed line of three buckets, satisfied when all three are non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GridLine {
    ThoughtWillpowerWisdom,
    SpiritWillpowerIntuition,
    LoveWillpowerMaterial,
    ThoughtSpiritLove,
    HealthWillpowerTalent,
}

pub const ALL_GRID_LINES: [GridLine; 5] = [
    GridLine::ThoughtWillpowerWisdom,
    GridLine::SpiritWillpowerIntuition,
    GridLine::LoveWillpowerMaterial,
    GridLine::ThoughtSpiritLove,
    GridLine::HealthWillpowerTalent,
];

impl GridLine {
    pub const fn buckets(self) -> [Bucket; 3] {
        use Bucket::*;
        match self {
            Self::ThoughtWillpowerWisdom => [Thought, Willpower, Wisdom],
            Self::SpiritWillpowerIntuition => [Spirit, Willpower, Intuition],
            Self::LoveWillpowerMaterial => [Love, Willpower, Material],
            Self::ThoughtSpiritLove => [Thought, Spirit, Love],
            Self::HealthWillpowerTalent => [Health, Willpower, Talent],
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::ThoughtWillpowerWisdom => {
                "Thought-Willpower-Wisdom line: strong powers of thought and decision"
            }
            Self::SpiritWillpowerIntuition => {
                "Spirit-Willpower-Intuition line: keen intuition and a strong spiritual will"
            }
            Self::LoveWillpowerMaterial => {
                "Love-Willpower-Material line: emotional and material life in balance"
            }
            Self::ThoughtSpiritLove => {
                "Thought-Spirit-Love line: an emotional life both rational and spiritual"
            }
            Self::HealthWillpowerTalent => {
                "Health-Willpower-Talent line: abundant energy for developing talents"
            }
        }
    }

    pub fn is_satisfied(self, grid: &Grid) -> bool {
        self.buckets().iter().all(|&b| !grid.is_empty(b))
    }
}

/// A bucket together with its occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BucketCount {
    pub bucket: Bucket,
    pub count: usize,
}

/// Shown when there are no strengths.
pub const NO_STRENGTHS: &str = "digits are evenly spread";
/// Shown when there are no weaknesses.
pub const NO_WEAKNESSES: &str = "no obvious weakness";
/// Shown when no line is satisfied.
pub const NO_LINES: &str = "no special line";

/// Strengths, weaknesses and satisfied lines of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridAnalysis {
    /// Buckets with two or more occurrences.
    pub strengths: Vec<BucketCount>,
    /// Buckets with no occurrences.
    pub weaknesses: Vec<Bucket>,
    /// Satisfied lines, in fixed order.
    pub connections: Vec<GridLine>,
}

impl GridAnalysis {
    pub fn strength_lines(&self) -> Vec<String> {
        self.strengths
            .iter()
            .map(|s| {
                let name = s.bucket.name();
                format!("{name} ({}x): particularly prominent in {name}", s.count)
            })
            .collect()
    }

    pub fn weakness_lines(&self) -> Vec<String> {
        self.weaknesses
            .iter()
            .map(|b| format!("{0}: needs more effort in {0}", b.name()))
            .collect()
    }

    pub fn connection_lines(&self) -> Vec<&'static str> {
        self.connections.iter().map(|l| l.description()).collect()
    }
}

/// Derive strengths, weaknesses and lines from a grid.
pub fn analyze(grid: &Grid) -> GridAnalysis {
    let strengths = ALL_BUCKETS
        .iter()
        .map(|&bucket| BucketCount {
            bucket,
            count: grid.count(bucket),
        })
        .filter(|bc| bc.count >= 2)
        .collect();
    let weaknesses = ALL_BUCKETS
        .iter()
        .copied()
        .filter(|&b| grid.is_empty(b))
        .collect();
    let connections = ALL_GRID_LINES
        .iter()
        .copied()
        .filter(|l| l.is_satisfied(grid))
        .collect();
    GridAnalysis {
        strengths,
        weaknesses,
        connections,
    }
}
