//! Major arcana catalog and the tarot-number calculators.
//!
//! Each calculator derives a number from fixed digit segments of the birth
//! date and reduces it under the 22 ceiling. A reduction can still end at 0
//! (a product with a `00` segment, or a year such as 0010); 0 is folded onto
//! 22, the Fool, which is the card traditionally numbered 0. Every tarot
//! result is therefore in 1..=22.

use serde::Serialize;

use sankhya_math::{Ceiling, digit_sum, reduce};

use crate::birth_date::{BirthDate, Segment};
use crate::meaning::NO_MEANING;

/// The 22 major arcana, numbered 1..=22 with the Fool last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Arcana {
    Magician,
    HighPriestess,
    Empress,
    Emperor,
    Hierophant,
    Lovers,
    Chariot,
    Strength,
    Hermit,
    WheelOfFortune,
    Justice,
    HangedMan,
    Death,
    Temperance,
    Devil,
    Tower,
    Star,
    Moon,
    Sun,
    Judgement,
    World,
    Fool,
}

/// All 22 arcana in catalog order (index 0 = number 1).
pub const ALL_ARCANA: [Arcana; 22] = [
    Arcana::Magician,
    Arcana::HighPriestess,
    Arcana::Empress,
    Arcana::Emperor,
    Arcana::Hierophant,
    Arcana::Lovers,
    Arcana::Chariot,
    Arcana::Strength,
    Arcana::Hermit,
    Arcana::WheelOfFortune,
    Arcana::Justice,
    Arcana::HangedMan,
    Arcana::Death,
    Arcana::Temperance,
    Arcana::Devil,
    Arcana::Tower,
    Arcana::Star,
    Arcana::Moon,
    Arcana::Sun,
    Arcana::Judgement,
    Arcana::World,
    Arcana::Fool,
];

const ARCANA_NAMES: [&str; 22] = [
    "Magician",
    "High Priestess",
    "Empress",
    "Emperor",
    "Hierophant",
    "Lovers",
    "Chariot",
    "Strength",
    "Hermit",
    "Wheel of Fortune",
    "Justice",
    "Hanged Man",
    "Death",
    "Temperance",
    "Devil",
    "Tower",
    "Star",
    "Moon",
    "Sun",
    "Judgement",
    "World",
    "Fool",
];

const ARCANA_MEANINGS: [&str; 22] = [
    "creativity, initiative, new beginnings",
    "intuition, wisdom, mystery",
    "abundance, creativity, nurturing",
    "authority, stability, leadership",
    "faith, tradition, guidance",
    "choice, harmony, love",
    "willpower, victory, progress",
    "courage, patience, inner strength",
    "wisdom, introspection, guidance",
    "change, opportunity, fate",
    "balance, fairness, truth",
    "sacrifice, waiting, a new perspective",
    "endings, transformation, rebirth",
    "balance, moderation, patience",
    "bondage, temptation, attachment",
    "upheaval, awakening, liberation",
    "hope, inspiration, guidance",
    "intuition, illusion, the subconscious",
    "joy, vitality, success",
    "awakening, rebirth, a calling",
    "completion, fulfilment, integration",
    "innocence, adventure, freedom",
];

impl Arcana {
    /// Card number (Magician=1 .. Fool=22).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// English card name.
    pub fn name(self) -> &'static str {
        ARCANA_NAMES[self as usize]
    }

    /// Keywords for the card.
    pub fn meaning(self) -> &'static str {
        ARCANA_MEANINGS[self as usize]
    }

    /// Card for a number in 1..=22.
    pub fn from_number(n: u32) -> Option<Self> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        ALL_ARCANA.get(idx).copied()
    }
}

/// A looked-up card: number, name and meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TarotCard {
    pub number: u32,
    pub name: &'static str,
    pub meaning: &'static str,
}

/// Name used for numbers outside the catalog.
pub const UNKNOWN_CARD: &str = "Unknown";

/// Look up a card by number. Numbers outside 1..=22 yield the sentinel card.
pub fn tarot_card(number: u32) -> TarotCard {
    match Arcana::from_number(number) {
        Some(a) => TarotCard {
            number,
            name: a.name(),
            meaning: a.meaning(),
        },
        None => TarotCard {
            number,
            name: UNKNOWN_CARD,
            meaning: NO_MEANING,
        },
    }
}

/// Reduce under the 22 ceiling, folding 0 onto the Fool.
fn arcana_number(total: u32) -> u32 {
    match reduce(total, Ceiling::Arcana) {
        0 => u32::from(Arcana::Fool.number()),
        n => n,
    }
}

/// Life tarot: all eight digits.
pub fn life_tarot(date: &BirthDate) -> u32 {
    arcana_number(date.digit_sum(Segment::Full))
}

/// Soul tarot: digits of month and day.
pub fn soul_tarot(date: &BirthDate) -> u32 {
    arcana_number(date.digit_sum(Segment::MonthDay))
}

/// Talent tarot: digits of the last two year digits plus digits of the day.
pub fn talent_tarot(date: &BirthDate) -> u32 {
    arcana_number(date.digit_sum(Segment::YearTail) + date.digit_sum(Segment::Day))
}

/// Innate tarot: month times day.
pub fn innate_tarot(date: &BirthDate) -> u32 {
    arcana_number(date.month() * date.day())
}

/// Acquired tarot: year times month.
pub fn acquired_tarot(date: &BirthDate) -> u32 {
    arcana_number(date.year() * date.month())
}

/// Personality tarot: first plus last digit of the year.
pub fn personality_tarot(date: &BirthDate) -> u32 {
    let year = date.segment(Segment::Year);
    arcana_number(u32::from(year[0]) + u32::from(year[3]))
}

/// Shadow tarot: month times the middle two year digits.
pub fn shadow_tarot(date: &BirthDate) -> u32 {
    arcana_number(date.month() * date.value(Segment::YearMiddle))
}

/// Year tarot for `year`: all eight birth digits plus the digits of the year.
pub fn year_tarot(date: &BirthDate, year: i32) -> u32 {
    arcana_number(date.digit_sum(Segment::Full) + digit_sum(year.unsigned_abs()))
}

/// The seven natal tarot positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TarotPosition {
    Life,
    Soul,
    Talent,
    Innate,
    Acquired,
    Personality,
    Shadow,
}

/// All natal positions in reading order.
pub const ALL_TAROT_POSITIONS: [TarotPosition; 7] = [
    TarotPosition::Life,
    TarotPosition::Soul,
    TarotPosition::Talent,
    TarotPosition::Innate,
    TarotPosition::Acquired,
    TarotPosition::Personality,
    TarotPosition::Shadow,
];

impl TarotPosition {
    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Life => "Life tarot",
            Self::Soul => "Soul tarot",
            Self::Talent => "Talent tarot",
            Self::Innate => "Innate tarot",
            Self::Acquired => "Acquired tarot",
            Self::Personality => "Personality tarot",
            Self::Shadow => "Shadow tarot",
        }
    }

    /// How the position is derived from the date.
    pub const fn method(self) -> &'static str {
        match self {
            Self::Life => "sum of all date digits",
            Self::Soul => "sum of month and day digits",
            Self::Talent => "sum of the last two year digits and the day digits",
            Self::Innate => "month multiplied by day",
            Self::Acquired => "year multiplied by month",
            Self::Personality => "first year digit plus last year digit",
            Self::Shadow => "month multiplied by the middle two year digits",
        }
    }

    /// Card number for this position.
    pub fn compute(self, date: &BirthDate) -> u32 {
        match self {
            Self::Life => life_tarot(date),
            Self::Soul => soul_tarot(date),
            Self::Talent => talent_tarot(date),
            Self::Innate => innate_tarot(date),
            Self::Acquired => acquired_tarot(date),
            Self::Personality => personality_tarot(date),
            Self::Shadow => shadow_tarot(date),
        }
    }
}

/// Card numbers for all seven natal positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NatalTarot {
    pub life: u32,
    pub soul: u32,
    pub talent: u32,
    pub innate: u32,
    pub acquired: u32,
    pub personality: u32,
    pub shadow: u32,
}

impl NatalTarot {
    /// Card number at a position.
    pub const fn get(&self, position: TarotPosition) -> u32 {
        match position {
            TarotPosition::Life => self.life,
            TarotPosition::Soul => self.soul,
            TarotPosition::Talent => self.talent,
            TarotPosition::Innate => self.innate,
            TarotPosition::Acquired => self.acquired,
            TarotPosition::Personality => self.personality,
            TarotPosition::Shadow => self.shadow,
        }
    }

    /// Card at a position.
    pub fn card(&self, position: TarotPosition) -> TarotCard {
        tarot_card(self.get(position))
    }
}

/// Compute all seven natal tarot numbers.
pub fn natal_tarot(date: &BirthDate) -> NatalTarot {
    NatalTarot {
        life: life_tarot(date),
        soul: soul_tarot(date),
        talent: talent_tarot(date),
        innate: innate_tarot(date),
        acquired: acquired_tarot(date),
        personality: personality_tarot(date),
        shadow: shadow_tarot(date),
    }
}
