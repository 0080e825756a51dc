//! Static interpretation tables.
//!
//! Each table maps an indicator number 1..=9 to a fixed sentence. Lookups are
//! total: a number outside a table yields [`NO_MEANING`]. Tarot cards carry
//! their own name and meaning in [`crate::tarot`].

use serde::Serialize;

use crate::connection::ConnectionKind;
use crate::tarot::tarot_card;

/// Sentinel returned for any key outside a table.
pub const NO_MEANING: &str = "no corresponding meaning";

/// Which table to consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeaningKind {
    Life,
    Year,
    Tarot,
    Ziwei,
    Connection(ConnectionKind),
    Zodiac,
}

const LIFE_MEANINGS: [&str; 9] = [
    "Leader: strongly creative and independent, a natural-born leader.",
    "Peacemaker: diplomatic, understanding and compassionate.",
    "Communicator: full of creativity and imagination, skilled at expressing yourself.",
    "Builder: practical and reliable, good at organising and planning, attentive to detail.",
    "Free spirit: seeks freedom, loves adventure, highly adaptable.",
    "Caretaker: compassionate, family-minded and responsible.",
    "Thinker: philosophical, drawn to research and analysis.",
    "Achiever: a capable leader who values material accomplishment.",
    "Sage: empathetic, with an idealistic nature.",
];

const YEAR_MEANINGS: [&str; 9] = [
    "New beginnings: a year to start new plans and show leadership.",
    "Cooperation: relationships come first, a good year for partnerships.",
    "Creative expression: a good time to show your talents and widen your circle.",
    "Foundations: practical work, focused on building solid ground.",
    "Change: full of change and opportunity, stay flexible.",
    "Responsibility: harmonious family ties, a period of taking on duties.",
    "Reflection: suited to deep study and spiritual growth.",
    "Harvest: career and finances both go well.",
    "Completion and release: a year for summing up and transformation.",
];

const ZIWEI_MEANINGS: [&str; 9] = [
    "Heavenly Unity star: strong leadership and pioneering thought, suited to leading others.",
    "Heavenly Aide star: understanding and diplomatic, a good coordinator.",
    "Heavenly Mechanism star: clever and inventive, skilled at expression and communication.",
    "Heavenly Authority star: steady and grounded, methodical, able to execute.",
    "Heavenly Harmony star: changeable and adaptable, loves freedom.",
    "Heavenly Treasury star: fortunate and kind-hearted, devoted to family.",
    "Heavenly Nobility star: exceptional wisdom, philosophical, loves to explore.",
    "Heavenly Minister star: prosperous and successful, with a talent for leadership.",
    "Heavenly Beam star: respected and virtuous, idealistic and compassionate.",
];

const INNATE_MEANINGS: [&str; 9] = [
    "a born leader, independent, with innovative thinking",
    "naturally sensitive, intuitive and understanding",
    "naturally creative, with strong powers of expression",
    "naturally practical, orderly and attentive to detail",
    "naturally freedom-seeking and adaptable",
    "naturally compassionate, values harmony",
    "naturally analytical, loves to explore",
    "naturally authoritative, values achievement",
    "naturally idealistic and empathetic",
];

const LIFE_LESSON_MEANINGS: [&str; 9] = [
    "the life lesson is to develop independence and creativity",
    "the life lesson is to learn cooperation and partnership",
    "the life lesson is to develop creativity and expression",
    "the life lesson is to build stability and order",
    "the life lesson is to pursue freedom and change",
    "the life lesson is to create harmony and balance",
    "the life lesson is to seek wisdom and spirituality",
    "the life lesson is to master power and material life",
    "the life lesson is service and devotion",
];

const TALENT_MEANINGS: [&str; 9] = [
    "a gift for pioneering and leadership",
    "a gift for diplomacy and coordination",
    "a gift for creativity and communication",
    "a gift for organisation and execution",
    "a gift for adaptation and adventure",
    "a gift for caring and nurturing",
    "a gift for thought and research",
    "a gift for management and achievement",
    "a gift for wisdom and devotion",
];

const ZODIAC_MEANINGS: [&str; 9] = [
    "Pioneering: leadership, innovation and a spirit of adventure",
    "Steadfast: stable and persistent, values material security",
    "Mutable: flexible, adaptable and quick-minded",
    "Emotional: sensitive, compassionate, family-minded",
    "Expressive: passionate and creative, seeks attention",
    "Analytical: rational, perfectionist, attentive to detail",
    "Harmonious: seeks balance, values relationships, diplomatic",
    "Mysterious: perceptive and strong-willed, values power",
    "Idealistic: optimistic, freedom-seeking, philosophical",
];

fn lookup(table: &'static [&'static str; 9], number: u32) -> &'static str {
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| table.get(i))
        .copied()
        .unwrap_or(NO_MEANING)
}

/// Meaning of a life-path number.
pub fn life_meaning(number: u32) -> &'static str {
    lookup(&LIFE_MEANINGS, number)
}

/// Meaning of an annual cycle number.
pub fn year_meaning(number: u32) -> &'static str {
    lookup(&YEAR_MEANINGS, number)
}

/// Meaning of a ziwei number (main, sub or destiny).
pub fn ziwei_meaning(number: u32) -> &'static str {
    lookup(&ZIWEI_MEANINGS, number)
}

/// Meaning of a connection number, by sub-kind.
pub fn connection_meaning(kind: ConnectionKind, number: u32) -> &'static str {
    let table = match kind {
        ConnectionKind::Innate => &INNATE_MEANINGS,
        ConnectionKind::Life => &LIFE_LESSON_MEANINGS,
        ConnectionKind::Talent => &TALENT_MEANINGS,
    };
    lookup(table, number)
}

/// Meaning of a zodiac modality number.
pub fn zodiac_meaning(number: u32) -> &'static str {
    lookup(&ZODIAC_MEANINGS, number)
}

/// Meaning of any indicator, dispatched on kind.
///
/// For [`MeaningKind::Tarot`] this is the card's keyword line.
pub fn meaning(kind: MeaningKind, number: u32) -> &'static str {
    match kind {
        MeaningKind::Life => life_meaning(number),
        MeaningKind::Year => year_meaning(number),
        MeaningKind::Tarot => tarot_card(number).meaning,
        MeaningKind::Ziwei => ziwei_meaning(number),
        MeaningKind::Connection(sub) => connection_meaning(sub, number),
        MeaningKind::Zodiac => zodiac_meaning(number),
    }
}
