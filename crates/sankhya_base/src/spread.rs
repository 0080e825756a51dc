//! Fixed tarot spreads over the natal positions, and coincidence notes.

use serde::Serialize;

use crate::tarot::{NatalTarot, TarotCard, TarotPosition};

/// The six fixed spreads: three pairs and three three-card paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Spread {
    LifeSoul,
    TalentInnate,
    AcquiredPersonality,
    LifeDirection,
    InnerGrowth,
    ShadowIntegration,
}

pub const ALL_SPREADS: [Spread; 6] = [
    Spread::LifeSoul,
    Spread::TalentInnate,
    Spread::AcquiredPersonality,
    Spread::LifeDirection,
    Spread::InnerGrowth,
    Spread::ShadowIntegration,
];

impl Spread {
    pub const fn label(self) -> &'static str {
        match self {
            Self::LifeSoul => "Life tarot + Soul tarot",
            Self::TalentInnate => "Talent tarot + Innate tarot",
            Self::AcquiredPersonality => "Acquired tarot + Personality tarot",
            Self::LifeDirection => "Life direction",
            Self::InnerGrowth => "Inner growth",
            Self::ShadowIntegration => "Shadow integration",
        }
    }

    /// Positions in the spread, in reading order.
    pub const fn positions(self) -> &'static [TarotPosition] {
        use TarotPosition::*;
        match self {
            Self::LifeSoul => &[Life, Soul],
            Self::TalentInnate => &[Talent, Innate],
            Self::AcquiredPersonality => &[Acquired, Personality],
            Self::LifeDirection => &[Life, Soul, Talent],
            Self::InnerGrowth => &[Innate, Acquired, Personality],
            Self::ShadowIntegration => &[Personality, Shadow, Soul],
        }
    }

    /// Paths read as a flow (`a -> b -> c`); pairs read as a combination.
    pub const fn is_path(self) -> bool {
        self.positions().len() == 3
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::LifeSoul => "the main lessons of your current life and what the soul is learning",
            Self::TalentInnate => "the abilities and latent gifts you were born with",
            Self::AcquiredPersonality => "the traits you developed while growing up",
            Self::LifeDirection => "the trajectory and direction of your life's development",
            Self::InnerGrowth => "your personal growth and transformation",
            Self::ShadowIntegration => "the shadow aspects to integrate, and your spiritual growth",
        }
    }
}

/// One spread laid out with cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpreadReading {
    pub spread: Spread,
    pub cards: Vec<TarotCard>,
}

/// Lay out every fixed spread for a natal tarot set.
pub fn tarot_spreads(natal: &NatalTarot) -> Vec<SpreadReading> {
    ALL_SPREADS
        .iter()
        .map(|&spread| SpreadReading {
            spread,
            cards: spread.positions().iter().map(|&p| natal.card(p)).collect(),
        })
        .collect()
}

/// Two natal positions that landed on the same card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Coincidence {
    LifeSoul,
    TalentInnate,
    AcquiredPersonality,
}

pub const ALL_COINCIDENCES: [Coincidence; 3] = [
    Coincidence::LifeSoul,
    Coincidence::TalentInnate,
    Coincidence::AcquiredPersonality,
];

impl Coincidence {
    pub const fn positions(self) -> (TarotPosition, TarotPosition) {
        match self {
            Self::LifeSoul => (TarotPosition::Life, TarotPosition::Soul),
            Self::TalentInnate => (TarotPosition::Talent, TarotPosition::Innate),
            Self::AcquiredPersonality => (TarotPosition::Acquired, TarotPosition::Personality),
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::LifeSoul => {
                "Life and soul tarot match: life purpose and soul mission are closely aligned"
            }
            Self::TalentInnate => {
                "Talent and innate tarot match: natural gifts are already fully expressed"
            }
            Self::AcquiredPersonality => {
                "Acquired and personality tarot match: personal traits are fully developed"
            }
        }
    }
}

/// Coincidences present in a natal set, in fixed order.
pub fn coincidences(natal: &NatalTarot) -> Vec<Coincidence> {
    ALL_COINCIDENCES
        .into_iter()
        .filter(|c| {
            let (a, b) = c.positions();
            natal.get(a) == natal.get(b)
        })
        .collect()
}
