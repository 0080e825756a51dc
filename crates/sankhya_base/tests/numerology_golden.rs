//! Golden values for the worked examples.
//!
//! Pure arithmetic, no fixtures needed.

use sankhya_base::{
    BirthDate, Bucket, Coincidence, ConnectionKind, ConnectionTriad, DateError, GridLine,
    MeaningKind, Spread, ZiweiTriad, ZodiacSign, analyze, build_grid, coincidences,
    connection_meaning, connection_triad, cycle_number, life_meaning, life_number, meaning,
    natal_tarot, tarot_card, tarot_spreads, year_meaning, year_tarot, ziwei_triad, zodiac,
};

fn date(s: &str) -> BirthDate {
    BirthDate::parse(s).unwrap()
}

// ---------------------------------------------------------------------------
// 1990-01-01
// ---------------------------------------------------------------------------

#[test]
fn life_number_19900101() {
    // 1+9+9+0+0+1+0+1 = 21 -> 2+1 = 3
    let d = date("19900101");
    assert_eq!(life_number(&d), 3);
    assert!(life_meaning(3).starts_with("Communicator"));
}

#[test]
fn life_and_soul_tarot_19900101() {
    let t = natal_tarot(&date("19900101"));
    assert_eq!(t.life, 21);
    assert_eq!(tarot_card(t.life).name, "World");
    assert_eq!(t.soul, 2);
    assert_eq!(tarot_card(t.soul).name, "High Priestess");
    assert_eq!(t.talent, 10);
    assert_eq!(tarot_card(t.talent).name, "Wheel of Fortune");
}

#[test]
fn ziwei_19900101() {
    let t = ziwei_triad(&date("19900101"));
    assert_eq!(t, ZiweiTriad { main: 1, sub: 1, destiny: 2 });
}

#[test]
fn zodiac_19900101() {
    let z = zodiac(&date("19900101"));
    assert_eq!(z.sign, Some(ZodiacSign::Capricorn));
    assert_eq!(z.index, 1);
    assert!(meaning(MeaningKind::Zodiac, u32::from(z.index)).starts_with("Pioneering"));
}

#[test]
fn grid_19900101() {
    let g = build_grid(&date("19900101"));
    let a = analyze(&g);
    let strong: Vec<_> = a.strengths.iter().map(|s| (s.bucket, s.count)).collect();
    assert_eq!(strong, [(Bucket::Thought, 3), (Bucket::Wisdom, 2)]);
    assert_eq!(a.weaknesses.len(), 7);
    assert!(a.connections.is_empty());
}

// ---------------------------------------------------------------------------
// 1979-06-19 with target year 2025
// ---------------------------------------------------------------------------

#[test]
fn cycle_number_19790619_2025() {
    // digitsum(2025) + digitsum(0619) = 9 + 16 = 25 -> 7
    let d = date("19790619");
    assert_eq!(cycle_number(&d, 2025), 7);
    assert!(year_meaning(7).starts_with("Reflection"));
}

#[test]
fn year_tarot_19790619_2025() {
    // digitsum(19790619) + digitsum(2025) = 42 + 9 = 51 -> 6
    let d = date("19790619");
    let n = year_tarot(&d, 2025);
    assert_eq!(n, 6);
    assert_eq!(tarot_card(n).name, "Lovers");
}

#[test]
fn next_year_19790619_2026() {
    let d = date("19790619");
    assert_eq!(cycle_number(&d, 2026), 8);
    // 42 + 10 = 52 -> 7
    assert_eq!(year_tarot(&d, 2026), 7);
}

#[test]
fn connection_19790619() {
    let d = date("19790619");
    let t = connection_triad(&d);
    assert_eq!(t, ConnectionTriad { innate: 1, life: 6, talent: 7 });
    assert!(connection_meaning(ConnectionKind::Talent, t.talent).contains("thought and research"));
}

#[test]
fn natal_tarot_19790619() {
    let t = natal_tarot(&date("19790619"));
    let numbers = [
        t.life,
        t.soul,
        t.talent,
        t.innate,
        t.acquired,
        t.personality,
        t.shadow,
    ];
    assert_eq!(numbers, [6, 16, 8, 6, 21, 10, 15]);
    assert!(coincidences(&t).is_empty());
}

#[test]
fn shadow_integration_spread_19790619() {
    let t = natal_tarot(&date("19790619"));
    let spreads = tarot_spreads(&t);
    let shadow = spreads
        .iter()
        .find(|s| s.spread == Spread::ShadowIntegration)
        .unwrap();
    let names: Vec<_> = shadow.cards.iter().map(|c| c.name).collect();
    assert_eq!(names, ["Wheel of Fortune", "Devil", "Tower"]);
}

// ---------------------------------------------------------------------------
// Other dates
// ---------------------------------------------------------------------------

#[test]
fn invalid_feb_30() {
    assert_eq!(
        BirthDate::parse("20230230"),
        Err(DateError::InvalidCalendarDate { year: 2023, month: 2, day: 30 })
    );
}

#[test]
fn acquired_personality_coincidence_19980102() {
    // 1998 * 1 = 1998 -> 27 -> 9; 1 + 8 = 9
    let t = natal_tarot(&date("19980102"));
    assert_eq!(t.acquired, 9);
    assert_eq!(t.personality, 9);
    assert_eq!(
        coincidences(&t),
        vec![Coincidence::LifeSoul, Coincidence::AcquiredPersonality]
    );
}

#[test]
fn grid_lines_19530427() {
    let a = analyze(&build_grid(&date("19530427")));
    assert_eq!(
        a.connections,
        [
            GridLine::ThoughtWillpowerWisdom,
            GridLine::LoveWillpowerMaterial,
            GridLine::ThoughtSpiritLove,
        ]
    );
}

#[test]
fn shadow_tarot_zero_year_middle_2005() {
    let t = natal_tarot(&date("20050315"));
    assert_eq!(t.shadow, 22);
    assert_eq!(tarot_card(t.shadow).name, "Fool");
}
