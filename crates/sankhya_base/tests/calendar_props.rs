//! Invariants over the full valid date range (0001-01-01 ..= 9999-12-31).

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;
use sankhya_base::{
    ALL_BUCKETS, ALL_TAROT_POSITIONS, BirthDate, DateError, NO_MEANING, ZODIAC_RANGES, analyze,
    build_grid, connection_triad, cycle_number, life_meaning, life_number, natal_tarot,
    tarot_card, year_tarot, ziwei_triad, zodiac,
};

fn birth_date() -> impl Strategy<Value = BirthDate> {
    (1i32..=9999, 1u32..=12, 1u32..=31)
        .prop_filter_map("not a calendar date", |(y, m, d)| BirthDate::from_ymd(y, m, d).ok())
}

proptest! {
    #[test]
    fn life_number_in_range(d in birth_date()) {
        let n = life_number(&d);
        prop_assert!((1..=9).contains(&n), "{d}: {n}");
        prop_assert_ne!(life_meaning(n), NO_MEANING);
    }

    #[test]
    fn tarot_numbers_in_range(d in birth_date(), year in 1i32..=9999) {
        let natal = natal_tarot(&d);
        for p in ALL_TAROT_POSITIONS {
            let n = natal.get(p);
            prop_assert!((1..=22).contains(&n), "{d} {p:?}: {n}");
            prop_assert_ne!(tarot_card(n).name, sankhya_base::UNKNOWN_CARD);
        }
        let y = year_tarot(&d, year);
        prop_assert!((1..=22).contains(&y), "{d} {year}: {y}");
    }

    #[test]
    fn triads_in_range(d in birth_date(), year in 1i32..=9999) {
        let z = ziwei_triad(&d);
        let c = connection_triad(&d);
        for n in [z.main, z.sub, z.destiny, c.innate, c.life, c.talent, cycle_number(&d, year)] {
            prop_assert!((1..=9).contains(&n), "{d}: {n}");
        }
    }

    #[test]
    fn zodiac_always_found(d in birth_date()) {
        let z = zodiac(&d);
        prop_assert!(z.sign.is_some());
        prop_assert!((1..=9).contains(&z.index));
    }

    #[test]
    fn grid_partitions_non_zero_digits(d in birth_date()) {
        let g = build_grid(&d);
        let non_zero = d.digits().iter().filter(|&&x| x != 0).count();
        prop_assert_eq!(g.total(), non_zero);
        for b in ALL_BUCKETS {
            prop_assert!(g.occurrences(b).iter().all(|&x| x == b.digit()));
        }
    }

    #[test]
    fn grid_analysis_is_consistent(d in birth_date()) {
        let g = build_grid(&d);
        let a = analyze(&g);
        for s in &a.strengths {
            prop_assert!(s.count >= 2);
            prop_assert_eq!(s.count, g.count(s.bucket));
        }
        for &w in &a.weaknesses {
            prop_assert!(g.is_empty(w));
        }
        let strong = a.strengths.len();
        let weak = a.weaknesses.len();
        let singles = ALL_BUCKETS.iter().filter(|&&b| g.count(b) == 1).count();
        prop_assert_eq!(strong + weak + singles, 9);
    }

    #[test]
    fn parse_round_trips_display(d in birth_date()) {
        prop_assert_eq!(BirthDate::parse(&d.to_string()), Ok(d));
    }

    #[test]
    fn rejects_any_invalid_day(y in 1i32..=9999, m in 1u32..=12, day in 29u32..=99) {
        let raw = format!("{y:04}{m:02}{day:02}");
        let valid = NaiveDate::from_ymd_opt(y, m, day).is_some();
        match BirthDate::parse(&raw) {
            Ok(_) => prop_assert!(valid, "{raw} accepted"),
            Err(e) => {
                prop_assert!(!valid, "{raw} rejected");
                prop_assert_eq!(e, DateError::InvalidCalendarDate { year: y, month: m, day });
            }
        }
    }
}

#[test]
fn zodiac_ranges_partition_leap_year() {
    let mut day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut days = 0;
    while day.year() == 2024 {
        let matches = ZODIAC_RANGES
            .iter()
            .filter(|r| r.contains(day.month(), day.day()))
            .count();
        assert_eq!(matches, 1, "{day}");
        days += 1;
        day = day.succ_opt().unwrap();
    }
    assert_eq!(days, 366);
}
