//! Ziwei triad: main star, sub star and destiny palace numbers.

use serde::Serialize;

use sankhya_math::{Ceiling, reduce};

use crate::birth_date::{BirthDate, Segment};

/// The three ziwei numbers, each in 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ZiweiTriad {
    /// Year digits summed.
    pub main: u32,
    /// Month times day.
    pub sub: u32,
    /// Main plus sub.
    pub destiny: u32,
}

/// Compute the ziwei triad for a birth date.
pub fn ziwei_triad(date: &BirthDate) -> ZiweiTriad {
    let main = reduce(date.digit_sum(Segment::Year), Ceiling::Digit);
    let sub = reduce(date.month() * date.day(), Ceiling::Digit);
    let destiny = reduce(main + sub, Ceiling::Digit);
    ZiweiTriad { main, sub, destiny }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triad_19900101() {
        let t = ziwei_triad(&BirthDate::parse("19900101").unwrap());
        assert_eq!(t, ZiweiTriad { main: 1, sub: 1, destiny: 2 });
    }

    #[test]
    fn triad_19790619() {
        // 26 -> 8; 6 * 19 = 114 -> 6; 8 + 6 = 14 -> 5
        let t = ziwei_triad(&BirthDate::parse("19790619").unwrap());
        assert_eq!(t, ZiweiTriad { main: 8, sub: 6, destiny: 5 });
    }

    #[test]
    fn triad_large_product() {
        // 12 * 31 = 372 -> 12 -> 3
        let t = ziwei_triad(&BirthDate::parse("20001231").unwrap());
        assert_eq!(t.main, 2);
        assert_eq!(t.sub, 3);
        assert_eq!(t.destiny, 5);
    }
}
