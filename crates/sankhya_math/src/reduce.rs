//! Repeated digit-sum reduction.
//!
//! A value above the ceiling is replaced by the sum of its decimal digits
//! until it no longer exceeds the ceiling. For any ceiling >= 9 this always
//! terminates: the digit sum of n >= 10 is strictly smaller than n, and every
//! single-digit value is already at or below the ceiling.

/// Upper bound for a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ceiling {
    /// Single-digit numerology numbers (1..=9).
    Digit,
    /// Major arcana indices (1..=22).
    Arcana,
}

impl Ceiling {
    /// Numeric value of the ceiling.
    pub const fn value(self) -> u32 {
        match self {
            Self::Digit => 9,
            Self::Arcana => 22,
        }
    }
}

/// Sum of the decimal digits of `n`.
pub const fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Sum of a slice of single digits (each 0..=9).
pub fn sum_digits(digits: &[u8]) -> u32 {
    digits.iter().map(|&d| u32::from(d)).sum()
}

/// Reduce `n` by repeated digit sums until it is at or below `ceiling`.
///
/// Values already at or below the ceiling, including 0, are returned
/// unchanged.
pub const fn reduce(n: u32, ceiling: Ceiling) -> u32 {
    let limit = ceiling.value();
    let mut n = n;
    while n > limit {
        n = digit_sum(n);
    }
    n
}

/// Every value visited while reducing `n`, starting with `n` itself.
///
/// The last element equals [`reduce`]`(n, ceiling)`. A value that needs no
/// reduction yields a single-element trace.
pub fn reduce_steps(n: u32, ceiling: Ceiling) -> Vec<u32> {
    let limit = ceiling.value();
    let mut steps = vec![n];
    let mut n = n;
    while n > limit {
        n = digit_sum(n);
        steps.push(n);
    }
    steps
}
