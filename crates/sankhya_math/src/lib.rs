//! Digit arithmetic shared by every numerology calculator.
//!
//! This crate provides:
//! - Decimal digit sums of integers and digit slices
//! - Repeated digit-sum reduction to a ceiling (9 or 22)
//! - Reduction traces, for rendering how a number was reached
//!
//! Everything here is pure integer arithmetic with no allocation except
//! [`reduce_steps`].

pub mod reduce;

pub use reduce::{Ceiling, digit_sum, reduce, reduce_steps, sum_digits};
