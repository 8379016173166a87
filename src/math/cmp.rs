//! # Ordering
//!
//! Exact ordering by cross multiplication, plus a decimal approximation for display and for
//! callers that want to compare only up to a fixed number of fractional digits.
use std::cmp::Ordering;

use num_traits::{One, Signed, Zero};

use super::{NumComponent, Rational};

/// Fractional digits used when a caller does not ask for a precision.
pub const DEFAULT_DECIMAL_PLACES: u32 = 10;

/// Position of a value relative to the finite numbers.
///
/// Only values built from a zero denominator are not `Finite`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    NegativeInfinity,
    Finite,
    PositiveInfinity,
    Indeterminate,
}

impl Rational {
    fn class(&self) -> Class {
        if !self.is_degenerate() {
            Class::Finite
        } else if self.numer().is_positive() {
            Class::PositiveInfinity
        } else if self.numer().is_negative() {
            Class::NegativeInfinity
        } else {
            Class::Indeterminate
        }
    }

    /// `self * 10^places`, rounded half away from zero. `None` for a zero denominator.
    pub fn to_scaled(&self, places: u32) -> Option<NumComponent> {
        if self.is_degenerate() {
            return None;
        }

        let scaled = self.numer().abs() * NumComponent::from(10).pow(places);
        let mut quotient = &scaled / self.denom();
        let remainder = scaled % self.denom();
        if &remainder + &remainder >= *self.denom() {
            quotient += NumComponent::one();
        }

        Some(if self.is_negative() { -quotient } else { quotient })
    }

    /// Decimal rendering with exactly `places` fractional digits, e.g. `2/3` at 4 places is
    /// `0.6667`.
    pub fn to_decimal(&self, places: u32) -> Option<String> {
        let scaled = self.to_scaled(places)?;
        let digits = scaled.abs().to_string();
        let places = places as usize;

        let mut out = if scaled.is_negative() { "-".to_owned() } else { "".to_owned() };
        if places == 0 {
            out += digits.as_str();
            return Some(out);
        }

        let padded = format!("{digits:0>width$}", width = places + 1);
        let (int, fract) = padded.split_at(padded.len() - places);
        out += int;
        out += ".";
        out += fract;
        Some(out)
    }

    /// Compare the values after rounding both to `places` fractional digits.
    ///
    /// Values closer together than the rounding step can compare as equal. Zero denominators
    /// fall back to the exact ordering.
    pub fn cmp_approx(&self, other: &Self, places: u32) -> Ordering {
        match (self.to_scaled(places), other.to_scaled(places)) {
            (Some(lhs), Some(rhs)) => lhs.cmp(&rhs),
            _ => self.cmp(other),
        }
    }

    pub fn eq_approx(&self, other: &Self, places: u32) -> bool {
        self.cmp_approx(other, places) == Ordering::Equal
    }

    /// Sign of the value as `-1`, `0` or `1`.
    pub fn signum(&self) -> i8 {
        if self.numer().is_zero() {
            0
        } else if self.is_negative() {
            -1
        } else {
            1
        }
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.class(), other.class()) {
            // denominators are positive here, so the cross products keep the order
            (Class::Finite, Class::Finite) => {
                (self.numer() * other.denom()).cmp(&(other.numer() * self.denom()))
            },
            (lhs, rhs) => lhs.cmp(&rhs),
        }
    }
}

#[test]
fn ordering_test() {
    assert!(crate::ratio!(1, 2) < crate::ratio!(2, 3));
    assert!(crate::ratio!(3, 9) < crate::ratio!(1, 2));
    assert!(crate::ratio!(-1, 2) < crate::ratio!(-1, 3));
    assert!(crate::ratio!(-1, 2) < crate::ratio!(0));
    assert!(crate::ratio!(7, 3) > crate::ratio!(2));
    assert_eq!(crate::ratio!(2, 4).cmp(&crate::ratio!(1, 2)), Ordering::Equal);
    assert_eq!(crate::ratio!(1, 2).max(crate::ratio!(5, 11)), crate::ratio!(1, 2));
}

#[test]
fn ordering_beyond_ten_digits_is_exact() {
    let third = crate::ratio!(1, 3);
    let close = crate::ratio!(3_333_333_333_i64, 10_000_000_000_i64);

    assert!(close < third);
    assert_ne!(close, third);
    assert!(close.eq_approx(&third, DEFAULT_DECIMAL_PLACES));
    assert_eq!(close.cmp_approx(&third, 11), Ordering::Less);
}

#[test]
fn degenerate_ordering_test() {
    let positive = crate::ratio!(3, 0);
    let negative = crate::ratio!(-3, 0);
    let indeterminate = crate::ratio!(0, 0);

    assert!(negative < crate::ratio!(-1_000_000));
    assert!(positive > crate::ratio!(1_000_000));
    assert!(indeterminate > positive);
    assert_eq!(positive, crate::ratio!(1, 0));
    assert_eq!(positive.cmp_approx(&negative, DEFAULT_DECIMAL_PLACES), Ordering::Greater);
}

#[test]
fn decimal_test() {
    assert_eq!(crate::ratio!(1, 3).to_decimal(10).as_deref(), Some("0.3333333333"));
    assert_eq!(crate::ratio!(2, 3).to_decimal(10).as_deref(), Some("0.6666666667"));
    assert_eq!(crate::ratio!(-2, 3).to_decimal(4).as_deref(), Some("-0.6667"));
    assert_eq!(crate::ratio!(1, 8).to_decimal(2).as_deref(), Some("0.13"));
    assert_eq!(crate::ratio!(5).to_decimal(3).as_deref(), Some("5.000"));
    assert_eq!(crate::ratio!(1, 2).to_decimal(0).as_deref(), Some("1"));
    assert_eq!(crate::ratio!(-1, 2).to_decimal(0).as_deref(), Some("-1"));
    assert_eq!(crate::ratio!(-1, 1000).to_decimal(2).as_deref(), Some("0.00"));
    assert_eq!(crate::ratio!(1, 0).to_decimal(2), None);
}

#[test]
fn hash_agrees_with_equality() {
    use std::collections::HashSet;

    let set: HashSet<Rational> = [crate::ratio!(1, 2), crate::ratio!(2, 4), crate::ratio!(-3, -6)]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 1);
    assert_eq!(crate::ratio!(0).signum(), 0);
    assert_eq!(crate::ratio!(-4, 3).signum(), -1);
}
