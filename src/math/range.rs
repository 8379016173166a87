//! # Ranges
//!
//! Closed intervals of rationals for membership tests, and unit step progressions of integers
//! for iteration.
use std::ops::{Bound, RangeBounds, RangeInclusive};

use num_traits::{One, Signed, Zero};

use super::{NumComponent, Rational};

/// The closed interval `[start, end]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RationalRange {
    start: Rational,
    end: Rational,
}

impl RationalRange {
    pub fn new(start: Rational, end: Rational) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Rational {
        &self.start
    }

    pub fn end(&self) -> &Rational {
        &self.end
    }

    /// `start <= value <= end`.
    pub fn contains(&self, value: &Rational) -> bool {
        &self.start <= value && value <= &self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }
}

impl Rational {
    /// `self..=end` as a [`RationalRange`].
    pub fn range_to(self, end: Rational) -> RationalRange {
        RationalRange::new(self, end)
    }
}

impl From<RangeInclusive<Rational>> for RationalRange {
    fn from(range: RangeInclusive<Rational>) -> Self {
        let (start, end) = range.into_inner();
        Self::new(start, end)
    }
}

impl RangeBounds<Rational> for RationalRange {
    fn start_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.start)
    }

    fn end_bound(&self) -> Bound<&Rational> {
        Bound::Included(&self.end)
    }
}

/// Direction of an [`IntegerProgression`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Up,
    Down,
}

impl Step {
    fn amount(&self) -> NumComponent {
        match self {
            Step::Up => NumComponent::one(),
            Step::Down => -NumComponent::one(),
        }
    }
}

/// Integers from `start` to `end`, both inclusive, one at a time.
///
/// A step that points away from `end` gives an empty progression. When `start == end` the
/// progression holds that single value whatever the step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerProgression {
    start: NumComponent,
    end: NumComponent,
    step: Step,
}

impl IntegerProgression {
    pub fn new(start: NumComponent, end: NumComponent, step: Step) -> Self {
        Self { start, end, step }
    }

    /// `start, start + 1, ..., end`.
    pub fn range_to(start: NumComponent, end: NumComponent) -> Self {
        Self::new(start, end, Step::Up)
    }

    /// `start, start - 1, ..., end`.
    pub fn down_to(start: NumComponent, end: NumComponent) -> Self {
        Self::new(start, end, Step::Down)
    }

    pub fn start(&self) -> &NumComponent {
        &self.start
    }

    pub fn end(&self) -> &NumComponent {
        &self.end
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn is_empty(&self) -> bool {
        match self.step {
            Step::Up => self.end < self.start,
            Step::Down => self.end > self.start,
        }
    }

    pub fn contains(&self, value: &NumComponent) -> bool {
        let (low, high) = match self.step {
            Step::Up => (&self.start, &self.end),
            Step::Down => (&self.end, &self.start),
        };
        low <= value && value <= high
    }

    /// A fresh iterator from `start`; the progression itself is never consumed.
    pub fn iter(&self) -> IntegerIter {
        IntegerIter {
            current: self.start.clone(),
            end: self.end.clone(),
            step: self.step,
            exhausted: self.is_empty(),
        }
    }
}

impl IntoIterator for IntegerProgression {
    type Item = NumComponent;
    type IntoIter = IntegerIter;

    fn into_iter(self) -> IntegerIter {
        let exhausted = self.is_empty();
        IntegerIter { current: self.start, end: self.end, step: self.step, exhausted }
    }
}

impl IntoIterator for &IntegerProgression {
    type Item = NumComponent;
    type IntoIter = IntegerIter;

    fn into_iter(self) -> IntegerIter {
        self.iter()
    }
}

#[derive(Clone, Debug)]
pub struct IntegerIter {
    current: NumComponent,
    end: NumComponent,
    step: Step,
    exhausted: bool,
}

impl Iterator for IntegerIter {
    type Item = NumComponent;

    fn next(&mut self) -> Option<NumComponent> {
        if self.exhausted {
            return None;
        }
        let in_range = match self.step {
            Step::Up => self.current <= self.end,
            Step::Down => self.current >= self.end,
        };
        if !in_range {
            self.exhausted = true;
            return None;
        }

        let next = self.current.clone();
        self.current += self.step.amount();
        Some(next)
    }
}

/// Positive divisors of `n` in ascending order. Empty unless `n > 0`.
pub fn factors(n: &NumComponent) -> Vec<NumComponent> {
    if !n.is_positive() {
        return Vec::new();
    }
    IntegerProgression::range_to(NumComponent::one(), n.clone())
        .into_iter()
        .filter(|divisor| (n % divisor).is_zero())
        .collect()
}

#[cfg(test)]
fn ints(values: &[i64]) -> Vec<NumComponent> {
    values.iter().map(|&v| NumComponent::from(v)).collect()
}

#[test]
fn rational_range_test() {
    let range = crate::ratio!(1, 3).range_to(crate::ratio!(2, 3));
    assert!(range.contains(&crate::ratio!(1, 2)));
    assert!(range.contains(&crate::ratio!(2, 6)));
    assert!(range.contains(&crate::ratio!(4, 6)));
    assert!(!range.contains(&crate::ratio!(3, 4)));
    assert!(!range.contains(&crate::ratio!(-1, 2)));
    assert!(!range.is_empty());

    let reversed = RationalRange::from(crate::ratio!(1)..=crate::ratio!(0));
    assert!(reversed.is_empty());
    assert!(!reversed.contains(&crate::ratio!(1, 2)));
    assert!(RangeBounds::contains(&range, &crate::ratio!(1, 2)));
}

#[test]
fn ascending_progression_test() {
    let progression = IntegerProgression::range_to(NumComponent::from(1), NumComponent::from(4));
    assert_eq!(progression.iter().collect::<Vec<_>>(), ints(&[1, 2, 3, 4]));
    // restartable
    assert_eq!((&progression).into_iter().count(), 4);
    assert!(progression.contains(&NumComponent::from(3)));
    assert!(!progression.contains(&NumComponent::from(5)));
}

#[test]
fn descending_progression_test() {
    let progression = IntegerProgression::down_to(NumComponent::from(4), NumComponent::from(1));
    assert_eq!(progression.into_iter().collect::<Vec<_>>(), ints(&[4, 3, 2, 1]));
    let negative = IntegerProgression::down_to(NumComponent::from(-1), NumComponent::from(-3));
    assert_eq!(negative.iter().collect::<Vec<_>>(), ints(&[-1, -2, -3]));
}

#[test]
fn single_and_empty_progression_test() {
    for step in [Step::Up, Step::Down] {
        let single = IntegerProgression::new(NumComponent::from(7), NumComponent::from(7), step);
        assert_eq!(single.iter().collect::<Vec<_>>(), ints(&[7]));
    }
    let backwards = IntegerProgression::range_to(NumComponent::from(4), NumComponent::from(1));
    assert!(backwards.is_empty());
    assert_eq!(backwards.iter().next(), None);
    let upwards = IntegerProgression::down_to(NumComponent::from(1), NumComponent::from(4));
    assert_eq!(upwards.iter().count(), 0);
}

#[test]
fn factors_test() {
    assert_eq!(factors(&NumComponent::from(8)), ints(&[1, 2, 4, 8]));
    assert_eq!(factors(&NumComponent::from(1)), ints(&[1]));
    assert_eq!(factors(&NumComponent::from(13)), ints(&[1, 13]));
    assert!(factors(&NumComponent::from(0)).is_empty());
    assert!(factors(&NumComponent::from(-6)).is_empty());
}
