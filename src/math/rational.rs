//! # Exact fractions
//!
//! The value type everything else in `math` is built on.
use std::iter::{Product, Sum};
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_bigint::Sign;
use num_rational::BigRational;
use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, One, Signed, Zero};

use super::{NumComponent, RationalError};

/// A fraction of two arbitrary precision integers.
///
/// Values are normalized whenever they are built: the denominator is positive and shares no
/// factor with the numerator. The pair is therefore canonical, and comparing the pairs
/// structurally is the same as comparing the values they stand for (`1/2 == 2/4`).
///
/// A zero denominator is only reachable through [`Rational::new`]. Normalization leaves such a
/// value as `1/0`, `-1/0` or `0/0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: NumComponent,
    denom: NumComponent,
}

/// Greatest common divisor of the absolute values, by Euclid's algorithm.
///
/// `gcd(0, 0)` is `0`.
pub fn gcd(a: &NumComponent, b: &NumComponent) -> NumComponent {
    let mut a = a.abs();
    let mut b = b.abs();
    while !b.is_zero() {
        let remainder = &a % &b;
        a = b;
        b = remainder;
    }
    a
}

/// Reduce a pair to lowest terms and move the sign into the numerator.
///
/// Division only ever happens on absolute values, so the result does not depend on how the
/// integer type rounds negative quotients.
pub fn normalize(numer: NumComponent, denom: NumComponent) -> (NumComponent, NumComponent) {
    let divisor = gcd(&numer, &denom);
    if divisor.is_zero() {
        // only 0/0 gets here
        return (numer, denom);
    }

    match (numer.sign(), denom.sign()) {
        (Sign::Minus, Sign::Minus) => (numer.abs() / &divisor, denom.abs() / divisor),
        (_, Sign::Minus) => (-(numer.abs() / &divisor), denom.abs() / divisor),
        _ => (numer / &divisor, denom / divisor),
    }
}

impl Rational {
    /// Build a rational from a raw pair, normalizing it.
    ///
    /// Never fails. Use [`Rational::div_by`] to reject zero denominators.
    pub fn new(numer: NumComponent, denom: NumComponent) -> Self {
        let (numer, denom) = normalize(numer, denom);
        Self { numer, denom }
    }

    pub fn from_integer(value: NumComponent) -> Self {
        Self { numer: value, denom: NumComponent::one() }
    }

    /// `numer / denom`, failing when the denominator is zero.
    pub fn div_by(
        numer: impl Into<NumComponent>,
        denom: impl Into<NumComponent>,
    ) -> Result<Self, RationalError> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::new(numer.into(), denom))
    }

    pub fn numer(&self) -> &NumComponent {
        &self.numer
    }

    pub fn denom(&self) -> &NumComponent {
        &self.denom
    }

    pub fn into_parts(self) -> (NumComponent, NumComponent) {
        (self.numer, self.denom)
    }

    pub fn is_integer(&self) -> bool {
        self.denom.is_one()
    }

    /// Whether the denominator is zero, which only a raw [`Rational::new`] call can produce.
    pub fn is_degenerate(&self) -> bool {
        self.denom.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.numer.is_negative()
    }

    /// The integer part, rounded toward zero. `None` for a zero denominator.
    pub fn to_integer(&self) -> Option<NumComponent> {
        if self.is_degenerate() {
            None
        } else {
            Some(&self.numer / &self.denom)
        }
    }

    pub fn abs(&self) -> Self {
        Self { numer: self.numer.abs(), denom: self.denom.clone() }
    }

    pub fn recip(&self) -> Result<Self, RationalError> {
        Self::one().try_div(self)
    }

    /// Run normalization again. Values are already normalized, so this returns an equal pair.
    pub fn normalize(self) -> Self {
        Self::new(self.numer, self.denom)
    }

    /// `(a/b) / (c/d) = (a*d)/(b*c)`, failing when `b*c` is zero.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, RationalError> {
        let denom = &self.denom * &rhs.numer;
        if denom.is_zero() {
            return Err(RationalError::InvalidDenominator);
        }
        Ok(Self::new(&self.numer * &rhs.denom, denom))
    }
}

/// Infix construction, `1_i32.div_by(2)`.
pub trait DivBy<Rhs = Self> {
    fn div_by(self, denom: Rhs) -> Result<Rational, RationalError>;
}

macro_rules! div_by {
    ($($t:ty),*) => {
        $(
            impl DivBy for $t {
                fn div_by(self, denom: $t) -> Result<Rational, RationalError> {
                    Rational::div_by(self, denom)
                }
            }
        )*
    };
}

div_by!(i32, i64, NumComponent);

impl From<NumComponent> for Rational {
    fn from(value: NumComponent) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(NumComponent::from(value))
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from_integer(NumComponent::from(value))
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        let (numer, denom) = value.into_raw();
        Self::new(numer, denom)
    }
}

impl TryFrom<Rational> for BigRational {
    type Error = RationalError;

    fn try_from(value: Rational) -> Result<Self, Self::Error> {
        if value.is_degenerate() {
            return Err(RationalError::InvalidDenominator);
        }
        // already in lowest terms with a positive denominator
        Ok(BigRational::new_raw(value.numer, value.denom))
    }
}

impl Mul<&Rational> for &Rational {
    type Output = Rational;

    fn mul(self, rhs: &Rational) -> Rational {
        Rational::new(&self.numer * &rhs.numer, &self.denom * &rhs.denom)
    }
}

impl Add<&Rational> for &Rational {
    type Output = Rational;

    fn add(self, rhs: &Rational) -> Rational {
        Rational::new(
            &self.numer * &rhs.denom + &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Sub<&Rational> for &Rational {
    type Output = Rational;

    fn sub(self, rhs: &Rational) -> Rational {
        Rational::new(
            &self.numer * &rhs.denom - &rhs.numer * &self.denom,
            &self.denom * &rhs.denom,
        )
    }
}

impl Div<&Rational> for &Rational {
    type Output = Rational;

    /// # Panics
    ///
    /// When `rhs` is zero. See [`Rational::try_div`] for the fallible version.
    fn div(self, rhs: &Rational) -> Rational {
        match self.try_div(rhs) {
            Ok(quotient) => quotient,
            Err(_) => panic!("attempt to divide {} by {}", self, rhs),
        }
    }
}

macro_rules! forward_binop {
    ($imp:ident, $method:ident) => {
        impl $imp<Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(&self, &rhs)
            }
        }

        impl $imp<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $imp::$method(&self, rhs)
            }
        }

        impl $imp<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                $imp::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);
forward_binop!(Div, div);

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        // negating the numerator keeps the pair canonical
        Rational { numer: -&self.numer, denom: self.denom.clone() }
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational { numer: -self.numer, denom: self.denom }
    }
}

impl CheckedAdd for Rational {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        Some(self + v)
    }
}

impl CheckedSub for Rational {
    fn checked_sub(&self, v: &Self) -> Option<Self> {
        Some(self - v)
    }
}

impl CheckedMul for Rational {
    fn checked_mul(&self, v: &Self) -> Option<Self> {
        Some(self * v)
    }
}

impl CheckedDiv for Rational {
    fn checked_div(&self, v: &Self) -> Option<Self> {
        self.try_div(v).ok()
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(NumComponent::zero())
    }

    fn is_zero(&self) -> bool {
        self.numer.is_zero() && !self.denom.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(NumComponent::one())
    }

    fn is_one(&self) -> bool {
        self.numer.is_one() && self.denom.is_one()
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item = &'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

#[test]
fn gcd_test() {
    assert_eq!(gcd(&NumComponent::from(12), &NumComponent::from(18)), NumComponent::from(6));
    assert_eq!(gcd(&NumComponent::from(-12), &NumComponent::from(18)), NumComponent::from(6));
    assert_eq!(gcd(&NumComponent::from(7), &NumComponent::from(0)), NumComponent::from(7));
    assert_eq!(gcd(&NumComponent::from(0), &NumComponent::from(-5)), NumComponent::from(5));
    assert_eq!(gcd(&NumComponent::from(0), &NumComponent::from(0)), NumComponent::from(0));
}

#[test]
fn normalize_test() {
    let pair = |n: i64, d: i64| normalize(NumComponent::from(n), NumComponent::from(d));
    let expected = |n: i64, d: i64| (NumComponent::from(n), NumComponent::from(d));

    assert_eq!(pair(2, 4), expected(1, 2));
    assert_eq!(pair(-2, 4), expected(-1, 2));
    assert_eq!(pair(2, -4), expected(-1, 2));
    assert_eq!(pair(-2, -4), expected(1, 2));
    assert_eq!(pair(0, -7), expected(0, 1));
    assert_eq!(pair(117, 1098), expected(13, 122));
    // zero denominators pass through without dividing by zero
    assert_eq!(pair(0, 0), expected(0, 0));
    assert_eq!(pair(5, 0), expected(1, 0));
    assert_eq!(pair(-5, 0), expected(-1, 0));
}

#[test]
fn normalize_is_idempotent() {
    for (n, d) in [(6, -9), (-6, -9), (0, 3), (35, 14), (1, 1), (0, 0), (-4, 0)] {
        let once = crate::ratio!(n, d);
        assert_eq!(once.clone().normalize(), once);
        if !once.is_degenerate() {
            assert!(once.denom() > &NumComponent::zero());
            assert!(gcd(once.numer(), once.denom()).is_one());
        }
    }
}

#[test]
fn arithmetic_test() {
    let half = crate::ratio!(1, 2);
    let third = crate::ratio!(1, 3);

    assert_eq!(&half * &third, crate::ratio!(1, 6));
    assert_eq!(&half / &third, crate::ratio!(3, 2));
    assert_eq!(&half + &third, crate::ratio!(5, 6));
    assert_eq!(&half - &third, crate::ratio!(1, 6));
    assert_eq!(&third - &half, crate::ratio!(-1, 6));
    assert_eq!(-half.clone(), crate::ratio!(-1, 2));
    assert_eq!(half.clone() / crate::ratio!(1, 4), crate::ratio!(2));
    assert_eq!(vec![half.clone(), third.clone(), crate::ratio!(1, 6)].into_iter().sum::<Rational>(), Rational::one());
    assert_eq!([half, third].iter().sum::<Rational>(), crate::ratio!(5, 6));
}

#[test]
fn division_by_zero_test() {
    let half = crate::ratio!(1, 2);
    assert_eq!(half.try_div(&Rational::zero()), Err(RationalError::InvalidDenominator));
    assert_eq!(half.checked_div(&Rational::zero()), None);
    assert_eq!(Rational::zero().recip(), Err(RationalError::InvalidDenominator));
    assert_eq!(crate::ratio!(-2, 3).recip(), Ok(crate::ratio!(-3, 2)));
    assert_eq!(Rational::div_by(3, 0), Err(RationalError::InvalidDenominator));
    assert_eq!(7_i64.div_by(0), Err(RationalError::InvalidDenominator));
    assert_eq!(NumComponent::from(2).div_by(NumComponent::from(-4)), Ok(crate::ratio!(-1, 2)));
}

#[test]
#[should_panic]
fn division_operator_panics_on_zero() {
    let _ = crate::ratio!(1, 2) / Rational::zero();
}

#[test]
fn big_rational_interop_test() {
    let ours = crate::ratio!(-6, 8);
    let theirs = BigRational::try_from(ours.clone()).unwrap();
    assert_eq!(theirs, BigRational::new(NumComponent::from(-3), NumComponent::from(4)));
    assert_eq!(Rational::from(theirs), ours);
    assert_eq!(BigRational::try_from(crate::ratio!(1, 0)), Err(RationalError::InvalidDenominator));
}

#[test]
fn integer_part_test() {
    assert_eq!(crate::ratio!(7, 2).to_integer(), Some(NumComponent::from(3)));
    assert_eq!(crate::ratio!(-7, 2).to_integer(), Some(NumComponent::from(-3)));
    assert_eq!(crate::ratio!(1, 0).to_integer(), None);
    assert!(crate::ratio!(4, 2).is_integer());
    assert!(!crate::ratio!(4, 3).is_integer());
}
