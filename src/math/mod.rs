pub mod base;
pub mod cmp;
pub mod equation;
pub mod error;
pub mod operation;
pub mod parsefmt;
pub mod range;
pub mod rational;

pub use error::{ExpressionError, RationalError};
pub use range::{IntegerProgression, RationalRange, Step};
pub use rational::{DivBy, Rational};

pub type NumComponent = num_bigint::BigInt;

/// Shorthand for building an already normalized rational from two integers.
#[macro_export]
macro_rules! ratio {
    ($numer:expr) => {
        $crate::math::Rational::from_integer($crate::math::NumComponent::from($numer))
    };
    ($numer:expr, $denom:expr) => {
        $crate::math::Rational::new(
            $crate::math::NumComponent::from($numer),
            $crate::math::NumComponent::from($denom),
        )
    };
}
