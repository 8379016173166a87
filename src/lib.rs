//! # rationals
//!
//! Exact rational arithmetic over arbitrary precision integers, with parsing, formatting,
//! ranges and a small expression evaluator on top.
pub mod config;
pub mod math;
pub mod session;

pub use math::{
    DivBy,
    ExpressionError,
    IntegerProgression,
    NumComponent,
    Rational,
    RationalError,
    RationalRange,
    Step,
};
