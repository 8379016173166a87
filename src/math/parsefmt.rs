use std::fmt;
use std::str::FromStr;

use num_traits::{One, Signed};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{
    NumComponent,
    Rational,
    RationalError,
    base::NumberBase,
};

// only parse b10 numbers at the moment
pub fn parse(s: &str) -> Result<Rational, RationalError> {
    match s.split_once('/') {
        Some((numer, denom)) => {
            let numer = parse_int(numer)?;
            let denom = parse_int(denom)?;
            Rational::div_by(numer, denom)
        },
        None => Ok(Rational::from_integer(parse_int(s)?)),
    }
}

/// An optional sign followed by at least one ASCII digit.
pub fn parse_int(s: &str) -> Result<NumComponent, RationalError> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RationalError::MalformedNumber(s.to_owned()));
    }
    let magnitude = NumComponent::from_str(digits)
        .map_err(|_| RationalError::MalformedNumber(s.to_owned()))?;
    Ok(if s.starts_with('-') { -magnitude } else { magnitude })
}

pub fn fmt(n: &Rational, base: NumberBase) -> String {
    if n.denom().is_one() {
        fmt_int(n.numer(), base)
    } else {
        fmt_int(n.numer(), base) + "/" + fmt_int(n.denom(), base).as_str()
    }
}

fn fmt_int(n: &NumComponent, base: NumberBase) -> String {
    let prefix = match base {
        NumberBase::Binary => "0b",
        NumberBase::Decimal => "",
        NumberBase::Hexadecimal => "0x",
    };
    let digits = n.abs().to_str_radix(base.place_value()).to_uppercase();
    let sign = if n.is_negative() { "-" } else { "" };
    format!("{sign}{prefix}{digits}")
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(fmt(self, NumberBase::Decimal).as_str())
    }
}

impl FromStr for Rational {
    type Err = RationalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

impl Serialize for Rational {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        parse(text.as_str()).map_err(serde::de::Error::custom)
    }
}

#[test]
fn fmt_test() {
    assert_eq!(crate::ratio!(117, 1098).to_string(), "13/122");
    assert_eq!(crate::ratio!(-2, 4).to_string(), "-1/2");
    assert_eq!(crate::ratio!(2, 1).to_string(), "2");
    assert_eq!(crate::ratio!(3, -1).to_string(), "-3");
    assert_eq!(crate::ratio!(0, 5).to_string(), "0");

    assert_eq!(fmt(&crate::ratio!(1, 2), NumberBase::Binary), "0b1/0b10");
    assert_eq!(fmt(&crate::ratio!(-255, 16), NumberBase::Hexadecimal), "-0xFF/0x10");
    assert_eq!(fmt(&crate::ratio!(7), NumberBase::Hexadecimal), "0x7");
}

#[test]
fn parse_test() {
    assert_eq!(parse("1/2"), Ok(crate::ratio!(1, 2)));
    assert_eq!(parse("117/1098").map(|r| r.to_string()).as_deref(), Ok("13/122"));
    assert_eq!(parse("23"), Ok(crate::ratio!(23)));
    assert_eq!(parse("23").map(|r| r.denom().clone()), Ok(NumComponent::from(1)));
    assert_eq!(parse("-4/-6"), Ok(crate::ratio!(2, 3)));
    assert_eq!(parse("+5"), Ok(crate::ratio!(5)));
    assert_eq!("6/4".parse::<Rational>(), Ok(crate::ratio!(3, 2)));
}

#[test]
fn parse_errors_test() {
    assert_eq!(parse("5/0"), Err(RationalError::InvalidDenominator));
    assert_eq!(parse("5/-00"), Err(RationalError::InvalidDenominator));
    assert_eq!(parse("1.5"), Err(RationalError::MalformedNumber("1.5".to_owned())));
    assert_eq!(parse("1/2/3"), Err(RationalError::MalformedNumber("2/3".to_owned())));
    assert_eq!(parse(""), Err(RationalError::MalformedNumber("".to_owned())));
    assert_eq!(parse("-"), Err(RationalError::MalformedNumber("-".to_owned())));
    assert_eq!(parse(" 1"), Err(RationalError::MalformedNumber(" 1".to_owned())));
    assert_eq!(parse("1_000"), Err(RationalError::MalformedNumber("1_000".to_owned())));
    assert_eq!(parse("x/0"), Err(RationalError::MalformedNumber("x".to_owned())));
}

#[test]
fn serde_test() {
    let text = ron::to_string(&crate::ratio!(-6, 4)).unwrap();
    assert_eq!(text, "\"-3/2\"");
    assert_eq!(ron::from_str::<Rational>(text.as_str()).unwrap(), crate::ratio!(-3, 2));
    assert!(ron::from_str::<Rational>("\"1/0\"").is_err());
}
