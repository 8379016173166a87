use rationals::math::parsefmt::parse;
use rationals::math::range::factors;
use rationals::{DivBy, IntegerProgression, NumComponent, Rational, RationalError};

fn r(text: &str) -> Rational {
    parse(text).unwrap()
}

fn ints(values: &[i64]) -> Vec<NumComponent> {
    values.iter().map(|&v| NumComponent::from(v)).collect()
}

#[test]
fn equality_ignores_representation() {
    let r1 = 1_i32.div_by(2).unwrap();
    let r2 = 2_000_000_000_i64.div_by(4_000_000_000).unwrap();
    assert_eq!(r1, r2);
    assert_eq!(rationals::ratio!(1, 2), rationals::ratio!(2, 4));
}

#[test]
fn canonical_strings() {
    assert_eq!(2_i32.div_by(1).unwrap().to_string(), "2");
    assert_eq!(3_i32.div_by(1).unwrap().to_string(), "3");
    assert_eq!(1_i32.div_by(2).unwrap().to_string(), "1/2");
    assert_eq!(2_i32.div_by(4).unwrap().to_string(), "1/2");
    assert_eq!((-2_i32).div_by(4).unwrap().to_string(), "-1/2");
    assert_eq!(r("1/2").to_string(), "1/2");
    assert_eq!(r("117/1098").to_string(), "13/122");
    assert_eq!(r("23").to_string(), "23");
    assert_eq!(r("23").denom(), &NumComponent::from(1));
}

#[test]
fn arithmetic_scenarios() {
    let half = 1_i32.div_by(2).unwrap();
    let third = 1_i32.div_by(3).unwrap();

    assert_eq!((&half * &third).to_string(), "1/6");
    assert_eq!((&half / &third).to_string(), "3/2");
    assert_eq!((&half + &third).to_string(), "5/6");
    assert_eq!((&half - &third).to_string(), "1/6");

    assert_eq!(r("1/2") - r("1/3"), r("1/6"));
    assert_eq!(r("1/2") + r("1/3"), r("5/6"));
    assert_eq!(-half.clone(), (-1_i32).div_by(2).unwrap());
    assert_eq!(&half * &third, r("1/6"));
    assert_eq!(half / 1_i32.div_by(4).unwrap(), r("2"));
}

#[test]
fn ordering_scenarios() {
    assert!(1_i32.div_by(2).unwrap() < 2_i32.div_by(3).unwrap());
    assert!(3_i32.div_by(9).unwrap() < 1_i32.div_by(2).unwrap());

    let range = 1_i32.div_by(3).unwrap().range_to(2_i32.div_by(3).unwrap());
    assert!(range.contains(&1_i32.div_by(2).unwrap()));
}

#[test]
fn values_beyond_native_integers() {
    let numer: NumComponent = "912016490186296920119201192141970416029".parse().unwrap();
    let denom: NumComponent = "1824032980372593840238402384283940832058".parse().unwrap();

    assert_eq!(numer.div_by(denom).unwrap(), 1_i32.div_by(2).unwrap());
    assert_eq!(
        r("982451653/982451654").to_string(),
        "982451653/982451654"
    );
}

#[test]
fn zero_denominators_are_rejected() {
    for numer in [-3_i64, 0, 1, 42] {
        assert_eq!(numer.div_by(0), Err(RationalError::InvalidDenominator));
    }
    assert_eq!(parse("5/0"), Err(RationalError::InvalidDenominator));
    assert_eq!(r("1/2").try_div(&r("0")), Err(RationalError::InvalidDenominator));
}

#[test]
fn progressions() {
    let ascending = IntegerProgression::range_to(NumComponent::from(1), NumComponent::from(4));
    assert_eq!(ascending.iter().collect::<Vec<_>>(), ints(&[1, 2, 3, 4]));

    let descending = IntegerProgression::down_to(NumComponent::from(4), NumComponent::from(1));
    assert_eq!(descending.iter().collect::<Vec<_>>(), ints(&[4, 3, 2, 1]));

    assert_eq!(factors(&NumComponent::from(8)), ints(&[1, 2, 4, 8]));
}
