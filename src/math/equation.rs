use std::collections::HashMap;
use std::fmt;

use super::base::NumberBase;
use super::operation::Operation;
use super::parsefmt;
use super::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operand {
    Number(Rational),
    Range(RationalRange),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Number(Rational),
    Truth(bool),
}

impl Outcome {
    /// Render in `base`, followed by a decimal approximation when `decimal_places` is given.
    pub fn display(&self, base: NumberBase, decimal_places: Option<u32>) -> String {
        match self {
            Outcome::Truth(truth) => truth.to_string(),
            Outcome::Number(n) => {
                let mut out = parsefmt::fmt(n, base);
                if let Some(decimal) = decimal_places.and_then(|places| n.to_decimal(places)) {
                    if !n.is_integer() {
                        out += format!(" ({decimal})").as_str();
                    }
                }
                out
            },
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display(NumberBase::Decimal, None).as_str())
    }
}

/// A single operand, or two operands joined by an operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Equation {
    pub left: Rational,
    pub operation: Option<Operation>,
    pub right: Option<Operand>,
}

impl Equation {
    /// Parse whitespace separated `left [op right]`. Names are looked up in `variables`.
    pub fn parse(line: &str, variables: &HashMap<String, Rational>) -> Result<Self, ExpressionError> {
        let mut tokens = line.split_whitespace();

        let left = match tokens.next() {
            Some(token) => resolve(token, variables)?,
            None => return Err(ExpressionError::Empty),
        };
        let operation = match tokens.next() {
            Some(symbol) => Operation::from_symbol(symbol)
                .ok_or_else(|| ExpressionError::UnknownOperation(symbol.to_owned()))?,
            None => return Ok(Self { left, operation: None, right: None }),
        };
        let right = match tokens.next() {
            Some(token) if operation == Operation::In => {
                Operand::Range(resolve_range(token, variables)?)
            },
            Some(token) if token.contains("..") => {
                return Err(ExpressionError::ExpectedNumber(operation.symbol().to_owned()))
            },
            Some(token) => Operand::Number(resolve(token, variables)?),
            None => return Err(ExpressionError::MissingOperand(operation.symbol().to_owned())),
        };

        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            return Err(ExpressionError::TrailingInput(rest.join(" ")));
        }

        Ok(Self { left, operation: Some(operation), right: Some(right) })
    }

    pub fn display(&self, base: NumberBase) -> String {
        let mut out = parsefmt::fmt(&self.left, base);

        if let Some(operation) = self.operation {
            out += format!(" {} ", operation.symbol()).as_str();
        }
        match &self.right {
            Some(Operand::Number(n)) => out += parsefmt::fmt(n, base).as_str(),
            Some(Operand::Range(range)) => {
                out += format!(
                    "{}..{}",
                    parsefmt::fmt(range.start(), base),
                    parsefmt::fmt(range.end(), base),
                ).as_str()
            },
            None => {},
        }

        out
    }

    pub fn eval(&self) -> Result<Outcome, ExpressionError> {
        let Some(operation) = self.operation else {
            return Ok(Outcome::Number(self.left.clone()));
        };
        log::debug!("evaluating {}", self.display(NumberBase::Decimal));

        let right = match &self.right {
            Some(Operand::Number(n)) => n,
            Some(Operand::Range(range)) if operation == Operation::In => {
                return Ok(Outcome::Truth(range.contains(&self.left)));
            },
            Some(Operand::Range(_)) => {
                return Err(ExpressionError::ExpectedNumber(operation.symbol().to_owned()));
            },
            None => return Err(ExpressionError::MissingOperand(operation.symbol().to_owned())),
        };
        let left = &self.left;

        let outcome = match operation {
            Operation::Add => Outcome::Number(left + right),
            Operation::Sub => Outcome::Number(left - right),
            Operation::Mul => Outcome::Number(left * right),
            Operation::Div => Outcome::Number(left.try_div(right)?),
            Operation::Less => Outcome::Truth(left < right),
            Operation::LessEqual => Outcome::Truth(left <= right),
            Operation::Greater => Outcome::Truth(left > right),
            Operation::GreaterEqual => Outcome::Truth(left >= right),
            Operation::Equal => Outcome::Truth(left == right),
            Operation::NotEqual => Outcome::Truth(left != right),
            Operation::In => {
                return Err(ExpressionError::ExpectedRange(operation.symbol().to_owned()));
            },
        };

        Ok(outcome)
    }
}

/// Identifiers start with a letter or `_` and continue with letters, digits or `_`.
pub fn is_name(token: &str) -> bool {
    token.starts_with(|c: char| c.is_alphabetic() || c == '_')
        && token.chars().all(|c| c.is_alphanumeric() || c == '_')
}

fn resolve(token: &str, variables: &HashMap<String, Rational>) -> Result<Rational, ExpressionError> {
    if is_name(token) {
        return variables
            .get(token)
            .cloned()
            .ok_or_else(|| ExpressionError::UnknownVariable(token.to_owned()));
    }
    Ok(parsefmt::parse(token)?)
}

fn resolve_range(
    token: &str,
    variables: &HashMap<String, Rational>,
) -> Result<RationalRange, ExpressionError> {
    match token.split_once("..") {
        Some((start, end)) if !start.is_empty() && !end.is_empty() => {
            Ok(RationalRange::new(resolve(start, variables)?, resolve(end, variables)?))
        },
        _ => Err(ExpressionError::MalformedRange(token.to_owned())),
    }
}

#[cfg(test)]
fn eval(line: &str) -> Result<Outcome, ExpressionError> {
    Equation::parse(line, &HashMap::new())?.eval()
}

#[test]
fn eval_number_test() {
    assert_eq!(eval("1/2 + 1/3"), Ok(Outcome::Number(crate::ratio!(5, 6))));
    assert_eq!(eval("1/2 - 1/3"), Ok(Outcome::Number(crate::ratio!(1, 6))));
    assert_eq!(eval("1/2 * 1/3"), Ok(Outcome::Number(crate::ratio!(1, 6))));
    assert_eq!(eval("1/2 / 1/4"), Ok(Outcome::Number(crate::ratio!(2))));
    assert_eq!(eval("  -4/6  "), Ok(Outcome::Number(crate::ratio!(-2, 3))));
}

#[test]
fn eval_truth_test() {
    assert_eq!(eval("1/2 < 2/3"), Ok(Outcome::Truth(true)));
    assert_eq!(eval("3/9 >= 1/2"), Ok(Outcome::Truth(false)));
    assert_eq!(eval("2000000000/4000000000 == 1/2"), Ok(Outcome::Truth(true)));
    assert_eq!(eval("1/2 != 2/4"), Ok(Outcome::Truth(false)));
    assert_eq!(eval("1/2 in 1/3..2/3"), Ok(Outcome::Truth(true)));
    assert_eq!(eval("1 in 1/3..2/3"), Ok(Outcome::Truth(false)));
}

#[test]
fn eval_errors_test() {
    assert_eq!(eval(""), Err(ExpressionError::Empty));
    assert_eq!(eval("1/2 /"), Err(ExpressionError::MissingOperand("/".to_owned())));
    assert_eq!(eval("1/2 % 3"), Err(ExpressionError::UnknownOperation("%".to_owned())));
    assert_eq!(eval("1 + 2 + 3"), Err(ExpressionError::TrailingInput("+ 3".to_owned())));
    assert_eq!(eval("1/2 / 0"), Err(ExpressionError::Rational(RationalError::InvalidDenominator)));
    assert_eq!(eval("5/0"), Err(ExpressionError::Rational(RationalError::InvalidDenominator)));
    assert_eq!(eval("x + 1"), Err(ExpressionError::UnknownVariable("x".to_owned())));
    assert_eq!(eval("1 in 2"), Err(ExpressionError::MalformedRange("2".to_owned())));
    assert_eq!(eval("1 + 0..2"), Err(ExpressionError::ExpectedNumber("+".to_owned())));
    assert_eq!(
        eval("1/2 + 1.5"),
        Err(ExpressionError::Rational(RationalError::MalformedNumber("1.5".to_owned())))
    );
}

#[test]
fn variables_test() {
    let mut variables = HashMap::new();
    variables.insert("half".to_owned(), crate::ratio!(1, 2));
    variables.insert("low".to_owned(), crate::ratio!(0));

    let equation = Equation::parse("half in low..1", &variables).unwrap();
    assert_eq!(equation.eval(), Ok(Outcome::Truth(true)));
    let equation = Equation::parse("half * half", &variables).unwrap();
    assert_eq!(equation.eval(), Ok(Outcome::Number(crate::ratio!(1, 4))));
}

#[test]
fn display_test() {
    let equation = Equation::parse("1/2 in 1/3..2/3", &HashMap::new()).unwrap();
    assert_eq!(equation.display(NumberBase::Decimal), "1/2 in 1/3..2/3");
    let equation = Equation::parse("-2/4 + 10", &HashMap::new()).unwrap();
    assert_eq!(equation.display(NumberBase::Hexadecimal), "-0x1/0x2 + 0xA");

    let outcome = Outcome::Number(crate::ratio!(2, 3));
    assert_eq!(outcome.display(NumberBase::Decimal, Some(4)), "2/3 (0.6667)");
    assert_eq!(Outcome::Number(crate::ratio!(4)).display(NumberBase::Decimal, Some(4)), "4");
    assert_eq!(Outcome::Truth(false).to_string(), "false");
}
