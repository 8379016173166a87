#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RationalError {
    #[error("Denominator must not be zero")]
    InvalidDenominator,
    #[error("Malformed number: \"{0}\"")]
    MalformedNumber(String),
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error(transparent)]
    Rational(#[from] RationalError),
    #[error("Empty expression")]
    Empty,
    #[error("Unknown operation: \"{0}\"")]
    UnknownOperation(String),
    #[error("Missing operand after \"{0}\"")]
    MissingOperand(String),
    #[error("Unexpected input after expression: \"{0}\"")]
    TrailingInput(String),
    #[error("Unknown variable: \"{0}\"")]
    UnknownVariable(String),
    #[error("Malformed range: \"{0}\" (expected `start..end`)")]
    MalformedRange(String),
    #[error("Operation \"{0}\" needs a number on its right side")]
    ExpectedNumber(String),
    #[error("Operation \"{0}\" needs a range on its right side")]
    ExpectedRange(String),
}
