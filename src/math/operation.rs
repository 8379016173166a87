#[derive(Clone, Debug, PartialEq, Eq, Copy)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    Equal,
    NotEqual,
    In,
}

impl Operation {
    pub fn symbol(&self) -> &str {
        match self {
            Operation::Add => "+",
            Operation::Sub => "-",
            Operation::Mul => "*",
            Operation::Div => "/",
            Operation::Less => "<",
            Operation::LessEqual => "<=",
            Operation::Greater => ">",
            Operation::GreaterEqual => ">=",
            Operation::Equal => "==",
            Operation::NotEqual => "!=",
            Operation::In => "in",
        }
    }

    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Sub),
            "*" => Some(Operation::Mul),
            "/" => Some(Operation::Div),
            "<" => Some(Operation::Less),
            "<=" => Some(Operation::LessEqual),
            ">" => Some(Operation::Greater),
            ">=" => Some(Operation::GreaterEqual),
            "==" => Some(Operation::Equal),
            "!=" => Some(Operation::NotEqual),
            "in" => Some(Operation::In),
            _ => None,
        }
    }

    /// Whether the result is a truth value rather than a number.
    pub fn is_relation(&self) -> bool {
        !matches!(self, Operation::Add | Operation::Sub | Operation::Mul | Operation::Div)
    }
}

#[test]
fn symbol_round_trip() {
    for symbol in ["+", "-", "*", "/", "<", "<=", ">", ">=", "==", "!=", "in"] {
        let operation = Operation::from_symbol(symbol).unwrap();
        assert_eq!(operation.symbol(), symbol);
    }
    assert_eq!(Operation::from_symbol("%"), None);
    assert!(Operation::In.is_relation());
    assert!(!Operation::Div.is_relation());
}
