use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum NumberBase {
    #[default]
    Decimal,
    Binary,
    Hexadecimal,
}

impl NumberBase {
    pub fn place_value(&self) -> u32 {
        match self {
            NumberBase::Binary => 2,
            NumberBase::Decimal => 10,
            NumberBase::Hexadecimal => 16,
        }
    }
}
