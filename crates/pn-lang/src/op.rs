use std::fmt::{self, Display, Formatter};

#[cfg(feature = "tree-json")]
use serde::{Deserialize, Serialize};

/// The closed set of arithmetic operators, each with a fixed one-character
/// symbol.
#[cfg_attr(feature = "tree-json", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpKind {
    Mul,
    Div,
    Add,
    Sub,
    Rem,
    Pow,
}

impl OpKind {
    /// The textual symbol of this operator.
    pub const fn symbol(&self) -> char {
        match self {
            OpKind::Mul => '*',
            OpKind::Div => '/',
            OpKind::Add => '+',
            OpKind::Sub => '-',
            OpKind::Rem => '%',
            OpKind::Pow => '^',
        }
    }

    /// Exact-match reverse lookup. Anything other than the six
    /// one-character symbols is not an operator.
    pub fn from_symbol(text: &str) -> Option<Self> {
        match text {
            "*" => Some(OpKind::Mul),
            "/" => Some(OpKind::Div),
            "+" => Some(OpKind::Add),
            "-" => Some(OpKind::Sub),
            "%" => Some(OpKind::Rem),
            "^" => Some(OpKind::Pow),
            _ => None,
        }
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.symbol())
    }
}
