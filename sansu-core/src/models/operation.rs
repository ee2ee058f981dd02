use serde::{Deserialize, Serialize};

/// Which kind of two-digit problem the learner practices.
///
/// Selected once per session before problem setup; determines the
/// regrouping rule (carry vs. borrow) and the randomizer constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Subtraction => "subtraction",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "addition" => Some(Self::Addition),
            "subtraction" => Some(Self::Subtraction),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Addition => "+",
            Self::Subtraction => "-",
        }
    }

    /// Learner-facing Korean name of the operation.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Addition => "덧셈",
            Self::Subtraction => "뺄셈",
        }
    }

    /// Applies the operation to two in-range operands.
    ///
    /// Callers guarantee the Problem invariants (`num1 + num2 < 100` for
    /// addition, `num1 >= num2` for subtraction), so this never overflows.
    pub fn apply(&self, num1: u8, num2: u8) -> u8 {
        match self {
            Self::Addition => num1 + num2,
            Self::Subtraction => num1 - num2,
        }
    }
}
