use serde::{Deserialize, Serialize};

use super::Operation;

/// Which part of the calculation the learner is working on.
///
/// Exactly one value is active at a time; every UI region keys its
/// enabled/highlight state off this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalculationStep {
    /// Addition: gather ones blocks until ten of them regroup.
    MakeTen,
    /// Subtraction: tap the tens place to borrow.
    Borrow,
    /// Enter the ones digit of the answer.
    Ones,
    /// Enter the tens digit of the answer.
    Tens,
    /// A submitted answer is being compared.
    Checking,
    /// Solved; no further edits until the next problem.
    Correct,
}

impl CalculationStep {
    /// True while the learner is expected to regroup before any digit entry.
    pub fn is_regrouping(&self) -> bool {
        matches!(self, Self::MakeTen | Self::Borrow)
    }
}

/// Where a fresh problem starts.
///
/// Problems that need no regrouping (possible via manual entry) skip the
/// regrouping step entirely.
pub fn initial_step(op: Operation, needs_regrouping: bool) -> CalculationStep {
    match (op, needs_regrouping) {
        (Operation::Addition, true) => CalculationStep::MakeTen,
        (Operation::Subtraction, true) => CalculationStep::Borrow,
        (_, false) => CalculationStep::Ones,
    }
}
