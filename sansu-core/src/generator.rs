//! Problem generation and manual-input validation.
//!
//! Random problems are drawn by rejection sampling so that every generated
//! problem forces the regrouping lesson: additions always carry,
//! subtractions always borrow. Manually entered problems only have to be
//! well-formed; whether they regroup is up to the person typing them in.

use rand::Rng;
use thiserror::Error;
use tracing::debug;

use crate::models::{Operation, Problem};

/// Why a manually entered problem was rejected.
///
/// Display strings are the learner-facing Korean messages shown on the
/// setup form.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ManualProblemError {
    #[error("0부터 99까지의 숫자를 입력해주세요.")]
    OperandOutOfRange,

    #[error("합이 100 미만인 문제를 입력해주세요.")]
    SumTooLarge,

    #[error("첫 번째 숫자가 두 번째 숫자보다 크거나 같아야 해요.")]
    MinuendTooSmall,
}

/// Draws a random problem satisfying the operation's constraints.
///
/// Operands come uniformly from `10..=99` and are resampled until they
/// fit; the contract is "keep resampling until valid", not a bounded
/// attempt count. With this input range the expected number of retries
/// stays small.
///
/// - Addition: `num1 + num2 < 100` and a carry is required.
/// - Subtraction: `num1 > num2` and a borrow is required.
pub fn generate(op: Operation, rng: &mut impl Rng) -> Problem {
    loop {
        let num1: u8 = rng.random_range(10..=99);
        let num2: u8 = rng.random_range(10..=99);

        let valid = match op {
            Operation::Addition => {
                num1 + num2 < 100 && (num1 % 10) + (num2 % 10) >= 10
            }
            Operation::Subtraction => num1 > num2 && (num1 % 10) < (num2 % 10),
        };

        if valid {
            debug!(op = op.as_str(), num1, num2, "generated problem");
            return Problem::new(op, num1, num2);
        }
    }
}

/// Validates learner-supplied operands and builds the problem.
///
/// Unlike [`generate`], a valid manual problem is *not* required to need
/// regrouping; a no-carry addition simply starts at the ones step.
pub fn validate_manual(
    op: Operation,
    num1: i32,
    num2: i32,
) -> Result<Problem, ManualProblemError> {
    if !(0..=99).contains(&num1) || !(0..=99).contains(&num2) {
        return Err(ManualProblemError::OperandOutOfRange);
    }

    let (num1, num2) = (num1 as u8, num2 as u8);
    match op {
        Operation::Addition if i32::from(num1) + i32::from(num2) >= 100 => {
            Err(ManualProblemError::SumTooLarge)
        }
        Operation::Subtraction if num1 < num2 => Err(ManualProblemError::MinuendTooSmall),
        _ => Ok(Problem::new(op, num1, num2)),
    }
}
