use serde::{Deserialize, Serialize};

/// Ones-place unit blocks rendered above and below the addition line.
///
/// `top + bottom` stays equal to `num1%10 + num2%10` while the learner
/// gathers blocks; after the carry completes the pile settles to
/// `{top: 0, bottom: (num1%10 + num2%10) % 10}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockDistribution {
    pub top: u8,
    pub bottom: u8,
}

/// The digits of `num1` as the subtraction screen displays them.
///
/// Starts as the raw place digits; once a borrow completes, `tens` drops
/// by one and `ones` gains ten. Validation and rendering read these, not
/// the raw problem digits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualDigits {
    pub tens: u8,
    pub ones: u8,
}
