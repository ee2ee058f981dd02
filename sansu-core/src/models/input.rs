use serde::{Deserialize, Serialize};

/// The two answer fields addressed by learner events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Ones,
    Tens,
}

/// The learner's partial answer, one digit string per place value.
///
/// Each field holds zero or one ASCII digit. Reset to empty on every new
/// problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInput {
    pub ones: String,
    pub tens: String,
}

impl UserInput {
    /// Both place values have been entered.
    pub fn is_complete(&self) -> bool {
        !self.ones.is_empty() && !self.tens.is_empty()
    }

    /// The submitted answer, composed as `tens‖ones` and parsed as a
    /// number. `None` until both digits are present.
    pub fn answer_value(&self) -> Option<u8> {
        if !self.is_complete() {
            return None;
        }
        format!("{}{}", self.tens, self.ones).parse().ok()
    }

    pub fn clear(&mut self) {
        self.ones.clear();
        self.tens.clear();
    }
}
