use thiserror::Error;

/// Error returned when a setup-form field cannot be parsed as an operand.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid operand '{input}'")]
pub struct ParseOperandError {
    input: String,
}

/// Parses a setup-form field into an operand.
///
/// Trims whitespace. The numeric range is *not* checked here; range and
/// operation constraints are the controller's job so that every rejection
/// carries its learner-facing message.
pub fn parse_operand(s: &str) -> Result<i32, ParseOperandError> {
    s.trim().parse().map_err(|_| {
        tracing::debug!(input = %s, "operand is not a number");
        ParseOperandError {
            input: s.to_string(),
        }
    })
}
