mod blocks;
mod input;
mod operation;
mod problem;
mod step;

pub use blocks::{BlockDistribution, VisualDigits};
pub use input::{InputField, UserInput};
pub use operation::Operation;
pub use problem::Problem;
pub use step::{CalculationStep, initial_step};
