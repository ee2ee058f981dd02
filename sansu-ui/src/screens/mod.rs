mod operation_select;
mod problem;
mod problem_setup;

pub use operation_select::OperationSelectScreen;
pub use problem::ProblemScreen;
pub use problem_setup::ProblemSetupScreen;
