//! Core state machine for the step-by-step addition/subtraction trainer.
//!
//! The [`ProblemController`] owns one active problem and every piece of
//! per-problem state: the calculation step, the learner's partial answer,
//! the carry/borrow regrouping model and the transient feedback flags.
//! A rendering host draws the snapshot the accessors expose and forwards
//! learner events into the mutators; delayed effects are exchanged through
//! the timer contract in [`timer`].

pub mod controller;
pub mod generator;
pub mod messages;
pub mod models;
pub mod timer;

pub use controller::ProblemController;
pub use generator::ManualProblemError;
pub use models::{
    BlockDistribution, CalculationStep, InputField, Operation, Problem, UserInput, VisualDigits,
    initial_step,
};
pub use timer::{ScheduledTimer, TimerKind, TimerToken};
