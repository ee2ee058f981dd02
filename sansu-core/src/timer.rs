//! Delayed-action contract between the controller and its host.
//!
//! The controller never reads a clock. Mutators that need a delayed
//! follow-up enqueue a [`ScheduledTimer`]; the host drains the queue,
//! waits out the delay with whatever mechanism it has, then hands the
//! token back through `ProblemController::fire`. Tokens carry the epoch
//! of the problem that scheduled them, so a timer that outlives its
//! problem lands as a no-op instead of a stale-state write.

use std::time::Duration;

/// How long the wrong-answer shake flag stays set.
pub const WRONG_FLASH: Duration = Duration::from_millis(500);

/// Fixed duration of the carry/borrow regrouping animation.
pub const REGROUP_ANIMATION: Duration = Duration::from_millis(2500);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Clear the transient wrong/shake flag.
    ClearWrongFlag,
    /// The carry animation has played out; settle the blocks.
    FinishCarry,
    /// The borrow animation has played out; apply the borrowed digits.
    FinishBorrow,
}

/// Identifies one scheduled firing.
///
/// The `epoch` pins the token to the problem that was current when it was
/// scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub(crate) kind: TimerKind,
    pub(crate) epoch: u64,
}

impl TimerToken {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// A fire-once delayed action the host must arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    pub delay: Duration,
}
