//! The problem controller: one state machine over the active problem.
//!
//! Every learner event enters through a named mutator; the rendering host
//! reads the resulting snapshot through the accessors. All mutators are
//! synchronous — delayed effects (shake reset, animation completion) go
//! through the timer contract in [`crate::timer`].

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::generator::{self, ManualProblemError};
use crate::messages;
use crate::models::{
    BlockDistribution, CalculationStep, InputField, Operation, Problem, UserInput, VisualDigits,
    initial_step,
};
use crate::timer::{REGROUP_ANIMATION, ScheduledTimer, TimerKind, TimerToken, WRONG_FLASH};

pub struct ProblemController {
    rng: StdRng,
    operation: Option<Operation>,
    problem: Problem,
    user_input: UserInput,
    step: CalculationStep,
    is_correct: Option<bool>,
    is_wrong: bool,
    feedback: &'static str,
    needs_regrouping: bool,

    // Addition: the ones blocks the learner gathers into a ten.
    blocks: BlockDistribution,
    carry_revealed: bool,
    carry_animating: bool,

    // Subtraction: the borrowed rendering of num1.
    borrowed: bool,
    borrow_animating: bool,
    num1_visual: VisualDigits,

    // Bumped on every problem reset; timers from older epochs are stale.
    epoch: u64,
    scheduled: Vec<ScheduledTimer>,
}

impl ProblemController {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic controller for tests and the `--seed` flag.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rng,
            operation: None,
            problem: Problem::default(),
            user_input: UserInput::default(),
            step: CalculationStep::MakeTen,
            is_correct: None,
            is_wrong: false,
            feedback: "",
            needs_regrouping: false,
            blocks: BlockDistribution::default(),
            carry_revealed: false,
            carry_animating: false,
            borrowed: false,
            borrow_animating: false,
            num1_visual: VisualDigits::default(),
            epoch: 0,
            scheduled: Vec::new(),
        }
    }

    // ─── Read accessors ──────────────────────────────────────────────────

    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    pub fn user_input(&self) -> &UserInput {
        &self.user_input
    }

    pub fn step(&self) -> CalculationStep {
        self.step
    }

    pub fn is_correct(&self) -> Option<bool> {
        self.is_correct
    }

    pub fn is_wrong(&self) -> bool {
        self.is_wrong
    }

    pub fn feedback_message(&self) -> &'static str {
        self.feedback
    }

    pub fn needs_regrouping(&self) -> bool {
        self.needs_regrouping
    }

    pub fn block_distribution(&self) -> BlockDistribution {
        self.blocks
    }

    /// The carried "+1" block is visible in the tens column.
    pub fn carry_revealed(&self) -> bool {
        self.carry_revealed
    }

    pub fn is_carry_animating(&self) -> bool {
        self.carry_animating
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    pub fn is_borrow_animating(&self) -> bool {
        self.borrow_animating
    }

    /// The digits of `num1` as the subtraction screen shows them
    /// (borrow-adjusted once the borrow completes).
    pub fn num1_visual(&self) -> VisualDigits {
        self.num1_visual
    }

    /// While true, digit entry, block drops and submission are all
    /// rejected; the regrouping animation owns the screen.
    pub fn is_animating(&self) -> bool {
        self.carry_animating || self.borrow_animating
    }

    pub fn can_check_answer(&self) -> bool {
        self.user_input.is_complete()
            && !self.is_animating()
            && !self.step.is_regrouping()
            && self.step != CalculationStep::Correct
    }

    // ─── Problem lifecycle ───────────────────────────────────────────────

    pub fn select_operation(&mut self, op: Operation) {
        self.operation = Some(op);
    }

    /// Draws a fresh random problem and resets every per-problem state.
    pub fn generate_new_problem(&mut self, op: Operation) {
        let problem = generator::generate(op, &mut self.rng);
        self.reset_problem_state(op, problem);
    }

    /// Starts a learner-specified problem, or reports why it is invalid.
    /// On error nothing is mutated and the learner stays on the setup form.
    pub fn start_manual_problem(
        &mut self,
        op: Operation,
        num1: i32,
        num2: i32,
    ) -> Result<(), ManualProblemError> {
        let problem = generator::validate_manual(op, num1, num2)?;
        self.reset_problem_state(op, problem);
        Ok(())
    }

    fn reset_problem_state(&mut self, op: Operation, problem: Problem) {
        self.epoch += 1;
        self.scheduled.clear();

        self.operation = Some(op);
        self.problem = problem;
        self.user_input.clear();
        self.is_correct = None;
        self.is_wrong = false;
        self.feedback = "";
        self.needs_regrouping = problem.needs_regrouping(op);
        self.carry_revealed = false;
        self.carry_animating = false;
        self.borrowed = false;
        self.borrow_animating = false;
        self.num1_visual = VisualDigits {
            tens: problem.num1_tens(),
            ones: problem.num1_ones(),
        };
        self.blocks = match op {
            Operation::Addition => BlockDistribution {
                top: problem.num1_ones(),
                bottom: problem.num2_ones(),
            },
            Operation::Subtraction => BlockDistribution::default(),
        };
        self.step = initial_step(op, self.needs_regrouping);

        debug!(
            op = op.as_str(),
            num1 = problem.num1,
            num2 = problem.num2,
            step = ?self.step,
            "problem reset"
        );
    }

    // ─── Learner input ───────────────────────────────────────────────────

    /// Stores a keystroke into one of the answer fields.
    ///
    /// Keeps the last digit typed and discards anything that is not a
    /// digit. A non-empty ones digit is validated immediately; the field
    /// stays editable so the learner can correct it in place.
    pub fn set_user_input(&mut self, field: InputField, value: &str) {
        if self.is_animating() || self.step == CalculationStep::Correct {
            return;
        }
        let Some(digit) = sanitize_digit(value) else {
            return;
        };

        match field {
            InputField::Ones => {
                if !matches!(self.step, CalculationStep::Ones | CalculationStep::Tens) {
                    return;
                }
                self.user_input.ones = digit;
                if !self.user_input.ones.is_empty() {
                    self.validate_ones();
                }
            }
            InputField::Tens => {
                if self.step != CalculationStep::Tens {
                    return;
                }
                self.user_input.tens = digit;
            }
        }
    }

    /// Focus-driven step change (clicking an answer field). Only moves
    /// between the two digit-entry steps; regrouping and the solved state
    /// cannot be escaped this way.
    pub fn set_step(&mut self, step: CalculationStep) {
        if self.is_animating() {
            return;
        }
        let entry_steps = |s: CalculationStep| {
            matches!(s, CalculationStep::Ones | CalculationStep::Tens)
        };
        if entry_steps(self.step) && entry_steps(step) {
            self.step = step;
        }
    }

    fn validate_ones(&mut self) {
        let Some(op) = self.operation else {
            return;
        };
        let Ok(entered) = self.user_input.ones.parse::<i16>() else {
            return;
        };

        let o1 = i16::from(self.problem.num1_ones());
        let o2 = i16::from(self.problem.num2_ones());
        let expected = match op {
            Operation::Addition => (o1 + o2) % 10,
            // Strictly follows the borrowed flag: before the borrow the
            // raw digits are compared, after it the regrouped ones.
            Operation::Subtraction if self.borrowed => o1 + 10 - o2,
            Operation::Subtraction => o1 - o2,
        };

        if entered == expected {
            self.is_wrong = false;
            self.step = CalculationStep::Tens;
        } else {
            self.flag_wrong(messages::CHECK_ONES);
        }
    }

    /// Compares the composed two-digit answer against the problem's.
    pub fn check_answer(&mut self) {
        if !self.can_check_answer() {
            return;
        }
        let submitted_from = self.step;
        self.step = CalculationStep::Checking;

        if self.user_input.answer_value() == Some(self.problem.answer) {
            self.is_correct = Some(true);
            self.is_wrong = false;
            self.feedback = messages::CORRECT;
            self.step = CalculationStep::Correct;
            debug!(answer = self.problem.answer, "solved");
        } else {
            self.is_correct = Some(false);
            self.flag_wrong(messages::TRY_AGAIN);
            // Inputs are kept for correction; the learner resumes where
            // they submitted from.
            self.step = submitted_from;
        }
    }

    // ─── Regrouping engine ───────────────────────────────────────────────

    /// Moves one ones block from the bottom pile to the top pile.
    ///
    /// No-op when the bottom pile is empty. Reaching ten on a carry
    /// problem starts the carry animation; emptying the bottom pile on a
    /// no-carry problem settles the blocks and moves on to digit entry.
    pub fn handle_block_drop(&mut self) {
        if self.operation != Some(Operation::Addition)
            || self.is_animating()
            || self.step == CalculationStep::Correct
            || self.blocks.bottom == 0
        {
            return;
        }

        self.blocks.top += 1;
        self.blocks.bottom -= 1;

        if self.needs_regrouping && self.blocks.top == 10 {
            self.carry_animating = true;
            self.schedule(TimerKind::FinishCarry, REGROUP_ANIMATION);
        } else if !self.needs_regrouping && self.blocks.bottom == 0 {
            self.blocks = BlockDistribution {
                top: self.problem.num1_ones() + self.problem.num2_ones(),
                bottom: 0,
            };
            self.step = CalculationStep::Ones;
        }
    }

    /// Tap on the tens place of `num1`; only armed while the machine sits
    /// in the borrow step.
    pub fn handle_borrow(&mut self) {
        if self.step != CalculationStep::Borrow
            || !self.needs_regrouping
            || self.is_animating()
        {
            return;
        }
        self.borrow_animating = true;
        self.schedule(TimerKind::FinishBorrow, REGROUP_ANIMATION);
    }

    /// Settles the blocks after the carry animation has played out.
    /// No-op unless a carry animation is actually in flight, so duplicate
    /// or stray completions cannot corrupt state.
    pub fn complete_carry_animation(&mut self) {
        if !self.carry_animating {
            return;
        }
        let remaining = (self.problem.num1_ones() + self.problem.num2_ones()) % 10;
        self.blocks = BlockDistribution {
            top: 0,
            bottom: remaining,
        };
        self.carry_animating = false;
        self.carry_revealed = true;
        self.step = CalculationStep::Ones;
        debug!(remaining, "carry complete");
    }

    /// Applies the borrowed digits after the borrow animation has played
    /// out. No-op unless a borrow animation is in flight.
    pub fn complete_borrow_animation(&mut self) {
        if !self.borrow_animating {
            return;
        }
        self.borrowed = true;
        self.num1_visual = VisualDigits {
            tens: self.problem.num1_tens() - 1,
            ones: self.problem.num1_ones() + 10,
        };
        self.borrow_animating = false;
        self.step = CalculationStep::Ones;
        debug!(
            tens = self.num1_visual.tens,
            ones = self.num1_visual.ones,
            "borrow complete"
        );
    }

    // ─── Timer plumbing ──────────────────────────────────────────────────

    /// Hands the host the delayed actions queued since the last drain.
    pub fn take_scheduled(&mut self) -> Vec<ScheduledTimer> {
        std::mem::take(&mut self.scheduled)
    }

    /// Applies a timer that has elapsed. Tokens scheduled under a
    /// previous problem are ignored.
    pub fn fire(&mut self, token: TimerToken) {
        if token.epoch != self.epoch {
            trace!(kind = ?token.kind(), "stale timer ignored");
            return;
        }
        match token.kind() {
            TimerKind::ClearWrongFlag => self.is_wrong = false,
            TimerKind::FinishCarry => self.complete_carry_animation(),
            TimerKind::FinishBorrow => self.complete_borrow_animation(),
        }
    }

    fn schedule(&mut self, kind: TimerKind, delay: Duration) {
        self.scheduled.push(ScheduledTimer {
            token: TimerToken {
                kind,
                epoch: self.epoch,
            },
            delay,
        });
    }

    fn flag_wrong(&mut self, message: &'static str) {
        self.is_wrong = true;
        self.feedback = message;
        self.schedule(TimerKind::ClearWrongFlag, WRONG_FLASH);
    }
}

impl Default for ProblemController {
    fn default() -> Self {
        Self::new()
    }
}

/// Keeps the last digit of a keystroke burst, mirroring single-character
/// number inputs that replace rather than append. Empty input clears the
/// field; input with no digit at all is rejected as `None`.
fn sanitize_digit(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some(String::new());
    }
    value
        .chars()
        .filter(|c| c.is_ascii_digit())
        .next_back()
        .map(|c| c.to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// A controller with a known manual problem loaded.
    fn with_problem(op: Operation, num1: i32, num2: i32) -> ProblemController {
        let mut c = ProblemController::seeded(1);
        c.start_manual_problem(op, num1, num2).unwrap();
        c
    }

    fn enter(c: &mut ProblemController, field: InputField, value: &str) {
        c.set_user_input(field, value);
    }

    // =========================================================================
    // Problem lifecycle
    // =========================================================================

    #[test]
    fn generate_always_lands_on_the_regrouping_step() {
        let mut c = ProblemController::seeded(3);

        for _ in 0..50 {
            c.generate_new_problem(Operation::Addition);
            assert_eq!(c.step(), CalculationStep::MakeTen);
            assert!(!c.is_animating());
            assert_eq!(c.is_correct(), None);

            c.generate_new_problem(Operation::Subtraction);
            assert_eq!(c.step(), CalculationStep::Borrow);
            assert!(!c.is_animating());
        }
    }

    #[test]
    fn manual_problem_without_carry_skips_to_ones() {
        let c = with_problem(Operation::Addition, 21, 34);

        assert_eq!(c.step(), CalculationStep::Ones);
        assert!(!c.needs_regrouping());
    }

    #[test]
    fn manual_rejection_leaves_state_untouched() {
        let mut c = with_problem(Operation::Addition, 28, 34);

        let err = c.start_manual_problem(Operation::Addition, 50, 60);

        assert_eq!(err, Err(ManualProblemError::SumTooLarge));
        assert_eq!(c.problem().num1, 28);
        assert_eq!(c.step(), CalculationStep::MakeTen);
    }

    #[test]
    fn new_problem_resets_transient_state_atomically() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        c.fire_all();
        enter(&mut c, InputField::Ones, "2");
        enter(&mut c, InputField::Tens, "9");
        c.check_answer(); // wrong

        c.generate_new_problem(Operation::Addition);

        assert_eq!(c.user_input(), &UserInput::default());
        assert!(!c.is_wrong());
        assert_eq!(c.is_correct(), None);
        assert_eq!(c.feedback_message(), "");
        assert!(!c.carry_revealed());
        assert_eq!(c.step(), CalculationStep::MakeTen);
    }

    // =========================================================================
    // Addition: carry path (scenario: 28 + 34)
    // =========================================================================

    #[test]
    fn carry_triggers_when_top_pile_reaches_ten() {
        let mut c = with_problem(Operation::Addition, 28, 34);

        assert_eq!(c.step(), CalculationStep::MakeTen);
        assert_eq!(c.block_distribution(), BlockDistribution { top: 8, bottom: 4 });

        c.handle_block_drop();
        assert_eq!(c.block_distribution(), BlockDistribution { top: 9, bottom: 3 });
        assert!(!c.is_carry_animating());

        c.handle_block_drop();
        assert!(c.is_carry_animating());
        assert_eq!(c.step(), CalculationStep::MakeTen);

        c.complete_carry_animation();
        assert_eq!(c.block_distribution(), BlockDistribution { top: 0, bottom: 2 });
        assert!(c.carry_revealed());
        assert_eq!(c.step(), CalculationStep::Ones);
    }

    #[test]
    fn no_carry_addition_settles_blocks_without_animation() {
        let mut c = with_problem(Operation::Addition, 21, 34);

        for _ in 0..4 {
            c.handle_block_drop();
        }

        assert!(!c.is_carry_animating());
        assert_eq!(c.block_distribution(), BlockDistribution { top: 5, bottom: 0 });
        assert_eq!(c.step(), CalculationStep::Ones);
    }

    #[test]
    fn block_drop_is_a_no_op_on_empty_bottom_pile() {
        let mut c = with_problem(Operation::Addition, 21, 34);
        for _ in 0..4 {
            c.handle_block_drop();
        }

        c.handle_block_drop();

        assert_eq!(c.block_distribution(), BlockDistribution { top: 5, bottom: 0 });
    }

    #[test]
    fn correct_ones_digit_advances_to_tens() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        c.complete_carry_animation();

        enter(&mut c, InputField::Ones, "2"); // (8 + 4) % 10

        assert_eq!(c.step(), CalculationStep::Tens);
        assert!(!c.is_wrong());
    }

    #[test]
    fn wrong_ones_digit_flags_and_stays_editable() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        c.complete_carry_animation();

        enter(&mut c, InputField::Ones, "7");

        assert_eq!(c.step(), CalculationStep::Ones);
        assert!(c.is_wrong());
        assert_eq!(c.feedback_message(), messages::CHECK_ONES);

        // Immediate correction is allowed.
        enter(&mut c, InputField::Ones, "2");
        assert_eq!(c.step(), CalculationStep::Tens);
        assert!(!c.is_wrong());
    }

    // =========================================================================
    // Subtraction: borrow path (scenario: 52 - 37)
    // =========================================================================

    #[test]
    fn borrow_tap_runs_the_animation_and_adjusts_digits() {
        let mut c = with_problem(Operation::Subtraction, 52, 37);

        assert_eq!(c.step(), CalculationStep::Borrow);
        assert_eq!(c.num1_visual(), VisualDigits { tens: 5, ones: 2 });

        c.handle_borrow();
        assert!(c.is_borrow_animating());
        assert!(!c.is_borrowed());

        c.complete_borrow_animation();
        assert!(c.is_borrowed());
        assert_eq!(c.num1_visual(), VisualDigits { tens: 4, ones: 12 });
        assert_eq!(c.step(), CalculationStep::Ones);
    }

    #[test]
    fn borrow_tap_is_ignored_outside_the_borrow_step() {
        let mut c = with_problem(Operation::Subtraction, 57, 32); // no borrow

        assert_eq!(c.step(), CalculationStep::Ones);
        c.handle_borrow();

        assert!(!c.is_borrow_animating());
    }

    #[test]
    fn subtraction_walkthrough_to_correct() {
        let mut c = with_problem(Operation::Subtraction, 52, 37);
        c.handle_borrow();
        c.complete_borrow_animation();

        enter(&mut c, InputField::Ones, "5"); // 12 - 7
        assert_eq!(c.step(), CalculationStep::Tens);

        enter(&mut c, InputField::Tens, "1"); // 4 - 3
        assert!(c.can_check_answer());
        c.check_answer();

        assert_eq!(c.is_correct(), Some(true));
        assert_eq!(c.step(), CalculationStep::Correct);
        assert_eq!(c.feedback_message(), messages::CORRECT);
    }

    #[test]
    fn ones_validation_without_borrow_uses_raw_digits() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);

        enter(&mut c, InputField::Ones, "5"); // 7 - 2

        assert_eq!(c.step(), CalculationStep::Tens);
        assert!(!c.is_wrong());
    }

    // =========================================================================
    // Answer checking
    // =========================================================================

    #[test]
    fn wrong_answer_keeps_step_and_inputs_for_retry() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        c.complete_carry_animation();
        enter(&mut c, InputField::Ones, "2");
        enter(&mut c, InputField::Tens, "5");

        c.check_answer(); // 52 != 62

        assert_eq!(c.is_correct(), Some(false));
        assert!(c.is_wrong());
        assert_eq!(c.feedback_message(), messages::TRY_AGAIN);
        assert_eq!(c.step(), CalculationStep::Tens);
        assert_eq!(c.user_input().tens, "5");
        assert_eq!(c.problem().answer, 62);

        // Retry with the corrected tens digit.
        enter(&mut c, InputField::Tens, "6");
        c.check_answer();
        assert_eq!(c.is_correct(), Some(true));
    }

    #[test]
    fn check_answer_is_gated_until_both_digits_are_in() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        c.complete_carry_animation();
        enter(&mut c, InputField::Ones, "2");

        assert!(!c.can_check_answer());
        c.check_answer();

        assert_eq!(c.is_correct(), None);
        assert_eq!(c.step(), CalculationStep::Tens);
    }

    #[test]
    fn no_edits_accepted_after_correct() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);
        enter(&mut c, InputField::Ones, "5");
        enter(&mut c, InputField::Tens, "2");
        c.check_answer();
        assert_eq!(c.step(), CalculationStep::Correct);

        enter(&mut c, InputField::Ones, "9");
        enter(&mut c, InputField::Tens, "9");
        c.check_answer();

        assert_eq!(c.user_input().ones, "5");
        assert_eq!(c.user_input().tens, "2");
        assert_eq!(c.is_correct(), Some(true));
    }

    // =========================================================================
    // Animation guard
    // =========================================================================

    #[test]
    fn animation_blocks_every_input_path() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        assert!(c.is_carry_animating());

        let blocks = c.block_distribution();
        enter(&mut c, InputField::Ones, "2");
        c.handle_block_drop();
        c.set_step(CalculationStep::Tens);
        c.check_answer();

        assert_eq!(c.user_input().ones, "");
        assert_eq!(c.block_distribution(), blocks);
        assert_eq!(c.step(), CalculationStep::MakeTen);
    }

    // =========================================================================
    // Input handling details
    // =========================================================================

    #[test]
    fn keystrokes_keep_only_the_last_digit() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);

        enter(&mut c, InputField::Ones, "45");

        // "5" survives, which here is also the correct ones digit.
        assert_eq!(c.user_input().ones, "5");
        assert_eq!(c.step(), CalculationStep::Tens);
    }

    #[test]
    fn non_digit_input_is_discarded() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);

        enter(&mut c, InputField::Ones, "x");

        assert_eq!(c.user_input().ones, "");
        assert_eq!(c.step(), CalculationStep::Ones);
    }

    #[test]
    fn tens_entry_is_rejected_before_the_tens_step() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);

        enter(&mut c, InputField::Tens, "2");

        assert_eq!(c.user_input().tens, "");
    }

    #[test]
    fn focus_moves_between_entry_steps_only() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);
        enter(&mut c, InputField::Ones, "5");
        assert_eq!(c.step(), CalculationStep::Tens);

        c.set_step(CalculationStep::Ones);
        assert_eq!(c.step(), CalculationStep::Ones);

        c.set_step(CalculationStep::Correct);
        assert_eq!(c.step(), CalculationStep::Ones);

        let mut borrow = with_problem(Operation::Subtraction, 52, 37);
        borrow.set_step(CalculationStep::Ones);
        assert_eq!(borrow.step(), CalculationStep::Borrow);
    }

    // =========================================================================
    // Timers
    // =========================================================================

    #[test]
    fn wrong_flag_clears_when_its_timer_fires() {
        let mut c = with_problem(Operation::Subtraction, 57, 32);
        enter(&mut c, InputField::Ones, "5");
        enter(&mut c, InputField::Tens, "9");
        c.check_answer(); // 95 != 25

        assert!(c.is_wrong());
        let scheduled = c.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].delay, WRONG_FLASH);

        c.fire(scheduled[0].token);

        assert!(!c.is_wrong());
        assert_eq!(c.step(), CalculationStep::Tens);
        assert_eq!(c.user_input().tens, "9");
    }

    #[test]
    fn carry_animation_completes_through_its_timer() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();

        let scheduled = c.take_scheduled();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].delay, REGROUP_ANIMATION);
        assert_eq!(scheduled[0].token.kind(), TimerKind::FinishCarry);

        c.fire(scheduled[0].token);

        assert!(!c.is_carry_animating());
        assert_eq!(c.step(), CalculationStep::Ones);
    }

    #[test]
    fn stale_timer_from_a_previous_problem_is_ignored() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();
        let stale = c.take_scheduled();

        // Learner asks for a new problem mid-animation.
        c.generate_new_problem(Operation::Addition);
        let fresh_step = c.step();
        let fresh_blocks = c.block_distribution();

        c.fire(stale[0].token);

        assert_eq!(c.step(), fresh_step);
        assert_eq!(c.block_distribution(), fresh_blocks);
        assert!(!c.carry_revealed());
    }

    #[test]
    fn problem_reset_drops_queued_timers() {
        let mut c = with_problem(Operation::Addition, 28, 34);
        c.handle_block_drop();
        c.handle_block_drop();

        c.generate_new_problem(Operation::Addition);

        assert!(c.take_scheduled().is_empty());
    }

    #[test]
    fn duplicate_completion_is_harmless() {
        let mut c = with_problem(Operation::Subtraction, 52, 37);
        c.handle_borrow();
        c.complete_borrow_animation();
        let visual = c.num1_visual();

        c.complete_borrow_animation();

        assert_eq!(c.num1_visual(), visual);
        assert!(c.is_borrowed());
    }

    impl ProblemController {
        /// Test helper: drain and fire everything currently queued.
        fn fire_all(&mut self) {
            for t in self.take_scheduled() {
                self.fire(t.token);
            }
        }
    }
}
