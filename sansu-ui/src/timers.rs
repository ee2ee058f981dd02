//! Executes the controller's delayed-action contract on wall-clock time.
//!
//! The controller only *describes* its timers; this queue arms them
//! against [`Instant`] deadlines and hands elapsed tokens back. Staleness
//! is the controller's problem (tokens carry their epoch), so the queue
//! never needs to know which problem is current — it may even fire a
//! token late without harm.

use std::time::Instant;

use sansu_core::{ProblemController, ScheduledTimer, TimerToken};

#[derive(Debug, Default)]
pub struct TimerQueue {
    armed: Vec<(Instant, TimerToken)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms one scheduled action against `now`.
    pub fn arm(&mut self, now: Instant, scheduled: ScheduledTimer) {
        self.armed.push((now + scheduled.delay, scheduled.token));
    }

    /// Drains the controller's fresh schedule and fires everything due.
    ///
    /// Call once per frame; returns the number of tokens fired so callers
    /// can decide whether a repaint is warranted.
    pub fn pump(&mut self, now: Instant, controller: &mut ProblemController) -> usize {
        for scheduled in controller.take_scheduled() {
            self.arm(now, scheduled);
        }

        let mut due = Vec::new();
        self.armed.retain(|(deadline, token)| {
            if *deadline <= now {
                due.push(*token);
                false
            } else {
                true
            }
        });

        for token in &due {
            controller.fire(*token);
        }
        due.len()
    }

    /// The next wall-clock moment something will fire, for repaint
    /// scheduling.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.armed.iter().map(|(deadline, _)| *deadline).min()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;
    use sansu_core::{CalculationStep, InputField, Operation};

    use super::*;

    fn wrong_answer_controller() -> ProblemController {
        let mut c = ProblemController::seeded(5);
        c.start_manual_problem(Operation::Subtraction, 57, 32)
            .unwrap();
        c.set_user_input(InputField::Ones, "5");
        c.set_user_input(InputField::Tens, "9");
        c.check_answer(); // 95 != 25, schedules the shake reset
        c
    }

    #[test]
    fn nothing_fires_before_its_deadline() {
        let mut c = wrong_answer_controller();
        let mut q = TimerQueue::new();
        let t0 = Instant::now();

        let fired = q.pump(t0, &mut c);

        assert_eq!(fired, 0);
        assert!(c.is_wrong());
        assert!(q.next_deadline().is_some());
    }

    #[test]
    fn due_timers_fire_into_the_controller() {
        let mut c = wrong_answer_controller();
        let mut q = TimerQueue::new();
        let t0 = Instant::now();
        q.pump(t0, &mut c);

        let fired = q.pump(t0 + Duration::from_millis(600), &mut c);

        assert_eq!(fired, 1);
        assert!(!c.is_wrong());
        assert_eq!(q.next_deadline(), None);
    }

    #[test]
    fn animation_timer_advances_the_step() {
        let mut c = ProblemController::seeded(5);
        c.start_manual_problem(Operation::Subtraction, 52, 37)
            .unwrap();
        c.handle_borrow();

        let mut q = TimerQueue::new();
        let t0 = Instant::now();
        q.pump(t0, &mut c);
        assert!(c.is_borrow_animating());

        q.pump(t0 + Duration::from_secs(3), &mut c);

        assert!(c.is_borrowed());
        assert_eq!(c.step(), CalculationStep::Ones);
    }

    #[test]
    fn late_stale_tokens_are_absorbed_by_the_controller() {
        let mut c = ProblemController::seeded(5);
        c.start_manual_problem(Operation::Subtraction, 52, 37)
            .unwrap();
        c.handle_borrow();

        let mut q = TimerQueue::new();
        let t0 = Instant::now();
        q.pump(t0, &mut c);

        // New problem while the borrow timer is armed in the queue.
        c.generate_new_problem(Operation::Subtraction);
        q.pump(t0 + Duration::from_secs(3), &mut c);

        assert!(!c.is_borrowed());
        assert_eq!(c.step(), CalculationStep::Borrow);
    }
}
