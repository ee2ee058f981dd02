use std::time::{Duration, Instant};

use chrono::Local;
use egui::{Color32, Context, RichText};
use sansu_core::{ManualProblemError, Operation, ProblemController};
use tracing::info;

use crate::components::{feedback_modal, palette};
use crate::journal;
use crate::screens::{OperationSelectScreen, ProblemScreen, ProblemSetupScreen};
use crate::timers::TimerQueue;
use crate::utils;

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    SelectOperation,
    Setup,
    Problem,
}

/// Form state for the problem-setup screen.
#[derive(Debug, Clone, Default)]
pub struct SetupForm {
    /// Manual entry sub-mode (vs. the random/manual choice).
    pub manual: bool,
    pub num1: String,
    pub num2: String,
    pub error: Option<String>,
}

impl SetupForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// How long after solving until the praise modal pops.
const MODAL_DELAY: Duration = Duration::from_millis(500);
/// How long the clipboard toast stays visible.
const COPIED_TOAST: Duration = Duration::from_secs(2);

/// Main application state: the problem controller plus everything the
/// host owns itself (mode, setup form, armed timers, modal and toast
/// bookkeeping).
pub struct SansuApp {
    pub controller: ProblemController,
    pub mode: AppMode,
    pub setup: SetupForm,
    pub show_modal: bool,
    timers: TimerQueue,
    modal_due: Option<Instant>,
    copied_until: Option<Instant>,
}

impl SansuApp {
    pub fn new(controller: ProblemController) -> Self {
        Self {
            controller,
            mode: AppMode::default(),
            setup: SetupForm::default(),
            show_modal: false,
            timers: TimerQueue::new(),
            modal_due: None,
            copied_until: None,
        }
    }

    pub fn select_operation(&mut self, op: Operation) {
        self.controller.select_operation(op);
        self.setup.reset();
        self.mode = AppMode::Setup;
    }

    /// Starts a random problem with the selected operation.
    pub fn start_random(&mut self) {
        let Some(op) = self.controller.operation() else {
            self.mode = AppMode::SelectOperation;
            return;
        };
        self.controller.generate_new_problem(op);
        self.close_modal();
        self.mode = AppMode::Problem;
    }

    /// Submits the manual-entry form. Failures land in `setup.error`
    /// with the learner-facing message and keep the form as typed.
    pub fn start_manual(&mut self) {
        let Some(op) = self.controller.operation() else {
            self.mode = AppMode::SelectOperation;
            return;
        };

        let parsed = utils::parse_operand(&self.setup.num1)
            .and_then(|n1| utils::parse_operand(&self.setup.num2).map(|n2| (n1, n2)));
        let Ok((num1, num2)) = parsed else {
            // Same message the range check uses; a non-number is just as
            // out of range to the learner.
            self.setup.error = Some(ManualProblemError::OperandOutOfRange.to_string());
            return;
        };

        match self.controller.start_manual_problem(op, num1, num2) {
            Ok(()) => {
                self.setup.error = None;
                self.close_modal();
                self.mode = AppMode::Problem;
            }
            Err(e) => self.setup.error = Some(e.to_string()),
        }
    }

    pub fn next_problem(&mut self) {
        self.start_random();
    }

    pub fn back_to_setup(&mut self) {
        self.setup.reset();
        self.close_modal();
        self.mode = AppMode::Setup;
    }

    pub fn back_to_operation_select(&mut self) {
        self.mode = AppMode::SelectOperation;
    }

    /// Copies a teaching-journal line for the current problem.
    pub fn copy_journal(&mut self, ctx: &Context) {
        let Some(op) = self.controller.operation() else {
            return;
        };
        let entry = journal::format_entry(op, self.controller.problem(), Local::now());
        ctx.copy_text(entry);
        self.copied_until = Some(Instant::now() + COPIED_TOAST);
        info!("journal entry copied to clipboard");
    }

    pub fn journal_toast_visible(&self) -> bool {
        self.copied_until.is_some()
    }

    fn close_modal(&mut self) {
        self.show_modal = false;
        self.modal_due = None;
    }

    fn title(&self) -> &'static str {
        match (self.mode, self.controller.operation()) {
            (AppMode::Problem, Some(Operation::Addition)) => "차근차근 덧셈박사",
            (AppMode::Problem, Some(Operation::Subtraction)) => "차근차근 뺄셈박사",
            _ => "차근차근 덧셈뺄셈",
        }
    }

    fn subtitle(&self) -> &'static str {
        match (self.mode, self.controller.operation()) {
            (AppMode::Problem, Some(Operation::Addition)) => "두 자리 수 덧셈을 배워봐요",
            (AppMode::Problem, Some(Operation::Subtraction)) => "두 자리 수 뺄셈을 배워봐요",
            _ => "덧셈과 뺄셈을 배워봐요",
        }
    }

    /// Per-frame housekeeping: run due timers, advance the modal delay,
    /// expire the toast.
    fn tick(&mut self, now: Instant) {
        self.timers.pump(now, &mut self.controller);

        if self.controller.is_correct() == Some(true) {
            if !self.show_modal && self.modal_due.is_none() {
                self.modal_due = Some(now + MODAL_DELAY);
            }
            if self.modal_due.is_some_and(|due| now >= due) {
                self.show_modal = true;
                self.modal_due = None;
            }
        } else {
            self.close_modal();
        }

        if self.copied_until.is_some_and(|until| now >= until) {
            self.copied_until = None;
        }
    }

    /// The earliest moment anything time-driven changes, for repaint
    /// scheduling.
    fn next_wakeup(&self) -> Option<Instant> {
        [
            self.timers.next_deadline(),
            self.modal_due,
            self.copied_until,
        ]
        .into_iter()
        .flatten()
        .min()
    }
}

impl eframe::App for SansuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick(now);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.label(
                    RichText::new(self.title())
                        .size(36.0)
                        .strong()
                        .color(palette::BLUE_DARK),
                );
                ui.label(RichText::new(self.subtitle()).color(Color32::GRAY));
                ui.add_space(10.0);
            });
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Made by 하는교사")
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| match self.mode {
            AppMode::SelectOperation => OperationSelectScreen::show(self, ui),
            AppMode::Setup => ProblemSetupScreen::show(self, ui),
            AppMode::Problem => ProblemScreen::show(self, ui),
        });

        if self.show_modal && feedback_modal::show(ctx) {
            self.next_problem();
        }

        if let Some(deadline) = self.next_wakeup() {
            ctx.request_repaint_after(deadline.saturating_duration_since(now));
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sansu_core::CalculationStep;

    use super::*;

    fn app() -> SansuApp {
        SansuApp::new(ProblemController::seeded(9))
    }

    #[test]
    fn selecting_an_operation_moves_to_setup() {
        let mut app = app();

        app.select_operation(Operation::Addition);

        assert_eq!(app.mode, AppMode::Setup);
        assert_eq!(app.controller.operation(), Some(Operation::Addition));
    }

    #[test]
    fn random_start_lands_on_the_problem_screen() {
        let mut app = app();
        app.select_operation(Operation::Subtraction);

        app.start_random();

        assert_eq!(app.mode, AppMode::Problem);
        assert_eq!(app.controller.step(), CalculationStep::Borrow);
    }

    #[test]
    fn manual_start_surfaces_validation_errors_on_the_form() {
        let mut app = app();
        app.select_operation(Operation::Addition);
        app.setup.num1 = "50".to_string();
        app.setup.num2 = "60".to_string();

        app.start_manual();

        assert_eq!(app.mode, AppMode::Setup);
        assert_eq!(
            app.setup.error.as_deref(),
            Some("합이 100 미만인 문제를 입력해주세요.")
        );
    }

    #[test]
    fn non_numeric_operands_read_as_out_of_range() {
        let mut app = app();
        app.select_operation(Operation::Addition);
        app.setup.num1 = "abc".to_string();
        app.setup.num2 = "34".to_string();

        app.start_manual();

        assert_eq!(
            app.setup.error.as_deref(),
            Some("0부터 99까지의 숫자를 입력해주세요.")
        );
    }

    #[test]
    fn modal_waits_out_its_delay_after_solving() {
        let mut app = app();
        app.select_operation(Operation::Subtraction);
        app.controller
            .start_manual_problem(Operation::Subtraction, 57, 32)
            .unwrap();
        app.controller
            .set_user_input(sansu_core::InputField::Ones, "5");
        app.controller
            .set_user_input(sansu_core::InputField::Tens, "2");
        app.controller.check_answer();
        assert_eq!(app.controller.is_correct(), Some(true));

        let t0 = Instant::now();
        app.tick(t0);
        assert!(!app.show_modal);

        app.tick(t0 + Duration::from_millis(600));
        assert!(app.show_modal);
    }
}
