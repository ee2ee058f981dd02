//! The guidance banner above the problem.
//!
//! Mirrors the lesson script: what to do in the current step, the
//! transient wrong-answer hint, and the praise line once solved.

use egui::{Frame, Margin, RichText, Ui};
use sansu_core::{CalculationStep, Operation, ProblemController};

use super::palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Guide,
    Wrong,
    Praise,
}

/// Picks the banner text and tone for the current snapshot.
pub fn instruction(
    op: Operation,
    step: CalculationStep,
    needs_regrouping: bool,
    is_wrong: bool,
    feedback: &'static str,
) -> (&'static str, Tone) {
    if is_wrong {
        return (feedback, Tone::Wrong);
    }
    if step == CalculationStep::Correct {
        return (feedback, Tone::Praise);
    }

    let text = match (op, step) {
        (Operation::Addition, CalculationStep::MakeTen) => {
            if needs_regrouping {
                "아래 숫자 블록을 위로 옮겨서, 10개를 만들어보세요!"
            } else {
                "아래 숫자 블록을 위로 모두 옮겨서 더해봐요!"
            }
        }
        (Operation::Addition, CalculationStep::Ones) => "일의 자리 숫자의 합을 아래 칸에 적어봐요.",
        (Operation::Subtraction, CalculationStep::Borrow) => {
            if needs_regrouping {
                "일의 자리에서 뺄 수가 없네요. 십의 자리에서 빌려와요! 위 숫자 십의 자리를 눌러보세요."
            } else {
                "이제 계산해볼까요? 일의 자리부터 계산해서 답을 적어봐요."
            }
        }
        (Operation::Subtraction, CalculationStep::Ones) => "일의 자리를 계산해서 아래 칸에 적어봐요.",
        (_, CalculationStep::Tens) => "좋아요! 이제 십의 자리를 계산해 보세요.",
        _ => "정답을 확인해 보세요!",
    };
    (text, Tone::Guide)
}

/// Renders the banner for the controller's current state.
pub fn show(ui: &mut Ui, controller: &ProblemController) {
    let Some(op) = controller.operation() else {
        return;
    };
    let (text, tone) = instruction(
        op,
        controller.step(),
        controller.needs_regrouping(),
        controller.is_wrong(),
        controller.feedback_message(),
    );
    let (fill, color) = match tone {
        Tone::Guide => (palette::BLUE_BG, palette::BLUE_TEXT),
        Tone::Wrong => (palette::RED_BG, palette::RED_TEXT),
        Tone::Praise => (palette::GREEN_BG, palette::GREEN_TEXT),
    };

    Frame::none()
        .fill(fill)
        .rounding(10.0)
        .inner_margin(Margin::same(12.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).size(16.0).strong().color(color));
        });
}
