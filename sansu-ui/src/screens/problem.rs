use egui::{Align, Color32, FontId, Grid, RichText, Sense, Stroke, TextEdit, Ui, vec2};
use sansu_core::{CalculationStep, InputField, Operation};

use crate::app::SansuApp;
use crate::components::{instructions, ones_blocks, palette, tens_bars, wide_button};

/// Events gathered while drawing one frame of the problem grid, applied
/// to the controller afterwards so rendering borrows stay immutable.
#[derive(Default)]
struct GridEvents {
    drop_clicked: bool,
    borrow_clicked: bool,
    ones_changed: Option<String>,
    tens_changed: Option<String>,
    ones_focused: bool,
    tens_focused: bool,
    submitted: bool,
}

pub struct ProblemScreen;

impl ProblemScreen {
    const DIGIT_FONT: f32 = 44.0;
    const ADJUSTED_FONT: f32 = 22.0;
    const INPUT_WIDTH: f32 = 72.0;
    const DIGIT_COLOR: Color32 = Color32::from_rgb(55, 65, 81);

    pub fn show(app: &mut SansuApp, ui: &mut Ui) {
        let Some(op) = app.controller.operation() else {
            app.back_to_operation_select();
            return;
        };

        instructions::show(ui, &app.controller);
        ui.add_space(16.0);

        let events = ui
            .vertical_centered(|ui| Self::problem_grid(app, ui, op))
            .inner;
        Self::apply(app, events);

        ui.add_space(20.0);
        ui.vertical_centered(|ui| {
            Self::action_button(app, ui);
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);
            Self::bottom_row(app, ui);
        });
    }

    fn problem_grid(app: &SansuApp, ui: &mut Ui, op: Operation) -> GridEvents {
        let c = &app.controller;
        let problem = *c.problem();
        let step = c.step();
        let animating = c.is_animating();
        let wrong = c.is_wrong();
        let needs_regrouping = c.needs_regrouping();
        let blocks = c.block_distribution();
        let borrowed = c.is_borrowed();
        let visual = c.num1_visual();

        let mut events = GridEvents::default();

        Grid::new("problem_grid")
            .num_columns(3)
            .spacing([28.0, 14.0])
            .show(ui, |ui| {
                // Column headers.
                ui.label("");
                ui.label(
                    RichText::new("십의 자리")
                        .size(18.0)
                        .strong()
                        .color(palette::YELLOW_DARK),
                );
                let ones_header = match op {
                    Operation::Addition => palette::BLUE,
                    Operation::Subtraction => palette::RED,
                };
                ui.label(RichText::new("일의 자리").size(18.0).strong().color(ones_header));
                ui.end_row();

                // The carried ten, once revealed.
                if op == Operation::Addition && c.carry_revealed() {
                    ui.label("");
                    ui.horizontal(|ui| {
                        tens_bars(ui, 1, false, false);
                        ui.label(
                            RichText::new("1")
                                .size(Self::DIGIT_FONT)
                                .strong()
                                .color(palette::RED),
                        );
                    });
                    ui.label("");
                    ui.end_row();
                }

                // num1 row.
                ui.label("");
                ui.horizontal(|ui| {
                    let tappable = step == CalculationStep::Borrow && !animating;
                    if tens_bars(ui, problem.num1_tens(), borrowed, tappable).clicked() {
                        events.borrow_clicked = true;
                    }
                    Self::place_digit(ui, problem.num1_tens(), borrowed, visual.tens);
                });
                ui.horizontal(|ui| {
                    match op {
                        Operation::Addition => {
                            Self::place_digit(ui, problem.num1_ones(), false, 0);
                            ones_blocks(ui, blocks.top, false, c.is_carry_animating());
                        }
                        Operation::Subtraction => {
                            Self::place_digit(ui, problem.num1_ones(), borrowed, visual.ones);
                            let count = if borrowed { visual.ones } else { problem.num1_ones() };
                            ones_blocks(ui, count, false, c.is_borrow_animating());
                        }
                    }
                });
                ui.end_row();

                // num2 row, with the operator sign in front.
                ui.label(
                    RichText::new(op.symbol())
                        .size(Self::DIGIT_FONT)
                        .strong()
                        .color(Color32::GRAY),
                );
                ui.horizontal(|ui| {
                    tens_bars(ui, problem.num2_tens(), false, false);
                    Self::place_digit(ui, problem.num2_tens(), false, 0);
                });
                ui.horizontal(|ui| {
                    Self::place_digit(ui, problem.num2_ones(), false, 0);
                    match op {
                        Operation::Addition => {
                            let droppable = !animating
                                && blocks.bottom > 0
                                && (step == CalculationStep::MakeTen || !needs_regrouping);
                            if ones_blocks(ui, blocks.bottom, droppable, false).clicked() {
                                events.drop_clicked = true;
                            }
                        }
                        Operation::Subtraction => {
                            ones_blocks(ui, problem.num2_ones(), false, false);
                        }
                    }
                });
                ui.end_row();

                // The answer line.
                ui.label("");
                Self::answer_line(ui);
                Self::answer_line(ui);
                ui.end_row();

                // Answer inputs.
                ui.label("");
                ui.vertical_centered(|ui| {
                    let enabled = step == CalculationStep::Tens && !animating;
                    let mut text = c.user_input().tens.clone();
                    let response = Self::digit_input(
                        ui,
                        &mut text,
                        enabled,
                        step == CalculationStep::Tens,
                        wrong && step != CalculationStep::Ones,
                        op,
                    );
                    if response.changed() {
                        events.tens_changed = Some(text);
                    }
                    if response.gained_focus() {
                        events.tens_focused = true;
                    }
                    events.submitted |= Self::enter_pressed(ui, &response);
                });
                ui.vertical_centered(|ui| {
                    let enabled = matches!(
                        step,
                        CalculationStep::Ones | CalculationStep::Tens
                    ) && !animating;
                    let mut text = c.user_input().ones.clone();
                    let response = Self::digit_input(
                        ui,
                        &mut text,
                        enabled,
                        step == CalculationStep::Ones,
                        wrong && step == CalculationStep::Ones,
                        op,
                    );
                    if response.changed() {
                        events.ones_changed = Some(text);
                    }
                    if response.gained_focus() {
                        events.ones_focused = true;
                    }
                    events.submitted |= Self::enter_pressed(ui, &response);
                });
                ui.end_row();
            });

        events
    }

    fn apply(app: &mut SansuApp, events: GridEvents) {
        if events.ones_focused {
            app.controller.set_step(CalculationStep::Ones);
        }
        if events.tens_focused {
            app.controller.set_step(CalculationStep::Tens);
        }
        if let Some(text) = events.ones_changed {
            app.controller.set_user_input(InputField::Ones, &text);
        }
        if let Some(text) = events.tens_changed {
            app.controller.set_user_input(InputField::Tens, &text);
        }
        if events.drop_clicked {
            app.controller.handle_block_drop();
        }
        if events.borrow_clicked {
            app.controller.handle_borrow();
        }
        if events.submitted {
            // Enter in an answer field acts like the check button; the
            // controller's own gating applies.
            app.controller.check_answer();
        }
    }

    fn enter_pressed(ui: &Ui, response: &egui::Response) -> bool {
        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
    }

    fn action_button(app: &mut SansuApp, ui: &mut Ui) {
        if app.controller.is_correct() == Some(true) {
            if wide_button(ui, "새 문제 풀기", palette::GREEN, true).clicked() {
                app.next_problem();
            }
        } else if wide_button(
            ui,
            "정답 확인!",
            palette::BLUE,
            app.controller.can_check_answer(),
        )
        .clicked()
        {
            app.controller.check_answer();
        }
    }

    fn bottom_row(app: &mut SansuApp, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let row_width = 2.0 * 180.0 + 16.0;
            ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

            if ui
                .add_sized(
                    [180.0, 40.0],
                    egui::Button::new(RichText::new("문제 선택으로").color(Color32::WHITE))
                        .fill(palette::GRAY)
                        .rounding(8.0),
                )
                .clicked()
            {
                app.back_to_setup();
            }
            if ui
                .add_sized(
                    [180.0, 40.0],
                    egui::Button::new("지도 일지 기록하기 ✏️").rounding(8.0),
                )
                .clicked()
            {
                app.copy_journal(ui.ctx());
            }
        });

        if app.journal_toast_visible() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("클립보드에 복사되었어요!")
                        .small()
                        .color(palette::GREEN),
                );
            });
        }
    }

    /// A place digit; when `struck`, the raw digit is crossed out and the
    /// borrow-adjusted value sits above it in red.
    fn place_digit(ui: &mut Ui, value: u8, struck: bool, adjusted: u8) {
        ui.vertical(|ui| {
            if struck {
                ui.label(
                    RichText::new(adjusted.to_string())
                        .size(Self::ADJUSTED_FONT)
                        .strong()
                        .color(palette::RED),
                );
                ui.label(
                    RichText::new(value.to_string())
                        .size(Self::DIGIT_FONT)
                        .strikethrough()
                        .color(Color32::from_gray(170)),
                );
            } else {
                ui.label(
                    RichText::new(value.to_string())
                        .size(Self::DIGIT_FONT)
                        .color(Self::DIGIT_COLOR),
                );
            }
        });
    }

    fn answer_line(ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(vec2(120.0, 5.0), Sense::hover());
        ui.painter().rect_filled(rect, 2.0, Color32::from_gray(70));
    }

    fn digit_input(
        ui: &mut Ui,
        text: &mut String,
        enabled: bool,
        active: bool,
        wrong: bool,
        op: Operation,
    ) -> egui::Response {
        let text_color = if wrong { palette::RED } else { Self::DIGIT_COLOR };
        let response = ui.add_enabled(
            enabled,
            TextEdit::singleline(text)
                .char_limit(1)
                .font(FontId::proportional(40.0))
                .horizontal_align(Align::Center)
                .desired_width(Self::INPUT_WIDTH)
                .text_color(text_color),
        );

        // Ring the field the learner should be working in.
        if active || wrong {
            let ring = if wrong {
                palette::RED
            } else {
                match op {
                    Operation::Addition => palette::BLUE,
                    Operation::Subtraction => palette::RED,
                }
            };
            ui.painter()
                .rect_stroke(response.rect.expand(3.0), 8.0, Stroke::new(2.0, ring));
        }

        response
    }
}
