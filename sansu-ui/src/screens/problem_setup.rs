use egui::{Key, RichText, TextEdit, Ui};

use crate::app::SansuApp;
use crate::components::{big_button, palette};

pub struct ProblemSetupScreen;

impl ProblemSetupScreen {
    const OPERAND_WIDTH: f32 = 90.0;

    pub fn show(app: &mut SansuApp, ui: &mut Ui) {
        if app.setup.manual {
            Self::show_manual_form(app, ui);
        } else {
            Self::show_choice(app, ui);
        }
    }

    fn show_choice(app: &mut SansuApp, ui: &mut Ui) {
        let Some(op) = app.controller.operation() else {
            app.back_to_operation_select();
            return;
        };

        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!("어떤 {} 문제를 풀어볼까요?", op.label()))
                    .size(24.0)
                    .strong(),
            );
            ui.add_space(32.0);

            if big_button(ui, "🎲 랜덤 문제", palette::GREEN).clicked() {
                app.start_random();
            }
            ui.add_space(16.0);
            if big_button(ui, "✏️ 직접 입력", palette::ORANGE).clicked() {
                app.setup.manual = true;
                app.setup.error = None;
            }

            ui.add_space(40.0);
            if ui
                .link(RichText::new("← 연산 종류 다시 선택하기").color(palette::GRAY))
                .clicked()
            {
                app.back_to_operation_select();
            }
        });
    }

    fn show_manual_form(app: &mut SansuApp, ui: &mut Ui) {
        let Some(op) = app.controller.operation() else {
            app.back_to_operation_select();
            return;
        };

        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("문제 직접 입력하기").size(24.0).strong());
            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("두 자리 수 이하의 {} 문제를 입력하세요.", op.label()))
                    .color(palette::GRAY),
            );
            ui.add_space(24.0);

            let mut submitted = false;
            ui.horizontal(|ui| {
                // Keep the operand row centered.
                let row_width = Self::OPERAND_WIDTH * 2.0 + 60.0;
                ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

                submitted |= Self::operand_field(ui, &mut app.setup.num1, "예) 28");
                ui.label(RichText::new(op.symbol()).size(36.0).strong());
                submitted |= Self::operand_field(ui, &mut app.setup.num2, "예) 34");
            });

            if let Some(error) = &app.setup.error {
                ui.add_space(12.0);
                ui.label(RichText::new(error).strong().color(palette::RED));
            }

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                let row_width = 2.0 * 150.0 + 16.0;
                ui.add_space((ui.available_width() - row_width).max(0.0) / 2.0);

                if ui
                    .add_sized(
                        [150.0, 44.0],
                        egui::Button::new(RichText::new("뒤로가기").color(egui::Color32::WHITE))
                            .fill(palette::GRAY)
                            .rounding(10.0),
                    )
                    .clicked()
                {
                    app.setup.manual = false;
                    app.setup.error = None;
                }
                if ui
                    .add_sized(
                        [150.0, 44.0],
                        egui::Button::new(
                            RichText::new("문제 풀기!").strong().color(egui::Color32::WHITE),
                        )
                        .fill(palette::BLUE)
                        .rounding(10.0),
                    )
                    .clicked()
                {
                    submitted = true;
                }
            });

            if submitted {
                app.start_manual();
            }
        });
    }

    /// One operand field; returns true when Enter was pressed in it.
    fn operand_field(ui: &mut Ui, text: &mut String, hint: &str) -> bool {
        let response = ui.add(
            TextEdit::singleline(text)
                .hint_text(hint)
                .font(egui::FontId::proportional(28.0))
                .horizontal_align(egui::Align::Center)
                .desired_width(Self::OPERAND_WIDTH),
        );
        response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter))
    }
}
