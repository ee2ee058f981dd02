use egui::{RichText, Ui};
use sansu_core::Operation;

use crate::app::SansuApp;
use crate::components::{big_button, palette};

pub struct OperationSelectScreen;

impl OperationSelectScreen {
    pub fn show(app: &mut SansuApp, ui: &mut Ui) {
        ui.add_space(48.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("무엇을 배워볼까요?").size(24.0).strong());
            ui.add_space(32.0);

            if big_button(ui, "➕ 덧셈 (받아올림)", palette::BLUE).clicked() {
                app.select_operation(Operation::Addition);
            }
            ui.add_space(16.0);
            if big_button(ui, "➖ 뺄셈 (받아내림)", palette::RED).clicked() {
                app.select_operation(Operation::Subtraction);
            }
        });
    }
}
