//! The praise modal shown shortly after a problem is solved.

use egui::{Align2, Color32, Context, RichText, vec2};

use super::{big_button, palette};

/// Shows the modal; returns true when the learner asks for the next
/// problem.
pub fn show(ctx: &Context) -> bool {
    let mut next = false;

    egui::Window::new("praise")
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.set_width(300.0);
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(RichText::new("🎉").size(52.0));
                ui.add_space(8.0);
                ui.label(
                    RichText::new("참 잘했어요!")
                        .size(28.0)
                        .strong()
                        .color(palette::GREEN_TEXT),
                );
                ui.label(RichText::new("꾸준히 노력하는 모습이 멋져요!").color(Color32::GRAY));
                ui.add_space(16.0);
                if big_button(ui, "계속하기", palette::GREEN).clicked() {
                    next = true;
                }
                ui.add_space(12.0);
            });
        });

    next
}
