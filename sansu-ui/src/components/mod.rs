//! Shared widgets for the lesson screens.

pub mod blocks;
pub mod feedback_modal;
pub mod instructions;

pub use blocks::{ones_blocks, tens_bars};

use egui::{Button, Color32, Response, RichText, Ui};

/// The product palette.
pub mod palette {
    use egui::Color32;

    pub const BLUE: Color32 = Color32::from_rgb(59, 130, 246);
    pub const BLUE_DARK: Color32 = Color32::from_rgb(37, 99, 235);
    pub const RED: Color32 = Color32::from_rgb(239, 68, 68);
    pub const GREEN: Color32 = Color32::from_rgb(34, 197, 94);
    pub const ORANGE: Color32 = Color32::from_rgb(249, 115, 22);
    pub const GRAY: Color32 = Color32::from_rgb(107, 114, 128);
    pub const YELLOW: Color32 = Color32::from_rgb(250, 204, 21);
    pub const YELLOW_DARK: Color32 = Color32::from_rgb(161, 98, 7);

    pub const BLUE_BG: Color32 = Color32::from_rgb(219, 234, 254);
    pub const RED_BG: Color32 = Color32::from_rgb(254, 226, 226);
    pub const GREEN_BG: Color32 = Color32::from_rgb(220, 252, 231);
    pub const BLUE_TEXT: Color32 = Color32::from_rgb(30, 64, 175);
    pub const RED_TEXT: Color32 = Color32::from_rgb(153, 27, 27);
    pub const GREEN_TEXT: Color32 = Color32::from_rgb(22, 101, 52);
}

/// A large rounded call-to-action button in the given fill color.
pub fn big_button(ui: &mut Ui, text: &str, fill: Color32) -> Response {
    ui.add_sized(
        [260.0, 56.0],
        Button::new(
            RichText::new(text)
                .size(20.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(fill)
        .rounding(12.0),
    )
}

/// A full-width action button (submit / next problem).
pub fn wide_button(ui: &mut Ui, text: &str, fill: Color32, enabled: bool) -> Response {
    ui.add_enabled(
        enabled,
        Button::new(
            RichText::new(text)
                .size(22.0)
                .strong()
                .color(Color32::WHITE),
        )
        .fill(fill)
        .rounding(12.0)
        .min_size(egui::vec2(ui.available_width().min(480.0), 52.0)),
    )
}
