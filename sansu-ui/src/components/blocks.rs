//! Place-value block rendering.
//!
//! Ones are small blue squares laid out five per row; tens are tall
//! yellow bars with notches suggesting their ten units. Both paint into
//! a fixed-size cell so the problem grid does not jump around as counts
//! change.

use egui::{Color32, Pos2, Rect, Response, Sense, Stroke, Ui, vec2};

use super::palette;

const ONES_CELL: f32 = 68.0;
const ONES_SQUARE: f32 = 10.0;
const ONES_GAP: f32 = 3.0;

const TENS_BAR: egui::Vec2 = vec2(10.0, 52.0);
const TENS_GAP: f32 = 5.0;

/// Draws `count` ones units in a clickable square cell.
///
/// `highlight` tints the pile amber while the carry animation gathers it
/// into a ten.
pub fn ones_blocks(ui: &mut Ui, count: u8, clickable: bool, highlight: bool) -> Response {
    let sense = if clickable {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(vec2(ONES_CELL, ONES_CELL), sense);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        if clickable && response.hovered() {
            painter.rect_filled(rect, 8.0, palette::BLUE.gamma_multiply(0.15));
        }

        let fill = if highlight {
            palette::ORANGE
        } else {
            palette::BLUE
        };
        let pitch = ONES_SQUARE + ONES_GAP;
        let rows = count.div_ceil(5);
        let origin = Pos2 {
            x: rect.center().x - (5.0 * pitch - ONES_GAP) / 2.0,
            y: rect.center().y - (f32::from(rows) * pitch - ONES_GAP) / 2.0,
        };

        for i in 0..count {
            let col = f32::from(i % 5);
            let row = f32::from(i / 5);
            let min = Pos2 {
                x: origin.x + col * pitch,
                y: origin.y + row * pitch,
            };
            painter.rect_filled(
                Rect::from_min_size(min, vec2(ONES_SQUARE, ONES_SQUARE)),
                2.0,
                fill,
            );
        }
    }

    response
}

/// Draws `count` tens bars side by side.
///
/// With `struck`, the last bar is faded and crossed out in red — the
/// borrowed ten. The cell is sized for the count so neighbouring digits
/// sit right next to the bars.
pub fn tens_bars(ui: &mut Ui, count: u8, struck: bool, clickable: bool) -> Response {
    let bars = count.max(u8::from(struck));
    let width = (f32::from(bars) * (TENS_BAR.x + TENS_GAP)).max(TENS_BAR.x + TENS_GAP);
    let sense = if clickable {
        Sense::click()
    } else {
        Sense::hover()
    };
    let (rect, response) = ui.allocate_exact_size(vec2(width, TENS_BAR.y + 8.0), sense);

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();

        if clickable && response.hovered() {
            painter.rect_filled(rect.expand(4.0), 8.0, palette::RED.gamma_multiply(0.15));
        }

        for i in 0..bars {
            let faded = struck && i == bars - 1;
            let min = Pos2 {
                x: rect.min.x + f32::from(i) * (TENS_BAR.x + TENS_GAP),
                y: rect.center().y - TENS_BAR.y / 2.0,
            };
            let bar = Rect::from_min_size(min, TENS_BAR);
            let fill = if faded {
                palette::YELLOW.gamma_multiply(0.3)
            } else {
                palette::YELLOW
            };
            painter.rect_filled(bar, 2.0, fill);

            // Notches hinting at the ten units inside the bar.
            for j in 1..10 {
                let y = bar.min.y + bar.height() * j as f32 / 10.0;
                painter.line_segment(
                    [
                        Pos2 { x: bar.min.x + 2.0, y },
                        Pos2 { x: bar.max.x - 2.0, y },
                    ],
                    Stroke::new(1.0, palette::YELLOW_DARK.gamma_multiply(0.4)),
                );
            }

            if faded {
                painter.line_segment(
                    [
                        Pos2 { x: bar.min.x - 2.0, y: bar.max.y + 2.0 },
                        Pos2 { x: bar.max.x + 2.0, y: bar.min.y - 2.0 },
                    ],
                    Stroke::new(3.0, palette::RED),
                );
            }
        }

        if bars == 0 {
            // Keep the cell from collapsing when there is nothing to draw.
            painter.rect_filled(rect, 0.0, Color32::TRANSPARENT);
        }
    }

    response
}
