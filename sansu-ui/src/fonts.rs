//! Korean font setup.
//!
//! egui's bundled fonts carry no Hangul glyphs, so the learner-facing
//! text would render as tofu without help. We probe the usual system
//! locations for a CJK-capable font and install the first hit at the
//! front of both font families.

use std::fs;

use egui::{Context, FontData, FontDefinitions, FontFamily};
use tracing::{info, warn};

/// Well-known Korean/CJK font locations, most specific first.
const CANDIDATES: &[&str] = &[
    // Linux
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/google-noto-sans-cjk-fonts/NotoSansCJK-Regular.ttc",
    // macOS
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    // Windows
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Installs a Hangul-capable font if one can be found.
///
/// Missing fonts are not fatal; the app still runs, just illegibly for
/// Korean text, and we log which paths were tried.
pub fn install_korean_fonts(ctx: &Context) {
    for &path in CANDIDATES {
        let Ok(bytes) = fs::read(path) else {
            continue;
        };

        let mut fonts = FontDefinitions::default();
        fonts
            .font_data
            .insert("korean".to_owned(), FontData::from_owned(bytes));
        fonts
            .families
            .entry(FontFamily::Proportional)
            .or_default()
            .insert(0, "korean".to_owned());
        fonts
            .families
            .entry(FontFamily::Monospace)
            .or_default()
            .push("korean".to_owned());

        ctx.set_fonts(fonts);
        info!(path, "installed Korean font");
        return;
    }

    warn!(
        tried = CANDIDATES.len(),
        "no Korean font found; Hangul text will not render"
    );
}
