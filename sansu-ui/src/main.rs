use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use sansu_core::ProblemController;
use sansu_ui::{SansuApp, fonts, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// 차근차근 덧셈뺄셈 — step-by-step two-digit addition and subtraction
/// trainer with place-value blocks.
#[derive(Debug, Parser)]
struct Cli {
    /// Seed for the problem randomizer (default: OS entropy).
    /// Useful for reproducing a lesson.
    #[arg(long)]
    seed: Option<u64>,

    /// Append log output to this file in addition to stdout.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter override (e.g. `debug` or `sansu_core=trace`).
    /// Falls back to RUST_LOG, then an info default.
    #[arg(long)]
    log_level: Option<String>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_default_logging(cli.log_level.as_deref());
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let controller = match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded randomizer");
            ProblemController::seeded(seed)
        }
        None => ProblemController::new(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([600.0, 700.0])
            .with_title("차근차근 덧셈뺄셈"),
        ..Default::default()
    };

    eframe::run_native(
        "차근차근 덧셈뺄셈",
        options,
        Box::new(move |cc| {
            fonts::install_korean_fonts(&cc.egui_ctx);
            Ok(Box::new(SansuApp::new(controller)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to launch UI: {e}"))
}
