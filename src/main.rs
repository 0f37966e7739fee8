mod analysis;
mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::GouramiApp;
use eframe::egui;

/// Dataset read when no path is given on the command line.
const DEFAULT_DATASET: &str = "dataset_invest_juta.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let dataset_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Gourami Production Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(GouramiApp::new(&dataset_path)))),
    )
}
