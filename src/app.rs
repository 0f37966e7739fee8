use std::path::Path;

use eframe::egui;

use crate::state::{AppState, View};
use crate::ui::{panels, views};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct GouramiApp {
    pub state: AppState,
}

impl GouramiApp {
    /// Build the app and perform the one-time dataset load. A failed load
    /// leaves the app running with an empty state and the error in the
    /// status line; the user can still open a file manually.
    pub fn new(dataset_path: &Path) -> Self {
        let mut state = AppState::default();
        match crate::data::loader::load_csv(dataset_path) {
            Ok(dataset) => state.set_dataset(dataset),
            Err(e) => {
                log::error!("failed to load {}: {e}", dataset_path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
        Self { state }
    }
}

impl eframe::App for GouramiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: view menu and district filter ----
        egui::SidePanel::left("menu_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: the selected view ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            View::Dashboard => views::dashboard(ui, &self.state),
            View::Exploration => views::exploration(ui, &self.state),
            View::Model => views::model(ui, &self.state),
            View::Prediction => views::prediction(ui, &mut self.state),
            View::Insight => views::insight(ui, &self.state),
        });
    }
}
