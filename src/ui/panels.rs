use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::DistrictSelection;
use crate::state::{AppState, View};

// ---------------------------------------------------------------------------
// Left side panel – menu and district filter
// ---------------------------------------------------------------------------

/// Render the sidebar: view menu plus the district filter.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Menu");
    ui.separator();

    for view in View::ALL {
        if ui
            .selectable_label(state.view == view, view.title())
            .clicked()
        {
            state.view = view;
        }
    }

    ui.separator();
    ui.strong("District filter");

    let Some(dataset) = &state.dataset else {
        ui.label("No dataset loaded.");
        return;
    };

    // Clone so we can mutate state from inside the combo closure.
    let districts = dataset.districts.clone();
    let current = state.selection.clone();

    egui::ComboBox::from_id_salt("district_filter")
        .selected_text(current.label().to_owned())
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current == DistrictSelection::All, "All districts")
                .clicked()
            {
                state.select_district(DistrictSelection::All);
            }
            for district in &districts {
                let selection = DistrictSelection::District(district.clone());
                if ui
                    .selectable_label(current == selection, district)
                    .clicked()
                {
                    state.select_district(selection);
                }
            }
        });

    if let Some(pipeline) = &state.pipeline {
        ui.add_space(4.0);
        ui.label(format!("{} rows in view", pipeline.indices.len()));
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open dataset…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} rows, {} districts",
                ds.len(),
                ds.districts.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user pick a replacement CSV. A successful load swaps the whole
/// dataset handle; a failure keeps the current dataset and reports in the
/// status line.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open fishery dataset")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
