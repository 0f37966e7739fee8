use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::analysis::pipeline::{self, FitReport};
use crate::analysis::predict::ProductionOutlook;
use crate::data::model::{Dataset, Feature};
use crate::data::summary;
use crate::state::AppState;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn no_dataset_message(ui: &mut Ui) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.heading("Open a dataset to get started  (File → Open dataset…)");
    });
}

fn fmt_opt(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v:.1}"),
        None => "–".to_string(),
    }
}

/// One headline number with a small caption, Dashboard-card style.
fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).weak());
        ui.label(RichText::new(value).size(22.0).strong());
    });
}

/// Targets of the complete rows among `indices`, aligned with the fitted
/// values the regression engine produced.
fn actual_targets(dataset: &Dataset, indices: &[usize]) -> Vec<f64> {
    indices
        .iter()
        .filter_map(|&i| dataset.rows[i].complete().map(|(_, y)| y))
        .collect()
}

fn fit_error_message(ui: &mut Ui, message: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(message).color(Color32::YELLOW));
}

// ---------------------------------------------------------------------------
// Dashboard – headline metrics plus the filtered table
// ---------------------------------------------------------------------------

pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(pipeline)) = (&state.dataset, &state.pipeline) else {
        no_dataset_message(ui);
        return;
    };

    ui.heading("Gourami production overview");
    ui.add_space(8.0);

    let totals = summary::dashboard_totals(dataset, &pipeline.indices);
    ui.columns(3, |cols: &mut [Ui]| {
        metric(
            &mut cols[0],
            "Total production",
            format!("{:.0}", totals.total_production),
        );
        let mean = if totals.production_count == 0 {
            "–".to_string()
        } else {
            format!("{:.2}", totals.mean_production)
        };
        metric(&mut cols[1], "Mean production", mean);
        metric(
            &mut cols[2],
            "Total investment (million Rp)",
            format!("{:.0}", totals.total_investment),
        );
    });

    ui.add_space(12.0);
    ui.strong("Dataset");
    ui.add_space(4.0);

    if pipeline.indices.is_empty() {
        ui.label("The current filter matches no rows.");
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(130.0))
        .columns(Column::remainder(), 5)
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("District");
            });
            for feature in Feature::ALL {
                header.col(|ui| {
                    ui.strong(feature.label());
                });
            }
            header.col(|ui| {
                ui.strong("Production");
            });
        })
        .body(|body| {
            body.rows(18.0, pipeline.indices.len(), |mut table_row| {
                let row = &dataset.rows[pipeline.indices[table_row.index()]];
                table_row.col(|ui| {
                    ui.label(row.district.as_deref().unwrap_or("–"));
                });
                for feature in Feature::ALL {
                    table_row.col(|ui| {
                        ui.label(fmt_opt(row.feature(feature)));
                    });
                }
                table_row.col(|ui| {
                    ui.label(fmt_opt(row.production));
                });
            });
        });
}

// ---------------------------------------------------------------------------
// Exploration – descriptive stats and charts
// ---------------------------------------------------------------------------

pub fn exploration(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(pipeline), Some(colors)) =
        (&state.dataset, &state.pipeline, &state.district_colors)
    else {
        no_dataset_message(ui);
        return;
    };

    ui.heading("Exploratory analysis");

    if pipeline.indices.is_empty() {
        ui.add_space(8.0);
        ui.label("The current filter matches no rows.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_space(8.0);
            ui.strong("Descriptive statistics");
            ui.add_space(4.0);

            egui::Grid::new("feature_stats")
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Predictor");
                    ui.strong("Count");
                    ui.strong("Mean");
                    ui.strong("Std dev");
                    ui.strong("Min");
                    ui.strong("Max");
                    ui.end_row();

                    for s in summary::feature_summaries(dataset, &pipeline.indices) {
                        ui.label(s.feature.label());
                        ui.label(s.count.to_string());
                        if s.count == 0 {
                            for _ in 0..4 {
                                ui.label("–");
                            }
                        } else {
                            ui.label(format!("{:.2}", s.mean));
                            ui.label(format!("{:.2}", s.std_dev));
                            ui.label(format!("{:.1}", s.min));
                            ui.label(format!("{:.1}", s.max));
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.strong("Production distribution");
            let bins = summary::production_histogram(dataset, &pipeline.indices, 20);
            plot::production_histogram(ui, &bins);

            ui.add_space(12.0);
            ui.strong("Investment vs production");
            plot::investment_scatter(ui, dataset, &pipeline.indices, colors);

            ui.add_space(12.0);
            ui.strong("Production per district");
            let totals = summary::production_by_district(dataset, &pipeline.indices);
            plot::district_bar_chart(ui, &totals, colors);
        });
}

// ---------------------------------------------------------------------------
// Model – coefficients, fit metrics, actual vs fitted
// ---------------------------------------------------------------------------

pub fn model(ui: &mut Ui, state: &AppState) {
    let (Some(dataset), Some(pipeline)) = (&state.dataset, &state.pipeline) else {
        no_dataset_message(ui);
        return;
    };

    ui.heading("Multiple linear regression");

    let report = match &pipeline.fit {
        Ok(report) => report,
        Err(err) => {
            fit_error_message(ui, &err.to_string());
            return;
        }
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.add_space(8.0);
            ui.strong("Coefficients");
            ui.add_space(4.0);

            egui::Grid::new("coefficients")
                .striped(true)
                .show(ui, |ui: &mut Ui| {
                    ui.strong("Predictor");
                    ui.strong("Coefficient");
                    ui.end_row();
                    for (feature, coefficient) in
                        Feature::ALL.iter().zip(report.model.coefficients.iter())
                    {
                        ui.label(feature.label());
                        ui.label(format!("{coefficient:.4}"));
                        ui.end_row();
                    }
                });

            ui.add_space(8.0);
            ui.label(format!("Intercept: {:.2}", report.model.intercept));

            ui.add_space(8.0);
            ui.columns(2, |cols: &mut [Ui]| {
                metric(&mut cols[0], "R² score", format!("{:.3}", report.r_squared));
                metric(
                    &mut cols[1],
                    "Mean absolute error",
                    format!("{:.2}", report.mean_absolute_error),
                );
            });

            ui.add_space(12.0);
            ui.strong("Actual vs fitted");
            let actual = actual_targets(dataset, &pipeline.indices);
            plot::actual_vs_fitted(ui, &actual, &report.model.fitted);
        });
}

// ---------------------------------------------------------------------------
// Prediction – the what-if form
// ---------------------------------------------------------------------------

pub fn prediction(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        no_dataset_message(ui);
        return;
    }

    ui.heading("Predict gourami production");
    ui.add_space(8.0);

    let fit_error = state
        .pipeline
        .as_ref()
        .and_then(|p| p.fit.as_ref().err())
        .map(|err| err.to_string());

    egui::Grid::new("prediction_form").show(ui, |ui: &mut Ui| {
        for (i, feature) in Feature::ALL.iter().enumerate() {
            ui.label(feature.label());
            ui.add(
                egui::DragValue::new(&mut state.prediction.inputs[i])
                    .range(0.0..=f64::MAX)
                    .speed(1.0),
            );
            ui.end_row();
        }
    });

    ui.add_space(8.0);

    match fit_error {
        Some(message) => fit_error_message(ui, &message),
        None => {
            if ui.button("Predict production").clicked() {
                state.run_prediction();
            }

            if let Some((value, outlook)) = state.prediction.result {
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!("Estimated production: {value:.2}"))
                        .color(Color32::LIGHT_GREEN)
                        .strong(),
                );
                let (text, color) = match outlook {
                    ProductionOutlook::AboveAverage => (
                        "Predicted production is above the filtered average.",
                        Color32::LIGHT_BLUE,
                    ),
                    ProductionOutlook::BelowAverage => (
                        "Predicted production is below the filtered average.",
                        Color32::YELLOW,
                    ),
                };
                ui.label(RichText::new(text).color(color));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Insight – the narrative summary
// ---------------------------------------------------------------------------

pub fn insight(ui: &mut Ui, state: &AppState) {
    let Some(pipeline) = &state.pipeline else {
        no_dataset_message(ui);
        return;
    };

    ui.heading("Insight");

    let report: &FitReport = match &pipeline.fit {
        Ok(report) => report,
        Err(err) => {
            fit_error_message(ui, &err.to_string());
            return;
        }
    };

    let driver = pipeline::most_influential_feature(&report.model);

    ui.add_space(8.0);
    ui.label(format!(
        "Across the {} rows currently in view, the predictor with the \
         strongest influence on gourami production is {}.",
        pipeline.indices.len(),
        driver.label()
    ));
    ui.add_space(4.0);
    ui.label(format!(
        "The model reaches an R² of {:.3}, i.e. it explains roughly \
         {:.0}% of the variation in production.",
        report.r_squared,
        (report.r_squared * 100.0).clamp(0.0, 100.0)
    ));
    ui.add_space(4.0);
    ui.label(
        "These estimates can support investment planning for the fishery \
         sector, but they describe the current filter only and are refitted \
         whenever the selection changes.",
    );
}
