use std::collections::BTreeMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::color::DistrictColors;
use crate::data::model::Dataset;
use crate::data::summary::HistogramBin;

// ---------------------------------------------------------------------------
// Chart helpers for the Exploration and Model views
// ---------------------------------------------------------------------------

/// Histogram of production values.
pub fn production_histogram(ui: &mut Ui, bins: &[HistogramBin]) {
    let bars: Vec<Bar> = bins
        .iter()
        .map(|bin| {
            let center = (bin.start + bin.end) / 2.0;
            let width = (bin.end - bin.start).max(1.0);
            Bar::new(center, bin.count as f64)
                .width(width * 0.95)
                .fill(Color32::LIGHT_BLUE)
        })
        .collect();

    Plot::new("production_histogram")
        .x_axis_label("Production")
        .y_axis_label("Frequency")
        .height(260.0)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Production"));
        });
}

/// Investment vs production scatter, one coloured point set per district.
pub fn investment_scatter(
    ui: &mut Ui,
    dataset: &Dataset,
    indices: &[usize],
    colors: &DistrictColors,
) {
    // Group points per district so each gets one legend entry.
    let mut by_district: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for &i in indices {
        let row = &dataset.rows[i];
        if let (Some(investment), Some(production)) = (row.investment, row.production) {
            let district = row.district.clone().unwrap_or_else(|| "(unknown)".to_string());
            by_district
                .entry(district)
                .or_default()
                .push([investment, production]);
        }
    }

    Plot::new("investment_scatter")
        .legend(Legend::default())
        .x_axis_label("Investment (million Rp)")
        .y_axis_label("Production")
        .height(260.0)
        .show(ui, |plot_ui| {
            for (district, points) in by_district {
                let color = colors.color_for(&district);
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(district)
                        .color(color)
                        .radius(3.0),
                );
            }
        });
}

/// Total production per district as a bar chart.
pub fn district_bar_chart(ui: &mut Ui, totals: &[(String, f64)], colors: &DistrictColors) {
    let bars: Vec<Bar> = totals
        .iter()
        .enumerate()
        .map(|(i, (district, total))| {
            Bar::new(i as f64, *total)
                .width(0.7)
                .name(district.clone())
                .fill(colors.color_for(district))
        })
        .collect();

    Plot::new("district_bar_chart")
        .x_axis_label("District")
        .y_axis_label("Total production")
        .height(260.0)
        .show_x(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Production by district"));
        });
}

/// Actual vs fitted scatter with the y = x reference line.
pub fn actual_vs_fitted(ui: &mut Ui, actual: &[f64], fitted: &[f64]) {
    let points: Vec<[f64; 2]> = actual
        .iter()
        .zip(fitted.iter())
        .map(|(&a, &f)| [a, f])
        .collect();

    let min = actual.iter().copied().fold(f64::INFINITY, f64::min);
    let max = actual.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Plot::new("actual_vs_fitted")
        .x_axis_label("Actual production")
        .y_axis_label("Fitted production")
        .height(260.0)
        .show(ui, |plot_ui| {
            if min.is_finite() && max.is_finite() {
                plot_ui.line(
                    Line::new(PlotPoints::from(vec![[min, min], [max, max]]))
                        .color(Color32::GRAY)
                        .width(1.0),
                );
            }
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .color(Color32::LIGHT_BLUE)
                    .radius(3.0),
            );
        });
}
