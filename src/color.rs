use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: district name → Color32
// ---------------------------------------------------------------------------

/// Maps each district to a distinct colour for the scatter and bar charts.
#[derive(Debug, Clone)]
pub struct DistrictColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl DistrictColors {
    /// Build the map from the dataset's sorted district list.
    pub fn new(districts: &[String]) -> Self {
        let palette = generate_palette(districts.len());
        let mapping: BTreeMap<String, Color32> = districts
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        DistrictColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a district; grey for unknown/missing names.
    pub fn color_for(&self, district: &str) -> Color32 {
        self.mapping
            .get(district)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size_matches_request() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn districts_get_distinct_colors() {
        let districts = vec!["Binong".to_string(), "Ciasem".to_string()];
        let colors = DistrictColors::new(&districts);
        assert_ne!(colors.color_for("Binong"), colors.color_for("Ciasem"));
        assert_eq!(colors.color_for("Unknown"), Color32::GRAY);
    }
}
