use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Pastel palette generator
// ---------------------------------------------------------------------------

/// Generates `n` distinct pastel colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.78);
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
// Status → Color32
// ---------------------------------------------------------------------------

/// One colour per status, assigned from the full table so that a status keeps
/// its colour whatever the current selection is.
#[derive(Debug, Clone, Default)]
pub struct StatusColors {
    mapping: BTreeMap<String, Color32>,
}

impl StatusColors {
    pub fn new(statuses: &[String]) -> Self {
        let mapping = statuses
            .iter()
            .cloned()
            .zip(generate_palette(statuses.len()))
            .collect();
        StatusColors { mapping }
    }

    pub fn color_for(&self, status: &str) -> Color32 {
        self.mapping.get(status).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_size_and_distinct_colours() {
        assert!(generate_palette(0).is_empty());
        let colours = generate_palette(6);
        assert_eq!(colours.len(), 6);
        for (i, a) in colours.iter().enumerate() {
            for b in &colours[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_status_falls_back_to_gray() {
        let colors = StatusColors::new(&["Applied".to_string(), "Rejected".to_string()]);
        assert_ne!(colors.color_for("Applied"), colors.color_for("Rejected"));
        assert_eq!(colors.color_for("Ghosted"), Color32::GRAY);
    }
}
