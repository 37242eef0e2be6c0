use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

const CHART_HEIGHT: f32 = 320.0;
const BAR_WIDTH: f64 = 0.6;

/// Shown instead of the chart when the selection leaves no rows.
pub const NO_DATA_TEXT: &str = "No data available for the selected filters.";

// ---------------------------------------------------------------------------
// Status bar chart
// ---------------------------------------------------------------------------

/// Render one bar per status count, coloured per status.
pub fn status_chart(ui: &mut Ui, state: &AppState) {
    if state.status_counts.is_empty() {
        ui.label(NO_DATA_TEXT);
        return;
    }

    let labels: Vec<String> = state
        .status_counts
        .iter()
        .map(|c| c.status.clone())
        .collect();

    // One chart per status so each gets its own legend entry.
    let charts: Vec<BarChart> = state
        .status_counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let color = state.colors.color_for(&c.status);
            let bar = Bar::new(i as f64, c.count as f64)
                .name(&c.status)
                .fill(color)
                .width(BAR_WIDTH);
            BarChart::new(vec![bar]).name(&c.status).color(color)
        })
        .collect();

    Plot::new("status_chart")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Application Status")
        .y_axis_label("Count")
        .x_axis_formatter(move |mark, _range| status_label(&labels, mark.value))
        .include_y(0.0)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Axis tick label: the status at an integer position, nothing in between.
fn status_label(labels: &[String], value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 1e-6 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_labels_only_on_bar_positions() {
        let labels = vec!["Applied".to_string(), "Rejected".to_string()];
        assert_eq!(status_label(&labels, 0.0), "Applied");
        assert_eq!(status_label(&labels, 1.0), "Rejected");
        assert_eq!(status_label(&labels, 0.5), "");
        assert_eq!(status_label(&labels, 2.0), "");
        assert_eq!(status_label(&labels, -1.0), "");
    }
}
