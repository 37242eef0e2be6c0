use eframe::egui::{self, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::loader::REQUIRED_COLUMNS;
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;
const MAX_TABLE_HEIGHT: f32 = 280.0;

// ---------------------------------------------------------------------------
// Filtered applications table
// ---------------------------------------------------------------------------

/// Render the currently visible records: required columns first, then any
/// extra columns in file order.
pub fn applications_table(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        return;
    };

    let headers: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .chain(table.extra_columns.iter().map(String::as_str))
        .collect();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .columns(Column::auto().at_least(90.0).clip(true), headers.len())
        .min_scrolled_height(0.0)
        .max_scroll_height(MAX_TABLE_HEIGHT)
        .header(ROW_HEIGHT, |mut header| {
            for name in &headers {
                header.col(|ui| {
                    ui.strong(*name);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let rec = &table.records[state.visible_indices[row.index()]];
                let required = [
                    rec.job_title.as_str(),
                    rec.company.as_str(),
                    rec.date_applied.as_str(),
                ];
                for cell in required {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
                row.col(|ui| {
                    ui.colored_label(state.colors.color_for(&rec.status), &rec.status);
                });
                for cell in &rec.extra {
                    row.col(|ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
