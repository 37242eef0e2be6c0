use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – status filter
// ---------------------------------------------------------------------------

/// Render the status multi-select.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let statuses = match &state.table {
        Some(table) => table.statuses.clone(),
        None => {
            ui.label("No applications loaded.");
            return;
        }
    };

    let header_text = format!(
        "Filter by Application Status  ({}/{})",
        state.selection.len(),
        statuses.len()
    );
    ui.strong(header_text);

    ui.horizontal(|ui: &mut Ui| {
        if ui.small_button("All").clicked() {
            state.select_all();
        }
        if ui.small_button("None").clicked() {
            state.select_none();
        }
    });

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for status in &statuses {
                let mut checked = state.selection.contains(status);
                let text = RichText::new(status).color(state.colors.color_for(status));
                if ui.checkbox(&mut checked, text).changed() {
                    state.toggle_status(status);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} applications loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(path) = &state.source_path {
            ui.separator();
            ui.label(RichText::new(path.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Fatal error screen
// ---------------------------------------------------------------------------

/// Shown instead of the dashboard when the start-up load failed.
pub fn error_screen(ui: &mut Ui, message: &str) {
    ui.heading(crate::app::TITLE);
    ui.add_space(8.0);
    ui.label(RichText::new(message).color(Color32::RED).strong());
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open job applications")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.reload_from(&path);
    }
}
