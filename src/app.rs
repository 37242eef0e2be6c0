use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, panels, table};

pub const TITLE: &str = "Job Applications Tracker";

pub const GHOST_JOB_CAPTION: &str = "Suspected ghost jobs are a posted job listing with no \
    intention to hire, often used for appearances or candidate harvesting.";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct JobTrackerApp {
    pub state: AppState,
}

impl JobTrackerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        apply_theme(&cc.egui_ctx);
        Self { state }
    }
}

/// Force the dark theme whatever the OS preference is.
fn apply_theme(ctx: &egui::Context) {
    ctx.set_theme(egui::Theme::Dark);
}

impl eframe::App for JobTrackerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // A failed start-up load halts here: no filters, table or chart.
        if let Some(msg) = &self.state.fatal_error {
            egui::CentralPanel::default().show(ctx, |ui| {
                panels::error_screen(ui, msg);
            });
            return;
        }

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: status filter ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: table, chart, caption ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(TITLE);
                ui.add_space(8.0);

                ui.strong("Filtered Job Applications");
                table::applications_table(ui, &self.state);
                ui.separator();

                ui.strong("Job Applications by Status");
                chart::status_chart(ui, &self.state);
                ui.separator();

                ui.label(egui::RichText::new(GHOST_JOB_CAPTION).small().weak());
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_overrides_system_preference() {
        let ctx = egui::Context::default();
        ctx.options_mut(|o| o.theme_preference = egui::ThemePreference::System);

        apply_theme(&ctx);
        assert_eq!(ctx.theme(), egui::Theme::Dark);
        assert!(ctx.style().visuals.dark_mode);
    }
}
