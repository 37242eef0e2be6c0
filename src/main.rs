use std::path::Path;

use eframe::egui;
use job_tracker::app::{self, JobTrackerApp};
use job_tracker::data::loader::DEFAULT_DATA_PATH;
use job_tracker::state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Load before opening the window so a bad file never reaches the dashboard.
    let state = AppState::load_initial(Path::new(DEFAULT_DATA_PATH));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        app::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(JobTrackerApp::new(cc, state)))),
    )
}
