use std::path::{Path, PathBuf};

use crate::color::StatusColors;
use crate::data::aggregate::count_by_status;
use crate::data::filter::{StatusSelection, filtered_indices, init_selection};
use crate::data::loader::load_file;
use crate::data::model::{ApplicationRecord, ApplicationTable, StatusCount};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded table (None if the start-up load failed).
    pub table: Option<ApplicationTable>,

    /// Path the current table was read from.
    pub source_path: Option<PathBuf>,

    /// Statuses ticked in the filter panel.
    pub selection: StatusSelection,

    /// Indices of records passing the current selection (cached).
    pub visible_indices: Vec<usize>,

    /// Counts over the visible records (cached).
    pub status_counts: Vec<StatusCount>,

    /// Colour per status, shared by the filter panel and the chart.
    pub colors: StatusColors,

    /// Start-up load failure. When set, nothing but the message is rendered.
    pub fatal_error: Option<String>,

    /// Non-fatal message shown in the top bar (e.g. a failed File → Open).
    pub status_message: Option<String>,
}

impl AppState {
    /// Load `path` once at start-up; a failure is fatal for the session.
    pub fn load_initial(path: &Path) -> Self {
        let mut state = AppState::default();
        match load_file(path) {
            Ok(table) => {
                log_loaded(path, &table);
                state.set_table(table, path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.fatal_error = Some(e.user_message());
            }
        }
        state
    }

    /// Replace the current table from a user-picked file. On failure the
    /// current table stays and the message goes to the top bar.
    pub fn reload_from(&mut self, path: &Path) {
        match load_file(path) {
            Ok(table) => {
                log_loaded(path, &table);
                self.set_table(table, path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(e.user_message());
            }
        }
    }

    /// Ingest a newly loaded table and select every status.
    pub fn set_table(&mut self, table: ApplicationTable, path: &Path) {
        self.selection = init_selection(&table);
        self.colors = StatusColors::new(&table.statuses);
        self.table = Some(table);
        self.source_path = Some(path.to_path_buf());
        self.status_message = None;
        self.refilter();
    }

    /// Recompute visible rows and counts after a selection change.
    pub fn refilter(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        self.visible_indices = filtered_indices(table, &self.selection);
        self.status_counts =
            count_by_status(self.visible_indices.iter().map(|&i| &table.records[i]));
        log::debug!(
            "{} of {} applications visible across {} statuses",
            self.visible_indices.len(),
            table.len(),
            self.status_counts.len()
        );
    }

    /// Records passing the current selection, in table order.
    pub fn visible_records(&self) -> impl Iterator<Item = &ApplicationRecord> {
        let records: &[ApplicationRecord] = self
            .table
            .as_ref()
            .map(|t| t.records.as_slice())
            .unwrap_or(&[]);
        self.visible_indices.iter().map(move |&i| &records[i])
    }

    /// Toggle a single status in the selection.
    pub fn toggle_status(&mut self, status: &str) {
        if !self.selection.remove(status) {
            self.selection.insert(status.to_string());
        }
        self.refilter();
    }

    /// Select every observed status.
    pub fn select_all(&mut self) {
        if let Some(table) = &self.table {
            self.selection = init_selection(table);
            self.refilter();
        }
    }

    /// Deselect every status.
    pub fn select_none(&mut self) {
        self.selection.clear();
        self.refilter();
    }
}

fn log_loaded(path: &Path, table: &ApplicationTable) {
    log::info!(
        "Loaded {} applications from {} with statuses {:?}",
        table.len(),
        path.display(),
        table.statuses
    );
}
