//! Load error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading the applications file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file does not exist.
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but cannot be read.
    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    /// The header row lacks one or more required columns.
    #[error("missing required columns: {}", missing.join(", "))]
    Schema { missing: Vec<String> },

    /// Anything else: other I/O failures, malformed rows, bad encoding.
    #[error("{0}")]
    Unknown(String),
}

impl LoadError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn from_io(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound {
                path: path.to_path_buf(),
            },
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => LoadError::Unknown(err.to_string()),
        }
    }

    /// Classify a CSV error; only I/O errors inside it get a specific kind.
    pub fn from_csv(err: csv::Error, path: &Path) -> Self {
        let msg = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => LoadError::from_io(io_err, path),
            _ => LoadError::Unknown(msg),
        }
    }

    /// Text shown to the user when loading fails.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::NotFound { path } => format!(
                "The file '{}' was not found. Please ensure the file exists in the directory.",
                file_label(path)
            ),
            LoadError::PermissionDenied { path } => format!(
                "Permission denied while trying to read '{}'. Please check file permissions.",
                file_label(path)
            ),
            LoadError::Schema { .. } => format!(
                "Error in file format: The CSV file is missing required columns. Expected columns: {}",
                super::loader::REQUIRED_COLUMNS.join(", ")
            ),
            LoadError::Unknown(msg) => format!("An unexpected error occurred: {msg}"),
        }
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
