//! Job applications dashboard: load a CSV of applications, filter by status,
//! show the rows and a bar chart of status counts.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
