/// egui widgets for each region of the window.
pub mod chart;
pub mod panels;
pub mod table;
