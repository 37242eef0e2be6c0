use std::collections::BTreeSet;

use super::model::ApplicationTable;

// ---------------------------------------------------------------------------
// Filter predicate: which statuses are selected
// ---------------------------------------------------------------------------

/// Statuses currently ticked by the user. An empty set selects no rows.
pub type StatusSelection = BTreeSet<String>;

/// Initialise a [`StatusSelection`] with every observed status (show everything).
pub fn init_selection(table: &ApplicationTable) -> StatusSelection {
    table.statuses.iter().cloned().collect()
}

/// Return indices of records whose status is in `selected`, in table order.
pub fn filtered_indices(table: &ApplicationTable, selected: &StatusSelection) -> Vec<usize> {
    if selected.is_empty() {
        return Vec::new();
    }
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| selected.contains(&rec.status))
        .map(|(i, _)| i)
        .collect()
}

/// Narrow `table` to the records whose status is in `selected`.
///
/// The result keeps the source column layout and status set, so it can be
/// rendered with the same headers and colours as the full table.
pub fn filter_by_status(table: &ApplicationTable, selected: &StatusSelection) -> ApplicationTable {
    let records = filtered_indices(table, selected)
        .into_iter()
        .map(|i| table.records[i].clone())
        .collect();
    ApplicationTable {
        records,
        extra_columns: table.extra_columns.clone(),
        statuses: table.statuses.clone(),
    }
}
