// ---------------------------------------------------------------------------
// ApplicationRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// A single job application (one row of the source file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationRecord {
    pub job_title: String,
    pub company: String,
    /// Date as written in the file; never parsed.
    pub date_applied: String,
    pub status: String,
    /// Values of any non-required columns, aligned with
    /// [`ApplicationTable::extra_columns`].
    pub extra: Vec<String>,
}

impl ApplicationRecord {
    pub fn new(job_title: &str, company: &str, date_applied: &str, status: &str) -> Self {
        Self {
            job_title: job_title.to_string(),
            company: company.to_string(),
            date_applied: date_applied.to_string(),
            status: status.to_string(),
            extra: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// ApplicationTable – the complete loaded file
// ---------------------------------------------------------------------------

/// The full parsed table with its distinct statuses pre-computed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplicationTable {
    /// All records, in file order.
    pub records: Vec<ApplicationRecord>,
    /// Header names of the columns beyond the four required ones, in file order.
    pub extra_columns: Vec<String>,
    /// Distinct status values in order of first occurrence.
    pub statuses: Vec<String>,
}

impl ApplicationTable {
    /// Build the status set from the loaded records.
    pub fn from_records(records: Vec<ApplicationRecord>, extra_columns: Vec<String>) -> Self {
        let mut statuses: Vec<String> = Vec::new();
        for rec in &records {
            if !statuses.contains(&rec.status) {
                statuses.push(rec.status.clone());
            }
        }
        ApplicationTable {
            records,
            extra_columns,
            statuses,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// StatusCount – one bar of the chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCount {
    pub status: String,
    pub count: usize,
}

impl StatusCount {
    pub fn new(status: &str, count: usize) -> Self {
        Self {
            status: status.to_string(),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_keep_first_occurrence_order() {
        let table = ApplicationTable::from_records(
            vec![
                ApplicationRecord::new("A", "X", "2024-01-01", "Rejected"),
                ApplicationRecord::new("B", "Y", "2024-01-02", "Applied"),
                ApplicationRecord::new("C", "Z", "2024-01-03", "Rejected"),
                ApplicationRecord::new("D", "W", "2024-01-04", "Interview"),
            ],
            Vec::new(),
        );
        assert_eq!(table.statuses, vec!["Rejected", "Applied", "Interview"]);
        assert_eq!(table.len(), 4);
    }

    #[test]
    fn empty_table_has_no_statuses() {
        let table = ApplicationTable::from_records(Vec::new(), Vec::new());
        assert!(table.is_empty());
        assert!(table.statuses.is_empty());
    }
}
