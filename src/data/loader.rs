use std::fs::File;
use std::path::Path;

use super::error::LoadError;
use super::model::{ApplicationRecord, ApplicationTable};

/// File loaded at start-up, relative to the working directory.
pub const DEFAULT_DATA_PATH: &str = "job_applications.csv";

/// Header names every applications file must carry, matched exactly.
pub const REQUIRED_COLUMNS: [&str; 4] = ["Job Title", "Company", "Date Applied", "Status"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the applications table from a CSV file with a header row.
///
/// The header must contain every name in [`REQUIRED_COLUMNS`]; any further
/// columns are kept as extra columns in file order. Rows shorter than the
/// header are padded with empty cells; rows longer than it are rejected.
pub fn load_file(path: &Path) -> Result<ApplicationTable, LoadError> {
    let file = File::open(path).map_err(|e| LoadError::from_io(e, path))?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::from_csv(e, path))?
        .clone();

    let layout = ColumnLayout::from_headers(&headers)?;

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(|e| LoadError::from_csv(e, path))?;
        if row.len() > headers.len() {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            return Err(LoadError::Unknown(format!(
                "line {line}: found record with {} fields, but the header has {}",
                row.len(),
                headers.len()
            )));
        }
        records.push(layout.record(&row));
    }

    let extra_columns = layout
        .extra
        .iter()
        .map(|&i| headers[i].to_string())
        .collect();

    Ok(ApplicationTable::from_records(records, extra_columns))
}

// ---------------------------------------------------------------------------
// Header → field positions
// ---------------------------------------------------------------------------

/// Position of each required column plus the remaining ones in file order.
struct ColumnLayout {
    job_title: usize,
    company: usize,
    date_applied: usize,
    status: usize,
    extra: Vec<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self, LoadError> {
        let position = |name: &str| headers.iter().position(|h| h == name);

        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|&&name| position(name).is_none())
            .map(|name| name.to_string())
            .collect();

        match (
            position(REQUIRED_COLUMNS[0]),
            position(REQUIRED_COLUMNS[1]),
            position(REQUIRED_COLUMNS[2]),
            position(REQUIRED_COLUMNS[3]),
        ) {
            (Some(job_title), Some(company), Some(date_applied), Some(status)) => {
                let required = [job_title, company, date_applied, status];
                let extra = (0..headers.len())
                    .filter(|i| !required.contains(i))
                    .collect();
                Ok(ColumnLayout {
                    job_title,
                    company,
                    date_applied,
                    status,
                    extra,
                })
            }
            _ => Err(LoadError::Schema { missing }),
        }
    }

    fn record(&self, row: &csv::StringRecord) -> ApplicationRecord {
        let field = |i: usize| row.get(i).unwrap_or("").to_string();
        ApplicationRecord {
            job_title: field(self.job_title),
            company: field(self.company),
            date_applied: field(self.date_applied),
            status: field(self.status),
            extra: self.extra.iter().map(|&i| field(i)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use tempfile::TempDir;

    fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join("job_applications.csv");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_required_columns_in_file_order() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Job Title,Company,Date Applied,Status\n\
             TitleA,CoA,2024-01-01,Applied\n\
             TitleB,CoB,2024-01-02,Rejected\n\
             TitleC,CoC,2024-01-03,Applied\n",
        );

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(
            table.records[1],
            ApplicationRecord::new("TitleB", "CoB", "2024-01-02", "Rejected")
        );
        assert_eq!(table.statuses, vec!["Applied", "Rejected"]);
        assert!(table.extra_columns.is_empty());
    }

    #[test]
    fn reordered_and_extra_columns_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Status,Notes,Company,Job Title,Salary,Date Applied\n\
             Interview,\"Referral, fast track\",Acme,Engineer,100k,2024-03-05\n",
        );

        let table = load_file(&path).unwrap();
        assert_eq!(table.extra_columns, vec!["Notes", "Salary"]);
        let rec = &table.records[0];
        assert_eq!(rec.job_title, "Engineer");
        assert_eq!(rec.company, "Acme");
        assert_eq!(rec.date_applied, "2024-03-05");
        assert_eq!(rec.status, "Interview");
        assert_eq!(rec.extra, vec!["Referral, fast track", "100k"]);
    }

    #[test]
    fn header_only_file_is_an_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Job Title,Company,Date Applied,Status\n");

        let table = load_file(&path).unwrap();
        assert!(table.is_empty());
        assert!(table.statuses.is_empty());
    }

    #[test]
    fn each_missing_required_column_is_a_schema_error() {
        for skip in 0..REQUIRED_COLUMNS.len() {
            let header: Vec<&str> = REQUIRED_COLUMNS
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skip)
                .map(|(_, name)| *name)
                .collect();
            let dir = TempDir::new().unwrap();
            let path = write_csv(&dir, &format!("{}\na,b,c\n", header.join(",")));

            match load_file(&path) {
                Err(LoadError::Schema { missing }) => {
                    assert_eq!(missing, vec![REQUIRED_COLUMNS[skip].to_string()]);
                }
                other => panic!("expected schema error, got {other:?}"),
            }
        }
    }

    #[test]
    fn header_names_are_case_and_spacing_exact() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "job title,Company, Date Applied,Status\nA,B,C,D\n",
        );

        match load_file(&path) {
            Err(LoadError::Schema { missing }) => {
                assert_eq!(missing, vec!["Job Title", "Date Applied"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn empty_file_misses_every_column() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "");

        match load_file(&path) {
            Err(LoadError::Schema { missing }) => assert_eq!(missing.len(), 4),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn nonexistent_path_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope.csv");

        let err = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { path: p } if p == path));
    }

    #[test]
    fn short_row_is_padded_with_empty_cells() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Job Title,Company,Date Applied,Status,Notes\n\
             A,B,2024-01-01,Applied,x\n\
             C,D,2024-01-02,Rejected\n",
        );

        let table = load_file(&path).unwrap();
        assert_eq!(table.len(), 2);
        let rec = &table.records[1];
        assert_eq!(rec.status, "Rejected");
        assert_eq!(rec.extra, vec![""]);
        assert_eq!(table.statuses, vec!["Applied", "Rejected"]);
    }

    #[test]
    fn row_missing_required_cells_loads_blank() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(&dir, "Job Title,Company,Date Applied,Status\nC,D\n");

        let table = load_file(&path).unwrap();
        assert_eq!(table.records[0], ApplicationRecord::new("C", "D", "", ""));
    }

    #[test]
    fn long_row_is_unknown_error() {
        let dir = TempDir::new().unwrap();
        let path = write_csv(
            &dir,
            "Job Title,Company,Date Applied,Status\n\
             A,B,2024-01-01,Applied\n\
             C,D,2024-01-02,Rejected,surplus\n",
        );

        let err = load_file(&path).unwrap_err();
        match err {
            LoadError::Unknown(msg) => assert_eq!(
                msg,
                "line 3: found record with 5 fields, but the header has 4"
            ),
            other => panic!("expected unknown error, got {other:?}"),
        }
    }

    #[test]
    fn directory_path_is_unknown_error() {
        let dir = TempDir::new().unwrap();

        let err = load_file(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Unknown(_)));
    }
}
