use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// A loaded dataset: named columns and rows of optional cells
///
/// `None` marks a missing value (an empty cell or a short row).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Option<String>>) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell at (`row`, `column`), `None` when missing or out of range
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .and_then(|c| c.as_deref())
    }

    /// Parse a headed CSV stream. Empty cells become missing values.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let columns = csv_reader
            .headers()
            .context("Failed to read dataset header")?
            .iter()
            .map(str::to_string)
            .collect();
        let mut table = Table::new(columns);

        for (i, record) in csv_reader.records().enumerate() {
            let record = record.with_context(|| format!("Failed to read dataset row {}", i + 1))?;
            let row = record
                .iter()
                .map(|cell| if cell.is_empty() { None } else { Some(cell.to_string()) })
                .collect();
            table.push_row(row);
        }

        Ok(table)
    }
}

/// Where a dataset comes from.
///
/// Downloading from the dataset host is left to whoever implements this;
/// the exporter only needs the resulting table.
pub trait DatasetSource {
    /// Human readable origin, used in log messages
    fn describe(&self) -> String;

    fn load(&self) -> Result<Table>;
}

/// Reads an already-downloaded CSV export, from a file or stdin
#[derive(Debug, Clone)]
pub struct CsvDatasetSource {
    path: Option<PathBuf>,
}

impl CsvDatasetSource {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        CsvDatasetSource {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    pub fn stdin() -> Self {
        CsvDatasetSource { path: None }
    }
}

impl DatasetSource for CsvDatasetSource {
    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "<stdin>".to_string(),
        }
    }

    fn load(&self) -> Result<Table> {
        match &self.path {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open dataset: {}", path.display()))?;
                Table::from_csv_reader(file)
            }
            None => Table::from_csv_reader(std::io::stdin().lock()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_csv_with_missing_cells() {
        let data = "Title,BodyPart,Equipment\nPush-up,Chest,\nSquat,,Barbell\nPlank\n";
        let table = Table::from_csv_reader(data.as_bytes()).unwrap();

        assert_eq!(table.columns, vec!["Title", "BodyPart", "Equipment"]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.cell(0, 1), Some("Chest"));
        assert_eq!(table.cell(0, 2), None);
        assert_eq!(table.cell(1, 1), None);
        assert_eq!(table.cell(2, 0), Some("Plank"));
        assert_eq!(table.cell(2, 2), None);
        assert_eq!(table.cell(9, 0), None);
    }

    #[test]
    fn test_quoted_cells_are_unescaped() {
        let data = "name,notes\n\"Row, seated\",\"say \"\"slow\"\"\"\n";
        let table = Table::from_csv_reader(data.as_bytes()).unwrap();
        assert_eq!(table.cell(0, 0), Some("Row, seated"));
        assert_eq!(table.cell(0, 1), Some("say \"slow\""));
    }

    #[test]
    fn test_file_source_loads() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name,type").unwrap();
        writeln!(file, "Rowing,Cardio").unwrap();

        let source = CsvDatasetSource::from_path(file.path());
        assert_eq!(source.describe(), file.path().display().to_string());

        let table = source.load().unwrap();
        assert_eq!(table.columns, vec!["name", "type"]);
        assert_eq!(table.cell(0, 1), Some("Cardio"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = CsvDatasetSource::from_path(dir.path().join("absent.csv"));
        let err = source.load().unwrap_err();
        assert!(err.to_string().contains("Failed to open dataset"));
    }
}
