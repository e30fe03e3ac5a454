//! Loader for the small CSV tables that accompany each worked example.

use anyhow::{Context, Result, anyhow};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Directory holding one sub-directory of datasets per book.
pub fn data_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Path of `file` among the datasets of `book`, e.g. `book_path("hypothesis_testing_frost", "FuelsCosts.csv")`.
pub fn book_path(book: &str, file: &str) -> PathBuf {
    data_root().join(book).join(file)
}

/// Header-labelled numeric columns.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Self::from_reader(file).with_context(|| format!("reading {}", path.display()))
    }

    /// Parse comma-separated text with a header row; every cell must be a number.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();
        let mut columns = vec![Vec::new(); headers.len()];

        for (row, record) in rdr.records().enumerate() {
            let record = record.with_context(|| format!("row {}", row + 1))?;
            for ((header, column), field) in headers.iter().zip(columns.iter_mut()).zip(record.iter()) {
                let value: f64 = field.parse().with_context(|| {
                    format!("row {}, column '{header}': '{field}' is not a number", row + 1)
                })?;
                column.push(value);
            }
        }

        trace!(columns = headers.len(), rows = columns.first().map_or(0, Vec::len), "loaded table");
        Ok(Table { headers, columns })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.columns[i].as_slice())
            .ok_or_else(|| anyhow!("no column named '{name}' (have {:?})", self.headers))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
