use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::*;

use crate::errors::PxtfError;

/// Name of the column in the peak table that holds the unique peak names.
pub const PEAK_NAME_COL: &str = "name";

///
/// The fixed half of the index registry: a total, insertion-ordered mapping
/// from peak name to matrix row. Built once from the peak table before the
/// scan report is streamed and read-only afterwards; row order is the
/// table's own row order.
///
#[derive(Clone, Default)]
pub struct PeakSet {
    names: Vec<String>,
    name_to_row: HashMap<String, u32>,
}

impl PeakSet {
    pub fn new(names: Vec<String>) -> Self {
        let mut current_id = 0;
        let mut name_to_row: HashMap<String, u32> = HashMap::new();
        for name in names.iter() {
            name_to_row.entry(name.to_owned()).or_insert_with(|| {
                let old_id = current_id;
                current_id += 1;
                old_id
            });
        }

        PeakSet { names, name_to_row }
    }

    pub fn row(&self, name: &str) -> Option<u32> {
        self.name_to_row.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_row.contains_key(name)
    }

    /// Peak names in table order; index in this slice == matrix row.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl TryFrom<&Path> for PeakSet {
    type Error = anyhow::Error;

    ///
    /// Create a new [PeakSet] from a tab-delimited peak table with a header
    /// row and a `name` column.
    ///
    /// # Arguments:
    /// - value: path to the peak table on disk.
    fn try_from(value: &Path) -> Result<Self> {
        let df = CsvReader::from_path(value)
            .with_context(|| format!("Failed to open peak table: {:?}", value))?
            .has_header(true)
            .with_separator(b'\t')
            .finish()
            .with_context(|| format!("There was an error reading the peak table: {:?}", value))?;

        let names = df
            .column(PEAK_NAME_COL)
            .map_err(|_| PxtfError::MissingNameColumn(PEAK_NAME_COL.to_string()))?
            .utf8()
            .map_err(|_| PxtfError::MissingNameColumn(PEAK_NAME_COL.to_string()))?;

        let mut peak_names = Vec::with_capacity(names.len());
        for name in names.into_iter() {
            match name {
                Some(name) => peak_names.push(name.to_string()),
                None => {
                    return Err(PxtfError::FileReadError(format!(
                        "Empty peak name in table: {:?}",
                        value
                    ))
                    .into())
                }
            }
        }

        Ok(PeakSet::new(peak_names))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::NamedTempFile;

    use super::*;

    #[fixture]
    fn peak_table() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chr\tstart\tend\tname").unwrap();
        writeln!(file, "chr1\t100\t600\tpeakA").unwrap();
        writeln!(file, "chr1\t900\t1400\tpeakB").unwrap();
        writeln!(file, "chr2\t250\t750\tpeakC").unwrap();
        file
    }

    #[rstest]
    fn test_rows_follow_table_order(peak_table: NamedTempFile) {
        let peaks = PeakSet::try_from(peak_table.path()).unwrap();

        assert_eq!(peaks.len(), 3);
        assert_eq!(peaks.row("peakA"), Some(0));
        assert_eq!(peaks.row("peakB"), Some(1));
        assert_eq!(peaks.row("peakC"), Some(2));
        assert_eq!(peaks.names(), &["peakA", "peakB", "peakC"]);
    }

    #[rstest]
    fn test_unknown_name_misses(peak_table: NamedTempFile) {
        let peaks = PeakSet::try_from(peak_table.path()).unwrap();

        assert_eq!(peaks.row("chr1:100-600"), None);
        assert!(!peaks.contains("peakD"));
    }

    #[rstest]
    fn test_missing_name_column() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "chr\tstart\tend").unwrap();
        writeln!(file, "chr1\t100\t600").unwrap();

        let result = PeakSet::try_from(file.path());
        assert!(result.is_err());
    }
}
