use std::io::{BufRead, Lines, Read};
use std::path::Path;

use anyhow::Result;

use pxtf_core::errors::PxtfError;
use pxtf_core::utils::get_dynamic_reader;

use crate::consts::{HEADER_MARKER, MIN_FIELDS, MOTIF_FIELD, PEAK_FIELD, SCORE_FIELD};

/// One accepted data row of the scan report.
#[derive(Clone, Debug, PartialEq)]
pub struct FimoRecord {
    pub motif_id: String,
    pub peak_name: String,
    pub score: f64,
}

///
/// Lazy, single-pass iterator over a FIMO scan report.
///
/// Each physical line is split on tabs and classified: the header line
/// (first field equal to `motif_id`) is skipped, a line with exactly one
/// field ends the record stream (FIMO writes a blank line followed by
/// run-metadata comments after the last data row; none of that is read),
/// and every other line must decode into a [FimoRecord]. A data row with
/// fewer than seven fields or a non-numeric score is a fatal error.
///
/// The report is never buffered whole; arbitrarily large inputs stream in
/// constant memory, gzipped or not.
///
pub struct FimoReader<R: BufRead> {
    lines: Lines<R>,
    line_no: u64,
    done: bool,
}

impl FimoReader<std::io::BufReader<Box<dyn Read>>> {
    pub fn from_path(path: &Path) -> Result<Self> {
        let reader = get_dynamic_reader(path)?;
        Ok(FimoReader::new(reader))
    }
}

impl<R: BufRead> FimoReader<R> {
    pub fn new(reader: R) -> Self {
        FimoReader {
            lines: reader.lines(),
            line_no: 0,
            done: false,
        }
    }

    fn decode(&self, fields: &[&str]) -> Result<FimoRecord> {
        if fields.len() < MIN_FIELDS {
            return Err(PxtfError::TruncatedRecord(self.line_no, MIN_FIELDS, fields.len()).into());
        }

        let score = fields[SCORE_FIELD]
            .parse::<f64>()
            .map_err(|_| PxtfError::InvalidScore(self.line_no, fields[SCORE_FIELD].to_string()))?;

        Ok(FimoRecord {
            motif_id: fields[MOTIF_FIELD].to_string(),
            peak_name: fields[PEAK_FIELD].to_string(),
            score,
        })
    }
}

impl<R: BufRead> Iterator for FimoReader<R> {
    type Item = Result<FimoRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(e)) => return Some(Err(e.into())),
                None => return None,
            };
            self.line_no += 1;

            let fields: Vec<&str> = line.split('\t').collect();

            if fields[0] == HEADER_MARKER {
                continue;
            }

            // a single-field line is the report's end-of-data trailer
            if fields.len() == 1 {
                self.done = true;
                return None;
            }

            return Some(self.decode(&fields));
        }
    }
}
