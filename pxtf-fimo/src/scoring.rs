use std::path::Path;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use nalgebra_sparse::csr::CsrMatrix;

use pxtf_core::errors::PxtfError;
use pxtf_core::models::{MotifIndex, PeakSet};

use crate::reader::FimoReader;
use crate::triplets::TripletBuffer;

///
/// Stream a FIMO scan report into a (peak_count, motif_count) score matrix.
///
/// The pass is strictly sequential: motif columns are assigned in
/// first-occurrence order, so record n+1 is not consumed before record n has
/// resolved its indices. A peak name absent from `peaks` aborts the whole
/// run; it means the report and the peak table do not describe the same
/// universe, and skipping the record would hide that.
///
/// Returns the assembled matrix together with the discovered [MotifIndex],
/// whose order is the matrix's column order.
///
pub fn peak_scoring_from_fimo(
    fimo: &Path,
    peaks: &PeakSet,
) -> Result<(CsrMatrix<f64>, MotifIndex)> {
    let mut motifs = MotifIndex::new();
    let mut triplets = TripletBuffer::new();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed}] {msg} ({per_sec})")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );

    spinner.set_message("Processing scan report...");

    let mut processed_records: u64 = 0;

    for record in FimoReader::from_path(fimo)? {
        let record = record?;

        let row = peaks
            .row(&record.peak_name)
            .ok_or(PxtfError::UnknownPeak(record.peak_name))?;
        let col = motifs.resolve_or_insert(&record.motif_id);
        triplets.push(row, col, record.score);

        // update the spinner
        processed_records += 1;
        if processed_records % 10_000 == 0 {
            spinner.set_message(format!("Processed {} records", processed_records));
        }
        spinner.inc(1);
    }

    spinner.finish_and_clear();

    info!(
        "Scored {} records over {} peaks and {} motifs",
        processed_records,
        peaks.len(),
        motifs.len()
    );

    let matrix = triplets.into_csr(peaks.len(), motifs.len())?;

    Ok((matrix, motifs))
}
