use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rstest::*;
use tempfile::{tempdir, TempDir};

use pxtf_core::models::PeakSet;
use pxtf_fimo::peak_scoring_from_fimo;

const HEADER: &str =
    "motif_id\tmotif_alt_id\tsequence_name\tstart\tstop\tstrand\tscore\tp-value\tq-value\tmatched_sequence";

#[fixture]
fn peaks() -> PeakSet {
    PeakSet::new(vec![
        "peakA".to_string(),
        "peakB".to_string(),
        "peakC".to_string(),
    ])
}

fn data_row(motif: &str, peak: &str, score: f64) -> String {
    format!(
        "MA0000.0\t{}\t{}\t1\t19\t+\t{}\t1e-8\t1e-4\tACGTACGTACGT",
        motif, peak, score
    )
}

fn write_report(rows: &[String]) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fimo.tsv");
    let mut file = File::create(&path).unwrap();

    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    writeln!(file).unwrap();
    writeln!(file, "# FIMO (Find Individual Motif Occurrences)").unwrap();

    (dir, path)
}

fn entry(matrix: &nalgebra_sparse::csr::CsrMatrix<f64>, row: usize, col: usize) -> f64 {
    matrix
        .get_entry(row, col)
        .map(|e| e.into_value())
        .unwrap_or(0.0)
}

mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_single_record_round_trip(peaks: PeakSet) {
        let (_dir, fimo) = write_report(&[data_row("CTCF", "peakB", 18.5)]);

        let (matrix, motifs) = peak_scoring_from_fimo(&fimo, &peaks).unwrap();

        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 1);
        assert_eq!(matrix.nnz(), 1);
        assert_eq!(entry(&matrix, 1, 0), 18.5);
        assert_eq!(motifs.ids(), &["CTCF"]);
    }

    #[rstest]
    fn test_columns_follow_first_occurrence(peaks: PeakSet) {
        let (_dir, fimo) = write_report(&[
            data_row("M2", "peakA", 1.0),
            data_row("M1", "peakB", 2.0),
            data_row("M2", "peakC", 3.0),
            data_row("M3", "peakA", 4.0),
        ]);

        let (matrix, motifs) = peak_scoring_from_fimo(&fimo, &peaks).unwrap();

        assert_eq!(motifs.ids(), &["M2", "M1", "M3"]);
        assert_eq!(matrix.ncols(), 3);
        assert_eq!(entry(&matrix, 0, 0), 1.0);
        assert_eq!(entry(&matrix, 1, 1), 2.0);
        assert_eq!(entry(&matrix, 2, 0), 3.0);
        assert_eq!(entry(&matrix, 0, 2), 4.0);
    }

    #[rstest]
    fn test_repeated_pair_sums(peaks: PeakSet) {
        // two overlapping matches of the same motif in the same peak
        let (_dir, fimo) = write_report(&[
            data_row("CTCF", "peakA", 7.5),
            data_row("CTCF", "peakA", 2.25),
        ]);

        let (matrix, _) = peak_scoring_from_fimo(&fimo, &peaks).unwrap();

        assert_eq!(matrix.nnz(), 1);
        assert_eq!(entry(&matrix, 0, 0), 9.75);
    }

    #[rstest]
    fn test_empty_report_yields_zero_columns(peaks: PeakSet) {
        let (_dir, fimo) = write_report(&[]);

        let (matrix, motifs) = peak_scoring_from_fimo(&fimo, &peaks).unwrap();

        assert_eq!(matrix.nrows(), 3);
        assert_eq!(matrix.ncols(), 0);
        assert_eq!(matrix.nnz(), 0);
        assert!(motifs.is_empty());
    }

    #[rstest]
    fn test_unknown_peak_aborts(peaks: PeakSet) {
        let (_dir, fimo) = write_report(&[
            data_row("CTCF", "peakA", 1.0),
            data_row("CTCF", "peakZ", 2.0),
        ]);

        let result = peak_scoring_from_fimo(&fimo, &peaks);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("peakZ"));
    }

    #[rstest]
    fn test_rows_after_trailer_are_ignored(peaks: PeakSet) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fimo.tsv");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        writeln!(file, "{}", data_row("CTCF", "peakA", 1.0)).unwrap();
        writeln!(file).unwrap();
        // an unknown peak after the trailer must not abort the run
        writeln!(file, "{}", data_row("CTCF", "peakZ", 2.0)).unwrap();

        let (matrix, _) = peak_scoring_from_fimo(&path, &peaks).unwrap();

        assert_eq!(matrix.nnz(), 1);
    }
}
