pub const PEAKTF_CMD: &str = "peaktf";

pub const DEFAULT_FIMO_DIR: &str = "results/fimo_result/";
pub const DEFAULT_OUTDIR: &str = "results/";
pub const FIMO_FILE_NAME: &str = "fimo.tsv";
pub const OUT_FILE_NAME: &str = "peak_x_tf.h5ad";

/// First field of the report's header line.
pub const HEADER_MARKER: &str = "motif_id";

// 0-indexed field offsets of a FIMO data row.
pub const MOTIF_FIELD: usize = 1;
pub const PEAK_FIELD: usize = 2;
pub const SCORE_FIELD: usize = 6;
pub const MIN_FIELDS: usize = 7;

/// Obs column that records the original peak name in linked mode.
pub const RESIZED_PEAK_COL: &str = "resized_peak";
