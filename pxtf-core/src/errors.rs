use thiserror::Error;

#[derive(Error, Debug)]
pub enum PxtfError {
    #[error("Can't read file: {0}")]
    FileReadError(String),

    #[error("Peak table is missing a '{0}' column")]
    MissingNameColumn(String),

    #[error("Peak name '{0}' from the scan report is not in the peak table")]
    UnknownPeak(String),

    #[error("Line {0}: expected at least {1} tab-separated fields, found {2}")]
    TruncatedRecord(u64, usize, usize),

    #[error("Line {0}: can't parse score '{1}' as a number")]
    InvalidScore(u64, String),

    #[error("Peak table has {peaks} peaks but the accessibility dataset has {labels} labels")]
    LabelCountMismatch { peaks: usize, labels: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
