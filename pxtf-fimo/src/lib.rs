//! Turn a FIMO motif-occurrence scan report into a sparse peak-by-motif
//! score matrix, persisted as an AnnData `.h5ad`.
//!
//! The report is consumed as a single sequential stream: each data record
//! resolves its peak row against a fixed [PeakSet], its motif column against
//! a [MotifIndex] grown in first-occurrence order, and lands as one
//! (row, col, score) triplet. Triplets are finalized into a CSR matrix in
//! which repeated (peak, motif) pairs sum, then labeled with peak names (or
//! the column labels of an existing ATAC accessibility dataset) and written
//! out.
//!
//! [PeakSet]: pxtf_core::models::PeakSet
//! [MotifIndex]: pxtf_core::models::MotifIndex

pub mod consts;
pub mod output;
pub mod reader;
pub mod scoring;
pub mod triplets;

// re-exports
pub use output::*;
pub use reader::*;
pub use scoring::*;
pub use triplets::*;
