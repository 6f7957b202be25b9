pub mod motif_index;
pub mod peak_set;

// re-exports
pub use motif_index::MotifIndex;
pub use peak_set::PeakSet;
