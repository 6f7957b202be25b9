use anyhow::{anyhow, Result};
use nalgebra_sparse::coo::CooMatrix;
use nalgebra_sparse::csr::CsrMatrix;

///
/// Append-only buffer of (row, col, value) triplets for the streaming pass.
///
/// The final record count is unknown until the report's trailer line, so the
/// buffer grows amortized instead of being pre-sized from any line-count
/// estimate; a wrong estimate would either overrun the arrays or leave
/// trailing zero entries in the matrix.
///
#[derive(Clone, Default)]
pub struct TripletBuffer {
    rows: Vec<usize>,
    cols: Vec<usize>,
    values: Vec<f64>,
}

impl TripletBuffer {
    pub fn new() -> Self {
        TripletBuffer::default()
    }

    pub fn push(&mut self, row: u32, col: u32, value: f64) {
        self.rows.push(row as usize);
        self.cols.push(col as usize);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    ///
    /// Finalize the buffer into a CSR matrix of exactly (nrows, ncols).
    ///
    /// Duplicate (row, col) pairs sum, the standard coordinate-construction
    /// semantics: a peak matched twice by the same motif accumulates both
    /// scores. An empty buffer yields a valid all-zero matrix, so a report
    /// with no data rows still produces a (peak_count, 0) output.
    ///
    pub fn into_csr(self, nrows: usize, ncols: usize) -> Result<CsrMatrix<f64>> {
        if self.is_empty() {
            return Ok(CsrMatrix::zeros(nrows, ncols));
        }

        let coo = CooMatrix::try_from_triplets(nrows, ncols, self.rows, self.cols, self.values)
            .map_err(|e| anyhow!("Invalid triplet data for {}x{} matrix: {}", nrows, ncols, e))?;

        Ok(CsrMatrix::from(&coo))
    }
}
