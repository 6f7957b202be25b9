use std::path::Path;

use anndata::data::array::dataframe::DataFrameIndex;
use anndata::{AnnData, AnnDataOp, Backend};
use anndata_hdf5::H5;
use anyhow::Result;
use log::info;
use nalgebra_sparse::csr::CsrMatrix;
use polars::prelude::*;

use pxtf_core::errors::PxtfError;
use pxtf_core::models::{MotifIndex, PeakSet};

use crate::consts::RESIZED_PEAK_COL;

/// Row and column labels for the assembled matrix, plus the original peak
/// names when the rows were re-labeled against an accessibility dataset.
#[derive(Clone, Debug)]
pub struct PeakTfLabels {
    pub obs_names: Vec<String>,
    pub var_names: Vec<String>,
    pub resized_peaks: Option<Vec<String>>,
}

///
/// Resolve the output labels for a scored matrix.
///
/// Without `atac_labels` the rows carry the peak names directly. With them
/// (linked mode) the rows take the accessibility dataset's own column
/// labels and the peak names move into a `resized_peak` side annotation.
/// The caller is responsible for the labels being in peak-table order; only
/// the lengths are checked here, since the label text is allowed to differ
/// from the peak names.
///
pub fn resolve_labels(
    peaks: &PeakSet,
    motifs: &MotifIndex,
    atac_labels: Option<Vec<String>>,
) -> Result<PeakTfLabels> {
    let var_names = motifs.ids().to_vec();

    match atac_labels {
        None => Ok(PeakTfLabels {
            obs_names: peaks.names().to_vec(),
            var_names,
            resized_peaks: None,
        }),
        Some(labels) => {
            if labels.len() != peaks.len() {
                return Err(PxtfError::LabelCountMismatch {
                    peaks: peaks.len(),
                    labels: labels.len(),
                }
                .into());
            }

            Ok(PeakTfLabels {
                obs_names: labels,
                var_names,
                resized_peaks: Some(peaks.names().to_vec()),
            })
        }
    }
}

/// Read the column-label sequence of an existing accessibility AnnData.
/// The file is only opened for reading; nothing else is pulled from it.
pub fn read_atac_var_names(path: &Path) -> Result<Vec<String>> {
    let adata = AnnData::<H5>::open(H5::open(path)?)?;
    let var_names = adata.var_names().into_vec();

    info!(
        "Read {} labels from accessibility dataset {:?}",
        var_names.len(),
        path
    );

    Ok(var_names)
}

///
/// Persist the labeled matrix as an `.h5ad` file.
///
/// X is the CSR score matrix, obs/var names come from [PeakTfLabels], and in
/// linked mode the original peak names land in the `resized_peak` obs
/// column.
///
pub fn write_peak_tf_h5ad(
    matrix: CsrMatrix<f64>,
    labels: &PeakTfLabels,
    path: &Path,
) -> Result<()> {
    let adata = AnnData::<H5>::new(path)?;

    let obs_index: DataFrameIndex = labels.obs_names.iter().cloned().collect();
    let var_index: DataFrameIndex = labels.var_names.iter().cloned().collect();

    adata.set_x(matrix)?;
    adata.set_obs_names(obs_index)?;
    adata.set_var_names(var_index)?;

    if let Some(resized_peaks) = &labels.resized_peaks {
        let obs = DataFrame::new(vec![Series::new(RESIZED_PEAK_COL, resized_peaks.clone())])?;
        adata.set_obs(obs)?;
    }

    info!(
        "Wrote {} x {} peak-by-motif AnnData to {:?}",
        labels.obs_names.len(),
        labels.var_names.len(),
        path
    );

    Ok(())
}
