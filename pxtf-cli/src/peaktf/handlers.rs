use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use log::info;

use pxtf_core::models::PeakSet;
use pxtf_fimo::consts;
use pxtf_fimo::{peak_scoring_from_fimo, read_atac_var_names, resolve_labels, write_peak_tf_h5ad};

pub fn run_peaktf(matches: &ArgMatches) -> Result<()> {
    // get arguments from CLI
    let peak_file = matches
        .get_one::<String>("peak-file")
        .expect("A path to the peak table is required.");

    let atac = matches.get_one::<String>("atac");

    let default_fimo_dir = consts::DEFAULT_FIMO_DIR.to_string();
    let fimo_res = matches
        .get_one::<String>("fimo-res")
        .unwrap_or(&default_fimo_dir);

    let default_outdir = consts::DEFAULT_OUTDIR.to_string();
    let outdir = matches.get_one::<String>("outdir").unwrap_or(&default_outdir);

    // coerce arguments to types
    let peaks = PeakSet::try_from(Path::new(peak_file.as_str()))?;
    let fimo = Path::new(fimo_res).join(consts::FIMO_FILE_NAME);

    info!("Scoring {:?} over {} peaks", fimo, peaks.len());

    let (matrix, motifs) = peak_scoring_from_fimo(&fimo, &peaks)?;

    let atac_labels = match atac {
        Some(path) => Some(read_atac_var_names(Path::new(path))?),
        None => None,
    };
    let labels = resolve_labels(&peaks, &motifs, atac_labels)?;

    let out = Path::new(outdir).join(consts::OUT_FILE_NAME);
    write_peak_tf_h5ad(matrix, &labels, &out)?;

    Ok(())
}
