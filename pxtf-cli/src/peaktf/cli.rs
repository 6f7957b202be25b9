use clap::{arg, Command};

use pxtf_fimo::consts;

pub fn create_peaktf_cli() -> Command {
    Command::new(consts::PEAKTF_CMD)
        .about("Create a peaks x TF AnnData with FIMO scores.")
        .arg(
            arg!(--"peak-file" <file> "Path to the peak table (tab-delimited, header row, unique 'name' column)")
                .required(true),
        )
        .arg(
            arg!(--atac <h5ad> "Path to an ATAC AnnData whose var_names re-label the rows; must be in peak-table order"),
        )
        .arg(arg!(--"fimo-res" <directory> "Path to the FIMO output directory"))
        .arg(arg!(--outdir <directory> "Path to the output directory"))
}
