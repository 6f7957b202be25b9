mod peaktf;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "pxtf";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Build peak-by-motif score matrices from motif-occurrence scan reports.")
        .subcommand_required(true)
        .subcommand(peaktf::cli::create_peaktf_cli())
}

fn main() -> Result<()> {
    env_logger::init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PEAK X TF SCORING
        //
        Some((pxtf_fimo::consts::PEAKTF_CMD, matches)) => {
            peaktf::handlers::run_peaktf(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
