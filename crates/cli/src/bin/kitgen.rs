use std::{io::stdout, process::ExitCode};

use clap::Parser;
use typekit_cli::{cli::KitgenCli, generator, logging};

const PROG: &str = "kitgen";

fn main() -> ExitCode {
    let cli = KitgenCli::parse();
    if cli.version {
        println!("{PROG} {}", env!("CARGO_PKG_VERSION"));
        return ExitCode::SUCCESS;
    }
    logging::init(cli.api.debug);

    match generator::run(&cli, &mut stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROG}: {e:#}");
            ExitCode::FAILURE
        }
    }
}
