use std::{
    io::{stdin, stdout},
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use typekit::Client;
use typekit_cli::{browser::delete_kits, cli::FetchKitCli, logging, Browser};

const PROG: &str = "fetch-kit";

fn main() -> ExitCode {
    let cli = FetchKitCli::parse();
    logging::init(cli.api.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{PROG}: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &FetchKitCli) -> Result<()> {
    let client = Client::new(cli.api.client_config()?)?;
    log::debug!("parsed options");

    let mut out = stdout().lock();
    delete_kits(&client, &cli.delete, &mut out)?;
    Browser::new(&client, out)?.run(stdin().lock())
}
