//! campfind: search, review, save and compare summer camps from a JSON dataset.

mod cli;
mod commands;
mod render;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use log::debug;

use crate::cli::Cli;
use crate::commands::Context;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let records = campfind_seeker::load_records_or_empty(&cli.data);
    debug!("{} camps from {}", records.len(), cli.data.display());

    let color = !cli.no_color && console::colors_enabled();
    let ctx = Context::new(records, &cli.store, color)?;
    let output = commands::run(&ctx, &cli.command)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
