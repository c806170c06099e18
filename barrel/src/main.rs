mod cli;
mod config;
mod error;
mod logging;
mod ops;
mod reports;

use barrel_core::FsEntries;
use eyre::Result;

use crate::{
    error::UnwrapOrExit,
    ops::generate::GenerateOptions,
    reports::{Report, TerminalOutput},
};

fn main() -> Result<()> {
    color_eyre::install()?;

    let config = cli::parse_args(std::env::args_os()).unwrap_or_exit();
    logging::init(config.verbose);

    let report = ops::generate(&FsEntries, GenerateOptions::from(&config))?;
    report.render(&mut TerminalOutput::new());
    Ok(())
}
