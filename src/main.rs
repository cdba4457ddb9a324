//! CLI entry point for the photo-mosaic tool

use clap::Parser;
use std::process::ExitCode;
use tessellate::io::cli::{Cli, MosaicRunner};

// Allow print for reporting the failure that ends the run
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    cli.init_logging();

    let mut runner = MosaicRunner::new(cli);
    if let Err(err) = runner.run() {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
