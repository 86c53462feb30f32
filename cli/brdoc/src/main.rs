//! brdoc - CLI for Brazilian document numbers
//!
//! Validates, formats and generates CNPJ, CPF and PIS numbers from the
//! terminal or from scripts (`--output json`).

use anyhow::Result;
use clap::Parser;

mod commands;
mod config;
mod error;
mod logging;
mod output;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        // Print error in a user-friendly way
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
