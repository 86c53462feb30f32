//! CLI commands.

mod check;
mod convert;
mod info;
mod make;

use anyhow::Result;
use brdocs::DocumentKind;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use crate::config::{Config, LOG_ENV, OUTPUT_ENV};
use crate::output::OutputFormat;

/// brdoc - Validate, format and generate Brazilian document numbers.
#[derive(Debug, Parser)]
#[command(name = "brdoc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, short, global = true, value_enum, env = OUTPUT_ENV)]
    output: Option<OutputFormat>,

    /// Log filter when RUST_LOG is unset.
    #[arg(long, global = true, env = LOG_ENV)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check whether a number is valid.
    Check(check::CheckCommand),

    /// Format a number (canonical when complete, masked when partial).
    Format(convert::ConvertArgs),

    /// Mask a possibly partial number.
    Mask(convert::ConvertArgs),

    /// Strip all punctuation from a number.
    Unmask(convert::ConvertArgs),

    /// Generate random valid numbers.
    Make(make::MakeCommand),

    /// Show metadata embedded in a number (fiscal region, branch).
    Info(info::InfoCommand),

    /// Show CLI version.
    Version,
}

/// Document kind argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Cnpj,
    Cpf,
    Pis,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Cnpj => DocumentKind::Cnpj,
            KindArg::Cpf => DocumentKind::Cpf,
            KindArg::Pis => DocumentKind::Pis,
        }
    }
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config = Config::load()?;

        let log_level = self.log_level.as_deref().unwrap_or(&config.log_level);
        crate::logging::init(log_level);

        let ctx = CommandContext {
            format: self.output.unwrap_or(config.output),
        };
        debug!(format = ?ctx.format, command = ?self.command, "running command");

        match self.command {
            Commands::Check(cmd) => cmd.run(&ctx),
            Commands::Format(args) => args.run(convert::Conversion::Format, &ctx),
            Commands::Mask(args) => args.run(convert::Conversion::Mask, &ctx),
            Commands::Unmask(args) => args.run(convert::Conversion::Unmask, &ctx),
            Commands::Make(cmd) => cmd.run(&ctx),
            Commands::Info(cmd) => cmd.run(&ctx),
            Commands::Version => {
                println!("brdoc {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub format: OutputFormat,
}
