//! Error handling and display for the CLI.

use brdocs::{DocumentError, DocumentKind};
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid {kind}: {source}")]
    InvalidDocument {
        kind: DocumentKind,
        #[source]
        source: DocumentError,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("config error: {0}")]
    Config(String),
}

impl CliError {
    /// Create an invalid-document error.
    pub fn invalid_document(kind: DocumentKind, source: DocumentError) -> Self {
        Self::InvalidDocument { kind, source }
    }
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::InvalidDocument {
                source: DocumentError::NotCanonical { expected },
                ..
            } => {
                eprintln!(
                    "\n{}",
                    format!("Hint: write it as {expected}, or drop --strict.").yellow()
                );
            }
            CliError::InvalidDocument { kind, source } if source.is_length_error() => {
                eprintln!(
                    "\n{}",
                    format!(
                        "Hint: a {kind} has {} digits.",
                        kind.profile().unmasked_length()
                    )
                    .yellow()
                );
            }
            CliError::Config(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: check log_level in the brdoc config.json.".yellow()
                );
            }
            _ => {}
        }
    }
}
