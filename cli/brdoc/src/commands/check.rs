//! Check command.

use anyhow::Result;
use brdocs::{DocumentKind, Options};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_single, print_success, OutputFormat};

use super::{CommandContext, KindArg};

/// Check whether a number is valid.
#[derive(Debug, Args)]
pub struct CheckCommand {
    /// Document kind.
    #[arg(value_enum)]
    kind: KindArg,

    /// Number to check, with or without punctuation.
    value: String,

    /// Also require the canonical punctuated form.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    kind: DocumentKind,
    input: String,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl CheckCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let kind = DocumentKind::from(self.kind);
        let profile = kind.profile();
        let options = Options {
            strict: self.strict,
        };

        debug!(%kind, strict = self.strict, "validating document");
        let result = profile.validate(&self.value, options);

        let report = CheckReport {
            kind,
            input: self.value.clone(),
            valid: result.is_ok(),
            formatted: result.as_ref().ok().map(|digits| profile.format(digits)),
            reason: result.as_ref().err().map(ToString::to_string),
        };

        if ctx.format == OutputFormat::Json {
            print_single(&report);
        }

        match result {
            Ok(digits) => {
                if ctx.format == OutputFormat::Table {
                    print_success(&format!("{} {} is valid", kind, profile.format(&digits)));
                }
                Ok(())
            }
            Err(source) => {
                debug!(%kind, error = %source, "document rejected");
                Err(CliError::invalid_document(kind, source).into())
            }
        }
    }
}
