//! Format, mask and unmask commands.

use anyhow::Result;
use brdocs::{DocumentKind, DocumentProfile};
use clap::Args;
use serde::Serialize;

use crate::output::{print_single, OutputFormat};

use super::{CommandContext, KindArg};

/// Arguments shared by the punctuation commands.
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Document kind.
    #[arg(value_enum)]
    kind: KindArg,

    /// Number to convert; partial input is accepted.
    value: String,
}

/// Punctuation transform to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Conversion {
    Format,
    Mask,
    Unmask,
}

impl Conversion {
    /// Apply the transform with `profile`.
    pub fn apply(self, profile: &DocumentProfile, value: &str) -> String {
        match self {
            Self::Format => profile.format(value),
            Self::Mask => profile.mask(value),
            Self::Unmask => profile.unmask(value),
        }
    }
}

#[derive(Debug, Serialize)]
struct ConvertView {
    kind: DocumentKind,
    conversion: Conversion,
    input: String,
    output: String,
    complete: bool,
}

impl ConvertArgs {
    pub fn run(self, conversion: Conversion, ctx: &CommandContext) -> Result<()> {
        let kind = DocumentKind::from(self.kind);
        let profile = kind.profile();
        let output = conversion.apply(profile, &self.value);

        match ctx.format {
            OutputFormat::Table => println!("{}", output),
            OutputFormat::Json => print_single(&ConvertView {
                kind,
                conversion,
                complete: profile.unmask(&output).len() == profile.unmasked_length(),
                input: self.value,
                output,
            }),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Conversion::Format, DocumentKind::Cnpj, "11222333000181", "11.222.333/0001-81")]
    #[case(Conversion::Mask, DocumentKind::Cpf, "1114447", "111.444.7")]
    #[case(Conversion::Unmask, DocumentKind::Pis, "123.45678.90-0", "12345678900")]
    #[case(Conversion::Format, DocumentKind::Pis, "1234", "123.4")]
    fn test_apply(
        #[case] conversion: Conversion,
        #[case] kind: DocumentKind,
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(conversion.apply(kind.profile(), input), expected);
    }
}
