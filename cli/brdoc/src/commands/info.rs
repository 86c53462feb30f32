//! Info command (embedded metadata).

use anyhow::Result;
use brdocs::cpf::FiscalRegion;
use brdocs::{cnpj, cpf, DocumentError, DocumentKind, Options};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_info, print_single, OutputFormat};

use super::{CommandContext, KindArg};

/// Show metadata embedded in a number.
#[derive(Debug, Args)]
pub struct InfoCommand {
    /// Document kind.
    #[arg(value_enum)]
    kind: KindArg,

    /// Full-length number, with or without punctuation.
    value: String,

    /// Only report metadata for numbers with valid check digits.
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(untagged)]
enum Metadata {
    Branches {
        branches: u32,
        headquarters: bool,
    },
    FiscalRegion {
        region: FiscalRegion,
        digit: u8,
        states: Vec<&'static str>,
    },
}

impl Metadata {
    fn field(&self) -> &'static str {
        match self {
            Metadata::Branches { .. } => "branches",
            Metadata::FiscalRegion { .. } => "fiscal_region",
        }
    }
}

#[derive(Debug, Serialize)]
struct InfoView {
    kind: DocumentKind,
    number: String,
    /// Name of the embedded field, `null` for kinds without one.
    field: Option<&'static str>,
    #[serde(flatten)]
    metadata: Option<Metadata>,
}

impl InfoView {
    fn new(kind: DocumentKind, value: &str, metadata: Option<Metadata>) -> Self {
        Self {
            kind,
            number: kind.profile().format(value),
            field: metadata.as_ref().map(Metadata::field),
            metadata,
        }
    }
}

/// Derive the metadata of `value`.
///
/// The number must be full length; in strict mode its check digits must
/// also be valid. Kinds without an embedded field yield `Ok(None)`.
fn derive(
    kind: DocumentKind,
    value: &str,
    options: Options,
) -> Result<Option<Metadata>, DocumentError> {
    let profile = kind.profile();

    if options.strict {
        profile.validate(value, Options::default())?;
    } else {
        let digits = profile.unmask(value);
        if digits.is_empty() {
            return Err(DocumentError::Empty);
        }
        if digits.len() != profile.unmasked_length() {
            return Err(DocumentError::InvalidLength {
                expected: profile.unmasked_length(),
                actual: digits.len(),
            });
        }
    }

    let metadata = match kind {
        DocumentKind::Cnpj => cnpj::branches(value, options).map(|branches| Metadata::Branches {
            branches,
            headquarters: branches == 1,
        }),
        DocumentKind::Cpf => cpf::region(value, options).map(|region| Metadata::FiscalRegion {
            region,
            digit: region.digit(),
            states: region.states().to_vec(),
        }),
        DocumentKind::Pis => None,
    };

    Ok(metadata)
}

impl InfoCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let kind = DocumentKind::from(self.kind);
        let options = Options {
            strict: self.strict,
        };
        debug!(%kind, strict = self.strict, "deriving metadata");

        let metadata = derive(kind, &self.value, options)
            .map_err(|source| CliError::invalid_document(kind, source))?;
        let view = InfoView::new(kind, &self.value, metadata);

        match ctx.format {
            OutputFormat::Json => print_single(&view),
            OutputFormat::Table => {
                println!("{}: {}", view.kind, view.number);
                match &view.metadata {
                    Some(Metadata::Branches {
                        branches,
                        headquarters,
                    }) => {
                        println!("branch: {:04}", branches);
                        println!("headquarters: {}", if *headquarters { "yes" } else { "no" });
                    }
                    Some(Metadata::FiscalRegion { digit, states, .. }) => {
                        println!("fiscal region: {}", digit);
                        println!("states: {}", states.join(" "));
                    }
                    None => print_info(&format!("{kind} numbers carry no embedded metadata")),
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_branches() {
        assert_eq!(
            derive(DocumentKind::Cnpj, "11.222.333/0001-81", Options::default()),
            Ok(Some(Metadata::Branches {
                branches: 1,
                headquarters: true
            }))
        );
    }

    #[test]
    fn test_derive_region() {
        let metadata = derive(DocumentKind::Cpf, "111.444.777-35", Options::STRICT);
        assert_eq!(
            metadata,
            Ok(Some(Metadata::FiscalRegion {
                region: FiscalRegion::Seventh,
                digit: 7,
                states: vec!["ES", "RJ"],
            }))
        );
    }

    #[test]
    fn test_derive_lenient_ignores_check_digits() {
        let metadata = derive(DocumentKind::Cnpj, "11.222.333/0001-82", Options::default());
        assert!(matches!(
            metadata,
            Ok(Some(Metadata::Branches { branches: 1, .. }))
        ));
    }

    #[test]
    fn test_derive_reports_real_error() {
        assert_eq!(
            derive(DocumentKind::Cpf, "111.444", Options::default()),
            Err(DocumentError::InvalidLength {
                expected: 11,
                actual: 6
            })
        );
        assert_eq!(
            derive(DocumentKind::Cpf, "", Options::default()),
            Err(DocumentError::Empty)
        );
        assert!(derive(DocumentKind::Cpf, "111.444.777-36", Options::STRICT)
            .unwrap_err()
            .is_checksum_error());
        assert_eq!(
            derive(DocumentKind::Cpf, "111.111.111-11", Options::STRICT),
            Err(DocumentError::Sequence)
        );
    }

    #[test]
    fn test_derive_pis_has_no_metadata() {
        assert_eq!(
            derive(DocumentKind::Pis, "123.45678.90-0", Options::STRICT),
            Ok(None)
        );
        assert!(derive(DocumentKind::Pis, "123.45678.90-1", Options::STRICT).is_err());
        assert!(derive(DocumentKind::Pis, "1234", Options::default()).is_err());
    }

    #[test]
    fn test_view_json_shape() {
        let view = InfoView::new(
            DocumentKind::Cnpj,
            "11222333000181",
            Some(Metadata::Branches {
                branches: 1,
                headquarters: true,
            }),
        );
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["kind"], "cnpj");
        assert_eq!(json["number"], "11.222.333/0001-81");
        assert_eq!(json["field"], "branches");
        assert_eq!(json["branches"], 1);
        assert_eq!(json["headquarters"], true);
    }

    #[test]
    fn test_view_json_region_shape() {
        let metadata = derive(DocumentKind::Cpf, "11144477735", Options::default()).unwrap();
        let json = serde_json::to_value(InfoView::new(DocumentKind::Cpf, "11144477735", metadata))
            .unwrap();
        assert_eq!(json["field"], "fiscal_region");
        assert_eq!(json["region"], "seventh");
        assert_eq!(json["digit"], 7);
        assert_eq!(json["states"], serde_json::json!(["ES", "RJ"]));
    }

    #[test]
    fn test_view_json_without_metadata() {
        let metadata = derive(DocumentKind::Pis, "12345678900", Options::default()).unwrap();
        let view = InfoView::new(DocumentKind::Pis, "12345678900", metadata);
        let json = serde_json::to_string(&view).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "pis",
                "number": "123.45678.90-0",
                "field": null,
            })
        );
    }
}
