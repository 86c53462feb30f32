//! Make command (random valid numbers).

use anyhow::Result;
use brdocs::cpf::FiscalRegion;
use brdocs::{cnpj, cpf, pis, DocumentKind};
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::print_output;

use super::{CommandContext, KindArg};

/// Upper bound on `--count`.
const MAX_COUNT: usize = 10_000;

/// Generate random valid numbers.
#[derive(Debug, Args)]
pub struct MakeCommand {
    /// Document kind.
    #[arg(value_enum)]
    kind: KindArg,

    /// How many numbers to generate.
    #[arg(long, short = 'n', default_value_t = 1)]
    count: usize,

    /// Print raw digits instead of the formatted form.
    #[arg(long)]
    raw: bool,

    /// Branch number to embed (CNPJ only). Wider values keep their leading four digits.
    #[arg(long)]
    branches: Option<u32>,

    /// Fiscal region digit to embed, 0-9 (CPF only).
    #[arg(long)]
    region: Option<u8>,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Debug, Serialize, Tabled)]
struct MadeRow {
    #[tabled(rename = "#")]
    index: usize,
    kind: DocumentKind,
    number: String,
}

/// A validated generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Plan {
    Cnpj(cnpj::MakeOptions),
    Cpf(cpf::MakeOptions),
    Pis(pis::MakeOptions),
}

impl Plan {
    fn kind(self) -> DocumentKind {
        match self {
            Plan::Cnpj(_) => DocumentKind::Cnpj,
            Plan::Cpf(_) => DocumentKind::Cpf,
            Plan::Pis(_) => DocumentKind::Pis,
        }
    }

    fn make<R: Rng + ?Sized>(self, rng: &mut R) -> String {
        match self {
            Plan::Cnpj(options) => cnpj::make_with(rng, options),
            Plan::Cpf(options) => cpf::make_with(rng, options),
            Plan::Pis(options) => pis::make_with(rng, options),
        }
    }
}

impl MakeCommand {
    fn plan(&self) -> Result<Plan, CliError> {
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(CliError::InvalidArgument(format!(
                "--count must be between 1 and {MAX_COUNT}"
            )));
        }

        let strict = !self.raw;
        let kind = DocumentKind::from(self.kind);

        if self.branches.is_some() && kind != DocumentKind::Cnpj {
            return Err(CliError::InvalidArgument(format!(
                "--branches only applies to CNPJ, not {kind}"
            )));
        }

        if self.region.is_some() && kind != DocumentKind::Cpf {
            return Err(CliError::InvalidArgument(format!(
                "--region only applies to CPF, not {kind}"
            )));
        }

        let plan = match kind {
            DocumentKind::Cnpj => Plan::Cnpj(cnpj::MakeOptions {
                strict,
                branches: self.branches.unwrap_or(1),
            }),
            DocumentKind::Cpf => {
                let fiscal_region = self
                    .region
                    .map(|digit| {
                        FiscalRegion::from_digit(digit).ok_or_else(|| {
                            CliError::InvalidArgument(format!(
                                "--region must be a single digit, got {digit}"
                            ))
                        })
                    })
                    .transpose()?;
                Plan::Cpf(cpf::MakeOptions {
                    strict,
                    fiscal_region,
                })
            }
            DocumentKind::Pis => Plan::Pis(pis::MakeOptions { strict }),
        };

        Ok(plan)
    }

    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let plan = self.plan()?;
        debug!(?plan, count = self.count, seed = ?self.seed, "generating documents");

        let numbers = match self.seed {
            Some(seed) => generate(plan, self.count, &mut StdRng::seed_from_u64(seed)),
            None => generate(plan, self.count, &mut rand::rng()),
        };

        let rows: Vec<MadeRow> = numbers
            .into_iter()
            .enumerate()
            .map(|(i, number)| MadeRow {
                index: i + 1,
                kind: plan.kind(),
                number,
            })
            .collect();

        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn generate<R: Rng + ?Sized>(plan: Plan, count: usize, rng: &mut R) -> Vec<String> {
    (0..count).map(|_| plan.make(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use brdocs::Options;

    fn command(kind: KindArg) -> MakeCommand {
        MakeCommand {
            kind,
            count: 1,
            raw: false,
            branches: None,
            region: None,
            seed: None,
        }
    }

    #[test]
    fn test_plan_defaults() {
        let plan = command(KindArg::Cnpj).plan().unwrap();
        assert_eq!(plan, Plan::Cnpj(cnpj::MakeOptions::default()));
    }

    #[test]
    fn test_plan_rejects_misplaced_options() {
        let mut cmd = command(KindArg::Pis);
        cmd.branches = Some(2);
        assert!(matches!(cmd.plan(), Err(CliError::InvalidArgument(_))));

        let mut cmd = command(KindArg::Cnpj);
        cmd.region = Some(1);
        assert!(matches!(cmd.plan(), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_plan_rejects_bad_region_and_count() {
        let mut cmd = command(KindArg::Cpf);
        cmd.region = Some(12);
        assert!(cmd.plan().is_err());

        let mut cmd = command(KindArg::Cpf);
        cmd.count = 0;
        assert!(cmd.plan().is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut cmd = command(KindArg::Cpf);
        cmd.region = Some(8);
        cmd.raw = true;
        let plan = cmd.plan().unwrap();

        let a = generate(plan, 5, &mut StdRng::seed_from_u64(42));
        let b = generate(plan, 5, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);

        for number in &a {
            assert_eq!(number.len(), cpf::UNMASKED_LENGTH);
            assert_eq!(
                cpf::region(number, Options::default()),
                Some(FiscalRegion::Eighth)
            );
        }
    }
}
