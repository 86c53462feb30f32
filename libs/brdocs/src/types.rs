//! Typed document definitions.
//!
//! Each type wraps the raw digits of a number that passed checksum
//! validation. Use the string-level functions in [`crate::cnpj`],
//! [`crate::cpf`] and [`crate::pis`] for partial or untrusted input.

use serde::{Deserialize, Serialize};

use crate::cpf::FiscalRegion;
use crate::define_document;
use crate::profile::{DocumentProfile, Options};

define_document!(Cnpj, cnpj);
define_document!(Cpf, cpf);
define_document!(Pis, pis);

impl Cnpj {
    /// Branch number (`1` for the headquarters).
    #[must_use]
    pub fn branches(&self) -> u32 {
        crate::cnpj::branches(&self.0, Options::default()).unwrap_or_default()
    }

    /// Whether this number identifies the headquarters.
    #[must_use]
    pub fn is_headquarters(&self) -> bool {
        self.branches() == 1
    }

    /// The 8-digit registration root shared by every branch of a company.
    #[must_use]
    pub fn root(&self) -> &str {
        &self.0[..8]
    }
}

impl Cpf {
    /// Fiscal region that issued this number.
    #[must_use]
    pub fn region(&self) -> FiscalRegion {
        // digits are validated, so the region digit is always 0-9
        crate::cpf::region(&self.0, Options::default()).unwrap_or(FiscalRegion::Tenth)
    }
}

// =============================================================================
// Document Kind
// =============================================================================

/// The supported document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Cnpj,
    Cpf,
    Pis,
}

impl DocumentKind {
    /// All kinds.
    pub const ALL: [Self; 3] = [Self::Cnpj, Self::Cpf, Self::Pis];

    /// The profile driving this kind.
    #[must_use]
    pub const fn profile(self) -> &'static DocumentProfile {
        match self {
            Self::Cnpj => &crate::cnpj::PROFILE,
            Self::Cpf => &crate::cpf::PROFILE,
            Self::Pis => &crate::pis::PROFILE,
        }
    }

    /// Display name, e.g. `"CNPJ"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.profile().name
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Tests
// =============================================================================
