//! CNPJ (Cadastro Nacional da Pessoa Jurídica).
//!
//! 14 digits: an 8-digit registration root, a 4-digit branch number and two
//! chained check digits, written as `00.000.000/0000-00`.

use rand::Rng;

use crate::error::DocumentError;
use crate::profile::{DocumentProfile, EmbeddedField, Options};

/// Digits reserved for the branch number.
pub const BRANCHES_LENGTH: usize = 4;

/// The CNPJ document profile.
pub const PROFILE: DocumentProfile = DocumentProfile {
    name: "CNPJ",
    pattern: "##.###.###/####-##",
    base_length: 12,
    check_digits: 2,
    weights: &[6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    field: Some(EmbeddedField {
        offset: 8,
        width: BRANCHES_LENGTH,
    }),
};

/// Digit count of a raw CNPJ.
pub const UNMASKED_LENGTH: usize = PROFILE.unmasked_length();

/// Character count of a formatted CNPJ.
pub const FORMATTED_LENGTH: usize = PROFILE.formatted_length();

/// Options for [`make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOptions {
    /// Return the formatted form instead of raw digits.
    pub strict: bool,

    /// Branch number to embed. Values wider than four digits keep their
    /// leading four digits.
    pub branches: u32,
}

impl Default for MakeOptions {
    fn default() -> Self {
        Self {
            strict: true,
            branches: 1,
        }
    }
}

/// Formats a CNPJ, masking it if it is not full length.
#[must_use]
pub fn format(cnpj: &str) -> String {
    PROFILE.format(cnpj)
}

/// Masks a (possibly partial) CNPJ.
#[must_use]
pub fn mask(cnpj: &str) -> String {
    PROFILE.mask(cnpj)
}

/// Strips everything but digits.
#[must_use]
pub fn unmask(cnpj: &str) -> String {
    PROFILE.unmask(cnpj)
}

/// Whether the CNPJ is 14 copies of the same digit.
#[must_use]
pub fn sequence(cnpj: &str) -> bool {
    PROFILE.is_sequence(cnpj)
}

/// Tests whether a CNPJ is valid.
#[must_use]
pub fn test(cnpj: &str, options: Options) -> bool {
    PROFILE.test(cnpj, options)
}

/// Validates a CNPJ, returning its raw digits or the reason it was rejected.
pub fn validate(cnpj: &str, options: Options) -> Result<String, DocumentError> {
    PROFILE.validate(cnpj, options)
}

/// Branch number of a full-length CNPJ (`1` for the headquarters).
#[must_use]
pub fn branches(cnpj: &str, options: Options) -> Option<u32> {
    PROFILE.embedded_value(cnpj, options)
}

/// Makes a random valid CNPJ.
#[must_use]
pub fn make(options: MakeOptions) -> String {
    make_with(&mut rand::rng(), options)
}

/// Makes a random valid CNPJ from the given RNG.
pub fn make_with<R: Rng + ?Sized>(rng: &mut R, options: MakeOptions) -> String {
    PROFILE.make_with(rng, Some(u64::from(options.branches)), options.strict)
}

/// Computes one check digit for `base`.
#[must_use]
pub fn digit(base: &str) -> u8 {
    crate::check_digit(PROFILE.weights, base)
}
