//! PIS (Programa de Integração Social).
//!
//! 11 digits: ten base digits and a single check digit, written as
//! `000.00000.00-0`. The same numbering is shared by PASEP and NIT.

use rand::Rng;

use crate::error::DocumentError;
use crate::profile::{DocumentProfile, Options};

/// The PIS document profile.
pub const PROFILE: DocumentProfile = DocumentProfile {
    name: "PIS",
    pattern: "###.#####.##-#",
    base_length: 10,
    check_digits: 1,
    weights: &[3, 2, 9, 8, 7, 6, 5, 4, 3, 2],
    field: None,
};

/// Digit count of a raw PIS.
pub const UNMASKED_LENGTH: usize = PROFILE.unmasked_length();

/// Character count of a formatted PIS.
pub const FORMATTED_LENGTH: usize = PROFILE.formatted_length();

/// Options for [`make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOptions {
    /// Return the formatted form instead of raw digits.
    pub strict: bool,
}

impl Default for MakeOptions {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Formats a PIS, masking it if it is not full length.
#[must_use]
pub fn format(pis: &str) -> String {
    PROFILE.format(pis)
}

/// Masks a (possibly partial) PIS.
#[must_use]
pub fn mask(pis: &str) -> String {
    PROFILE.mask(pis)
}

/// Strips everything but digits.
#[must_use]
pub fn unmask(pis: &str) -> String {
    PROFILE.unmask(pis)
}

/// Whether the PIS is 11 copies of the same digit.
#[must_use]
pub fn sequence(pis: &str) -> bool {
    PROFILE.is_sequence(pis)
}

/// Tests whether a PIS is valid.
#[must_use]
pub fn test(pis: &str, options: Options) -> bool {
    PROFILE.test(pis, options)
}

/// Validates a PIS, returning its raw digits or the reason it was rejected.
pub fn validate(pis: &str, options: Options) -> Result<String, DocumentError> {
    PROFILE.validate(pis, options)
}

/// Makes a random valid PIS.
#[must_use]
pub fn make(options: MakeOptions) -> String {
    make_with(&mut rand::rng(), options)
}

/// Makes a random valid PIS from the given RNG.
pub fn make_with<R: Rng + ?Sized>(rng: &mut R, options: MakeOptions) -> String {
    PROFILE.make_with(rng, None, options.strict)
}

/// Computes the check digit for `base`.
#[must_use]
pub fn digit(base: &str) -> u8 {
    crate::check_digit(PROFILE.weights, base)
}
