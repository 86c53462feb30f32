//! CPF (Cadastro de Pessoas Físicas).
//!
//! 11 digits: nine base digits, the last of which identifies the fiscal
//! region that issued the number, and two chained check digits, written as
//! `000.000.000-00`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::profile::{DocumentProfile, EmbeddedField, Options};

/// Index of the fiscal region digit in a raw CPF.
pub const UNMASKED_FISCAL_REGION_DIGIT_INDEX: usize = 8;

/// Index of the fiscal region digit in a formatted CPF.
pub const FORMATTED_FISCAL_REGION_DIGIT_INDEX: usize = 10;

/// The CPF document profile.
pub const PROFILE: DocumentProfile = DocumentProfile {
    name: "CPF",
    pattern: "###.###.###-##",
    base_length: 9,
    check_digits: 2,
    weights: &[11, 10, 9, 8, 7, 6, 5, 4, 3, 2],
    field: Some(EmbeddedField {
        offset: UNMASKED_FISCAL_REGION_DIGIT_INDEX,
        width: 1,
    }),
};

/// Digit count of a raw CPF.
pub const UNMASKED_LENGTH: usize = PROFILE.unmasked_length();

/// Character count of a formatted CPF.
pub const FORMATTED_LENGTH: usize = PROFILE.formatted_length();

/// States served by each fiscal region, indexed by region digit.
pub const FISCAL_REGION_STATES: [&[&str]; 10] = [
    &["RS"],
    &["DF", "GO", "MT", "MS", "TO"],
    &["AC", "AP", "AM", "PA", "RO", "RR"],
    &["CE", "MA", "PI"],
    &["AL", "PB", "PE", "RN"],
    &["BA", "SE"],
    &["MG"],
    &["ES", "RJ"],
    &["SP"],
    &["PR", "SC"],
];

/// Receita Federal fiscal region that issued a CPF.
///
/// The region digit equals the region's ordinal, except for the tenth
/// region which is encoded as `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiscalRegion {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
    Ninth,
    Tenth,
}

impl FiscalRegion {
    /// All regions in ordinal order.
    pub const ALL: [Self; 10] = [
        Self::First,
        Self::Second,
        Self::Third,
        Self::Fourth,
        Self::Fifth,
        Self::Sixth,
        Self::Seventh,
        Self::Eighth,
        Self::Ninth,
        Self::Tenth,
    ];

    /// The digit encoding this region in a CPF.
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Fifth => 5,
            Self::Sixth => 6,
            Self::Seventh => 7,
            Self::Eighth => 8,
            Self::Ninth => 9,
            Self::Tenth => 0,
        }
    }

    /// The region encoded by `digit`, if it is a single decimal digit.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            0 => Some(Self::Tenth),
            1..=9 => Some(Self::ALL[digit as usize - 1]),
            _ => None,
        }
    }

    /// State codes served by this region.
    #[must_use]
    pub fn states(self) -> &'static [&'static str] {
        FISCAL_REGION_STATES[usize::from(self.digit())]
    }
}

impl std::fmt::Display for FiscalRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.states().join(" "))
    }
}

/// Options for [`make`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MakeOptions {
    /// Return the formatted form instead of raw digits.
    pub strict: bool,

    /// Fiscal region to embed; random when `None`.
    pub fiscal_region: Option<FiscalRegion>,
}

impl Default for MakeOptions {
    fn default() -> Self {
        Self {
            strict: true,
            fiscal_region: None,
        }
    }
}

/// Formats a CPF, masking it if it is not full length.
#[must_use]
pub fn format(cpf: &str) -> String {
    PROFILE.format(cpf)
}

/// Masks a (possibly partial) CPF.
#[must_use]
pub fn mask(cpf: &str) -> String {
    PROFILE.mask(cpf)
}

/// Strips everything but digits.
#[must_use]
pub fn unmask(cpf: &str) -> String {
    PROFILE.unmask(cpf)
}

/// Whether the CPF is 11 copies of the same digit.
#[must_use]
pub fn sequence(cpf: &str) -> bool {
    PROFILE.is_sequence(cpf)
}

/// Tests whether a CPF is valid.
#[must_use]
pub fn test(cpf: &str, options: Options) -> bool {
    PROFILE.test(cpf, options)
}

/// Validates a CPF, returning its raw digits or the reason it was rejected.
pub fn validate(cpf: &str, options: Options) -> Result<String, DocumentError> {
    PROFILE.validate(cpf, options)
}

/// Fiscal region of a full-length CPF.
#[must_use]
pub fn region(cpf: &str, options: Options) -> Option<FiscalRegion> {
    let digit = PROFILE.embedded_value(cpf, options)?;
    u8::try_from(digit).ok().and_then(FiscalRegion::from_digit)
}

/// Makes a random valid CPF.
#[must_use]
pub fn make(options: MakeOptions) -> String {
    make_with(&mut rand::rng(), options)
}

/// Makes a random valid CPF from the given RNG.
pub fn make_with<R: Rng + ?Sized>(rng: &mut R, options: MakeOptions) -> String {
    let region = options.fiscal_region.map(|r| u64::from(r.digit()));
    PROFILE.make_with(rng, region, options.strict)
}

/// Computes one check digit for `base`.
#[must_use]
pub fn digit(base: &str) -> u8 {
    crate::check_digit(PROFILE.weights, base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_format() {
        assert_eq!(format("11111111111"), "111.111.111-11");
        assert_eq!(format("111111111"), "111.111.111");
    }

    #[rstest]
    #[case("1", "1")]
    #[case("111", "111")]
    #[case("1114", "111.4")]
    #[case("111444777", "111.444.777")]
    #[case("1114447773", "111.444.777-3")]
    #[case("11144477735", "111.444.777-35")]
    #[case("111.444.777-3599", "111.444.777-35")]
    fn test_mask_progressive(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(mask(input), expected);
    }

    #[test]
    fn test_unmask() {
        assert_eq!(unmask("111.111.111-11"), "11111111111");
        assert_eq!(unmask("111.111.111"), "111111111");
    }

    #[test]
    fn test_sequence() {
        assert!(sequence("111.111.111-11"));
        assert!(!sequence("123.456.789-01"));
    }

    #[rstest]
    #[case("111.444.777-35")]
    #[case("11144477735")]
    #[case("529.982.247-25")]
    #[case("123.456.789-09")]
    fn test_valid_fixtures(#[case] cpf: &str) {
        assert!(test(cpf, Options::default()));
    }

    #[test]
    fn test_invalid() {
        assert!(!test("111.111.111-11", Options::default()));
        assert!(!test("11111111111", Options::STRICT));
        assert!(!test("111.444.777-53", Options::default()));
        assert!(!test("111.444.777", Options::default()));
    }

    #[test]
    fn test_strict() {
        let cpf = make(MakeOptions::default());
        assert!(test(&cpf, Options::default()));
        assert!(test(&cpf, Options::STRICT));
        assert!(!test(&unmask(&cpf), Options::STRICT));
    }

    #[test]
    fn test_region() {
        let cpf = make(MakeOptions {
            fiscal_region: Some(FiscalRegion::First),
            ..MakeOptions::default()
        });
        assert_eq!(region(&cpf, Options::default()), Some(FiscalRegion::First));
        assert_eq!(region(&cpf, Options::STRICT), Some(FiscalRegion::First));
        assert_eq!(
            region(&cpf, Options::default()).map(|r| r.to_string()),
            Some("DF GO MT MS TO".to_string())
        );
    }

    #[test]
    fn test_region_fixtures() {
        assert_eq!(
            region("111.444.777-35", Options::default()),
            Some(FiscalRegion::Seventh)
        );
        assert_eq!(
            region("123.456.789-09", Options::STRICT),
            Some(FiscalRegion::Ninth)
        );
    }

    #[test]
    fn test_region_absent() {
        assert_eq!(region("111.111.111", Options::default()), None);
        assert_eq!(region("111.111.111-11", Options::STRICT), None);
    }

    #[test]
    fn test_make_lengths() {
        assert_eq!(make(MakeOptions::default()).len(), FORMATTED_LENGTH);
        let raw = make(MakeOptions {
            strict: false,
            fiscal_region: None,
        });
        assert_eq!(raw.len(), UNMASKED_LENGTH);
    }

    #[test]
    fn test_make_embeds_region_digit() {
        for region in FiscalRegion::ALL {
            let expected = char::from(b'0' + region.digit());

            let formatted = make(MakeOptions {
                strict: true,
                fiscal_region: Some(region),
            });
            assert_eq!(
                formatted.chars().nth(FORMATTED_FISCAL_REGION_DIGIT_INDEX),
                Some(expected)
            );

            let raw = make(MakeOptions {
                strict: false,
                fiscal_region: Some(region),
            });
            assert_eq!(
                raw.chars().nth(UNMASKED_FISCAL_REGION_DIGIT_INDEX),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_fiscal_region_digits_roundtrip() {
        for region in FiscalRegion::ALL {
            assert_eq!(FiscalRegion::from_digit(region.digit()), Some(region));
        }
        assert_eq!(FiscalRegion::from_digit(10), None);
        assert_eq!(FiscalRegion::Tenth.states(), &["RS"]);
        assert_eq!(FiscalRegion::Ninth.to_string(), "PR SC");
    }

    #[test]
    fn test_digit() {
        let cpf = make(MakeOptions {
            strict: false,
            fiscal_region: Some(FiscalRegion::First),
        });
        assert_eq!(digit(&cpf[..9]).to_string(), &cpf[9..10]);
    }

    #[test]
    fn test_lengths() {
        assert_eq!(UNMASKED_LENGTH, 11);
        assert_eq!(FORMATTED_LENGTH, 14);
    }
}
