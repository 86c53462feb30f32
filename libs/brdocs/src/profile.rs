//! The document engine shared by every document kind.
//!
//! A [`DocumentProfile`] describes one kind of document number: its canonical
//! punctuated shape, how many digits feed the checksum, the checksum weights
//! and where an embedded metadata field lives. All masking, validation and
//! generation logic is written once against a profile, and each document
//! module instantiates it with its own `PROFILE` constant.

use rand::Rng;

use crate::checksum::check_digit;
use crate::digits;
use crate::error::DocumentError;

/// Placeholder for a digit in a profile pattern.
pub const DIGIT_SLOT: char = '#';

/// Validation options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Also require the canonical punctuated form.
    pub strict: bool,
}

impl Options {
    /// Options with strict validation enabled.
    pub const STRICT: Self = Self { strict: true };
}

/// A metadata field embedded in the base digits of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedField {
    /// Index of the first digit of the field in the raw number.
    pub offset: usize,
    /// Number of digits reserved for the field.
    pub width: usize,
}

impl EmbeddedField {
    /// Renders `value` into exactly `width` digits.
    ///
    /// Narrow values are left-padded with zeros. Values wider than the field
    /// keep their leading `width` digits, so `12345` in a 4-digit field
    /// becomes `1234`.
    #[must_use]
    pub fn encode(&self, value: u64) -> String {
        let mut digits = value.to_string();
        if digits.len() > self.width {
            digits.truncate(self.width);
            digits
        } else {
            format!("{digits:0>width$}", width = self.width)
        }
    }
}

/// Constant description of one document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentProfile {
    /// Display name, e.g. `"CNPJ"`.
    pub name: &'static str,

    /// Canonical shape. [`DIGIT_SLOT`] marks a digit, every other character
    /// is a literal separator.
    pub pattern: &'static str,

    /// Number of leading digits the first check digit is computed from.
    pub base_length: usize,

    /// Number of trailing check digits (1 or 2).
    pub check_digits: usize,

    /// Checksum weights, right-aligned against the input digits.
    pub weights: &'static [u8],

    /// Embedded metadata field, if the document carries one.
    pub field: Option<EmbeddedField>,
}

impl DocumentProfile {
    /// Total digit count including check digits.
    #[must_use]
    pub const fn unmasked_length(&self) -> usize {
        self.base_length + self.check_digits
    }

    /// Length of the canonical punctuated form.
    #[must_use]
    pub const fn formatted_length(&self) -> usize {
        self.pattern.len()
    }

    /// Separators of the pattern as `(digit_offset, character)` pairs.
    ///
    /// `digit_offset` is the number of digits that precede the separator.
    pub fn separators(&self) -> impl Iterator<Item = (usize, char)> + '_ {
        self.pattern
            .chars()
            .scan(0usize, |seen, c| {
                if c == DIGIT_SLOT {
                    *seen += 1;
                    Some(None)
                } else {
                    Some(Some((*seen, c)))
                }
            })
            .flatten()
    }

    /// Lays `digits` out over the pattern. A separator is only written when
    /// at least one digit follows it.
    fn render(&self, digits: &str) -> String {
        let mut out = String::with_capacity(self.formatted_length());
        let mut remaining = digits.chars().peekable();

        for slot in self.pattern.chars() {
            if remaining.peek().is_none() {
                break;
            }
            if slot == DIGIT_SLOT {
                out.extend(remaining.next());
            } else {
                out.push(slot);
            }
        }

        out
    }

    /// Masks a possibly partial number, truncating digits past the full length.
    #[must_use]
    pub fn mask(&self, input: &str) -> String {
        let mut digits = digits::extract(input);
        digits.truncate(self.unmasked_length());
        self.render(&digits)
    }

    /// Strips every non-digit character.
    #[must_use]
    pub fn unmask(&self, input: &str) -> String {
        digits::extract(input)
    }

    /// Canonical form for full-length input, masked form otherwise.
    #[must_use]
    pub fn format(&self, input: &str) -> String {
        let digits = digits::extract(input);
        if digits.len() == self.unmasked_length() {
            self.render(&digits)
        } else {
            self.mask(&digits)
        }
    }

    /// Whether `input` is a full-length number made of a single repeated digit.
    #[must_use]
    pub fn is_sequence(&self, input: &str) -> bool {
        let digits = digits::extract(input);
        if digits.len() != self.unmasked_length() {
            return false;
        }

        let mut bytes = digits.bytes();
        match bytes.next() {
            Some(first) => bytes.all(|b| b == first),
            None => false,
        }
    }

    /// Whether `input` has exactly the canonical shape: digits in every
    /// digit slot, the pattern's separators everywhere else, nothing more.
    #[must_use]
    pub fn matches_pattern(&self, input: &str) -> bool {
        input.len() == self.pattern.len()
            && input
                .bytes()
                .zip(self.pattern.bytes())
                .all(|(c, slot)| {
                    if slot == DIGIT_SLOT as u8 {
                        c.is_ascii_digit()
                    } else {
                        c == slot
                    }
                })
    }

    /// Computes the chained check digits for `base`.
    ///
    /// Each check digit is appended to the input of the next one, so the
    /// second digit of a two-digit document is weighted over the base plus
    /// the first digit.
    #[must_use]
    pub fn check_digits_for(&self, base: &str) -> String {
        let mut acc = digits::extract(base);
        let start = acc.len();

        for _ in 0..self.check_digits {
            let digit = check_digit(self.weights, &acc);
            acc.push(char::from(b'0' + digit));
        }

        acc.split_off(start)
    }

    /// Validates `input`, returning its raw digits.
    pub fn validate(&self, input: &str, options: Options) -> Result<String, DocumentError> {
        let digits = digits::extract(input);

        if digits.is_empty() {
            return Err(DocumentError::Empty);
        }

        if digits.len() != self.unmasked_length() {
            return Err(DocumentError::InvalidLength {
                expected: self.unmasked_length(),
                actual: digits.len(),
            });
        }

        if self.is_sequence(&digits) {
            return Err(DocumentError::Sequence);
        }

        let (base, actual) = digits.split_at(self.base_length);
        let expected = self.check_digits_for(base);
        if expected != actual {
            return Err(DocumentError::ChecksumMismatch {
                expected,
                actual: actual.to_string(),
            });
        }

        if options.strict && !self.matches_pattern(input) {
            return Err(DocumentError::NotCanonical {
                expected: self.render(&digits),
            });
        }

        Ok(digits)
    }

    /// Boolean form of [`validate`](Self::validate).
    #[must_use]
    pub fn test(&self, input: &str, options: Options) -> bool {
        self.validate(input, options).is_ok()
    }

    /// Reads the embedded field of a full-length number as an integer.
    ///
    /// With `options.strict`, the digits must also pass checksum validation.
    /// Punctuation is never required here.
    #[must_use]
    pub fn embedded_value(&self, input: &str, options: Options) -> Option<u32> {
        let field = self.field?;
        let digits = digits::extract(input);

        if digits.len() != self.unmasked_length() {
            return None;
        }

        if options.strict && !self.test(&digits, Options::default()) {
            return None;
        }

        digits[field.offset..field.offset + field.width].parse().ok()
    }

    /// Generates a valid number using `rng`.
    ///
    /// `field_value`, when given, is written into the embedded field via
    /// [`EmbeddedField::encode`]. Profiles without a field ignore it.
    pub fn make_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        field_value: Option<u64>,
        strict: bool,
    ) -> String {
        let mut base: String = (0..self.base_length)
            .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
            .collect();

        if let (Some(field), Some(value)) = (self.field, field_value) {
            base.replace_range(field.offset..field.offset + field.width, &field.encode(value));
        }

        let check = self.check_digits_for(&base);
        base.push_str(&check);

        if strict {
            self.format(&base)
        } else {
            base
        }
    }

    /// Generates a valid number using the thread-local RNG.
    #[must_use]
    pub fn make(&self, field_value: Option<u64>, strict: bool) -> String {
        self.make_with(&mut rand::rng(), field_value, strict)
    }
}
