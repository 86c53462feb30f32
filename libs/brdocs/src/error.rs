//! Error types for document validation.

use thiserror::Error;

/// Reasons a document number can be rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The input contains no digits at all.
    #[error("document number cannot be empty")]
    Empty,

    /// The input does not have the expected number of digits.
    #[error("invalid length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Every digit of the number is the same.
    #[error("number is a repeated digit sequence")]
    Sequence,

    /// The trailing check digits do not match the computed ones.
    #[error("check digit mismatch: expected '{expected}', got '{actual}'")]
    ChecksumMismatch { expected: String, actual: String },

    /// The number is valid but not written in its canonical punctuated form.
    #[error("number is not in canonical form: expected '{expected}'")]
    NotCanonical { expected: String },
}

impl DocumentError {
    /// Returns true if this error is about the digit count.
    pub fn is_length_error(&self) -> bool {
        matches!(self, DocumentError::Empty | DocumentError::InvalidLength { .. })
    }

    /// Returns true if this error means the digits themselves are invalid.
    pub fn is_checksum_error(&self) -> bool {
        matches!(
            self,
            DocumentError::Sequence | DocumentError::ChecksumMismatch { .. }
        )
    }
}
