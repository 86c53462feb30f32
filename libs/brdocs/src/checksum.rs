//! Weighted modulo-11 check digits.

use crate::digits;

const MODULUS: u32 = 11;

/// Computes one modulo-11 check digit of `base` against `weights`.
///
/// Digits are aligned from the right: the last digit of `base` is
/// multiplied by the last weight. Positions missing on the left count as
/// zero, and digits beyond the length of `weights` on the left are ignored.
/// Non-digit characters in `base` are skipped.
///
/// The weighted sum is reduced mod 11; a remainder below 2 yields `0`,
/// anything else yields `11 - remainder`.
#[must_use]
pub fn check_digit(weights: &[u8], base: &str) -> u8 {
    let sum: u32 = digits::values(base)
        .rev()
        .zip(weights.iter().rev())
        .map(|(digit, &weight)| digit * u32::from(weight))
        .sum();

    let remainder = sum % MODULUS;
    if remainder < 2 {
        0
    } else {
        // remainder is in 2..=10, so the result is a single digit
        (MODULUS - remainder) as u8
    }
}
