//! Digit extraction shared by every document kind.

/// Returns the ASCII digits of `input`, in order.
///
/// Everything else (punctuation, whitespace, letters, non-ASCII digits) is
/// dropped. Empty input yields an empty string.
#[must_use]
pub fn extract(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `input`.
pub(crate) fn values(input: &str) -> impl DoubleEndedIterator<Item = u32> + '_ {
    input.bytes().filter(u8::is_ascii_digit).map(|b| u32::from(b - b'0'))
}
