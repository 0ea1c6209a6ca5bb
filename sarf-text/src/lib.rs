//! Text-boundary helpers for the lexical index
//!
//! Conversion between raw bytes, `&str` and Unicode scalar sequences, plus
//! Arabic-block detection. Everything here is a pure function over its
//! input; the index crates never call into this module, callers convert at
//! the boundary and hand the index plain keys.

mod normalize;

pub use normalize::Normalizer;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    #[error("malformed utf-8 input: {0}")]
    MalformedUtf8(#[from] std::str::Utf8Error),
}

/// Decompose text into its sequence of Unicode scalar values.
pub fn to_scalars(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Rebuild text from a scalar sequence. Exact inverse of [`to_scalars`].
pub fn from_scalars(scalars: &[char]) -> String {
    scalars.iter().collect()
}

/// Decode raw bytes as UTF-8.
///
/// The only fallible step of the boundary: untrusted byte input goes
/// through here before anything downstream sees it as text.
pub fn decode_utf8(bytes: &[u8]) -> Result<&str, TextError> {
    Ok(std::str::from_utf8(bytes)?)
}

/// Membership in the basic Arabic block, U+0600 through U+06FF inclusive.
///
/// Presentation forms and the extended Arabic blocks fall outside this
/// range on purpose; text using them should be normalized first.
pub fn is_arabic_scalar(scalar: char) -> bool {
    matches!(scalar, '\u{0600}'..='\u{06FF}')
}

/// True when any scalar of `text` falls in the basic Arabic block.
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(is_arabic_scalar)
}
