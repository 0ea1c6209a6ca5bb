use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RootKeyError {
    #[error("root form cannot be empty")]
    Empty,
}

/// A root form, held as an opaque orderable key.
///
/// Ordering is the derived byte-wise `String` order, which over valid UTF-8
/// coincides with lexicographic order on the sequence of Unicode scalar
/// values. The index never inspects the key beyond comparing it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RootKey(String);

impl RootKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The key as its sequence of Unicode scalar values.
    pub fn scalars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Number of scalar values in the key, not bytes.
    pub fn scalar_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for RootKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RootKey {
    type Err = RootKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Err(RootKeyError::Empty)
        } else {
            Ok(RootKey(s.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_root() {
        let key: RootKey = "كتب".parse().unwrap();
        assert_eq!(key.as_str(), "كتب");
        assert_eq!(key.to_string(), "كتب");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert_eq!("".parse::<RootKey>(), Err(RootKeyError::Empty));
        assert_eq!("   ".parse::<RootKey>(), Err(RootKeyError::Empty));
    }

    #[test]
    fn scalar_length_ignores_encoding_width() {
        let key: RootKey = "كتب".parse().unwrap();
        assert_eq!(key.as_str().len(), 6);
        assert_eq!(key.scalar_len(), 3);
        assert_eq!(key.scalars().collect::<Vec<_>>(), vec!['ك', 'ت', 'ب']);
    }

    #[test]
    fn orders_by_scalar_value() {
        let alef: RootKey = "أ".parse().unwrap();
        let baa: RootKey = "ب".parse().unwrap();
        let jeem: RootKey = "ج".parse().unwrap();
        assert!(alef < baa);
        assert!(baa < jeem);

        // A strict prefix sorts before its extension.
        let short: RootKey = "كت".parse().unwrap();
        let long: RootKey = "كتب".parse().unwrap();
        assert!(short < long);
    }
}
