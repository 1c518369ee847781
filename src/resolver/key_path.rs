//! Dotted path addressing
//!
//! A dotted path names a location in a hierarchical tree via `.`-separated
//! segment names. A path list is an ordered sequence of dotted paths whose
//! resolved values are concatenated into one string.

use std::collections::BTreeMap;

/// A single dotted path or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPath {
    Single(String),
    Joined(Vec<String>),
}

/// Static mapping from an entry code (status code, option key) to the path
/// resolving its display string. Keyed by the string form of the code so
/// iteration order is deterministic across passes.
pub type ResolutionTable = BTreeMap<String, KeyPath>;

impl KeyPath {
    pub fn single(path: impl Into<String>) -> Self {
        KeyPath::Single(path.into())
    }

    pub fn joined<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        KeyPath::Joined(paths.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for KeyPath {
    fn from(path: &str) -> Self {
        KeyPath::Single(path.to_string())
    }
}

impl From<String> for KeyPath {
    fn from(path: String) -> Self {
        KeyPath::Single(path)
    }
}

impl<const N: usize> From<[&str; N]> for KeyPath {
    fn from(paths: [&str; N]) -> Self {
        KeyPath::joined(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        assert_eq!(KeyPath::from("a.b"), KeyPath::Single("a.b".into()));
        assert_eq!(
            KeyPath::from(["a.b", "c.d"]),
            KeyPath::Joined(vec!["a.b".into(), "c.d".into()])
        );
    }
}
