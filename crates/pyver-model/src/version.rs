//! Dotted numeric versions as ordered integer tuples.
//!
//! A two-component version is a *series* (a release line, e.g. `3.9`); a
//! three-component version is a *release* (one concrete distribution,
//! e.g. `3.9.1`). Ordering is lexicographic on the components, and a
//! shorter tuple sorts before every extension of itself — `3.9` is the
//! lower bound of all `3.9.z` releases, which is what the chronology
//! boundary search relies on.

use regex::Regex;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Canonical dotted syntax: two or more components, no leading zeros.
fn canonical_version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(0|[1-9][0-9]*)(\.(0|[1-9][0-9]*))+$")
            .expect("canonical version regex must compile")
    })
}

/// Malformed version string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Not of the form `X.Y[.Z…]`, or a component has a leading zero.
    #[error("invalid version string {input:?}")]
    Syntax { input: String },

    /// A component does not fit in 32 bits.
    #[error("version component out of range in {input:?}")]
    Overflow { input: String },
}

/// A dotted numeric version: a non-empty tuple of non-negative integers.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(Vec<u32>);

impl Version {
    /// Build a version directly from components.
    ///
    /// Single-component versions cannot be parsed from input but are valid
    /// here; the trie and the boundary search use them as range probes.
    pub fn from_components(components: impl Into<Vec<u32>>) -> Self {
        let components = components.into();
        debug_assert!(!components.is_empty(), "version needs at least one component");
        Self(components)
    }

    /// Parse a canonical version string.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        if !canonical_version_re().is_match(s) {
            return Err(FormatError::Syntax {
                input: s.to_string(),
            });
        }
        let components = s
            .split('.')
            .map(|part| {
                part.parse::<u32>().map_err(|_| FormatError::Overflow {
                    input: s.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self(components))
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn major(&self) -> u32 {
        self.0[0]
    }

    /// The two-component series prefix of this version.
    pub fn series(&self) -> Version {
        Version(self.0.iter().copied().take(2).collect())
    }

    /// True for a two-component version (a series).
    pub fn is_series(&self) -> bool {
        self.0.len() == 2
    }

    /// True for a three-component version (a release).
    pub fn is_release(&self) -> bool {
        self.0.len() == 3
    }

    /// `(major, minor)` for a series key.
    pub fn series_parts(&self) -> Option<(u32, u32)> {
        match *self.0.as_slice() {
            [major, minor] => Some((major, minor)),
            _ => None,
        }
    }

    /// `(major, minor, micro)` for a release key.
    pub fn release_parts(&self) -> Option<(u32, u32, u32)> {
        match *self.0.as_slice() {
            [major, minor, micro] => Some((major, minor, micro)),
            _ => None,
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for component in &self.0 {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{component}")?;
            first = false;
        }
        Ok(())
    }
}

impl FromStr for Version {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Version::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        for s in ["0.9", "2.7", "3.9.1", "10.0.0", "1.0.0.0"] {
            let v = Version::parse(s).unwrap();
            assert_eq!(v.to_string(), s);
        }
    }

    #[test]
    fn parse_rejects_non_canonical() {
        for s in ["", "3", "3.", ".3", "1.01", "03.1", "a.b", "3.9.x", "3..9"] {
            assert!(
                matches!(Version::parse(s), Err(FormatError::Syntax { .. })),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        assert!(matches!(
            Version::parse("3.99999999999"),
            Err(FormatError::Overflow { .. })
        ));
    }

    #[test]
    fn ordering_is_lexicographic() {
        let parse = |s| Version::parse(s).unwrap();
        assert!(parse("2.7") < parse("3.0"));
        assert!(parse("3.9") < parse("3.10"));
        assert!(parse("3.9.1") < parse("3.9.2"));
        assert!(parse("3.9.9") < parse("3.10.0"));
    }

    #[test]
    fn prefix_sorts_before_extensions() {
        let series = Version::from_components([3, 9]);
        let first = Version::parse("3.9.0").unwrap();
        let prior = Version::parse("3.8.10").unwrap();
        assert!(prior < series);
        assert!(series < first);
    }

    #[test]
    fn series_prefix() {
        let v = Version::parse("3.9.1").unwrap();
        assert_eq!(v.series(), Version::parse("3.9").unwrap());
        assert_eq!(v.release_parts(), Some((3, 9, 1)));
        assert!(v.is_release());
        assert!(!v.is_series());
    }

    #[test]
    fn serde_uses_string_form() {
        let v: Version = serde_json::from_str(r#""3.9.1""#).unwrap();
        assert_eq!(v, Version::parse("3.9.1").unwrap());
        assert_eq!(serde_json::to_string(&v).unwrap(), r#""3.9.1""#);
        assert!(serde_json::from_str::<Version>(r#""3.09""#).is_err());
    }
}
