//! Release and end-of-life dates.
//!
//! The persisted formats encode "unknown" with per-field sentinels (`true`,
//! `false`, `null`). The model keeps the distinction explicit so a
//! not-yet-dated release can never be conflated with a series that has no
//! fixed end-of-life.

use chrono::NaiveDate;
use std::fmt;

/// A date attached to a release or a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionDate {
    /// A fixed calendar date.
    Known(NaiveDate),

    /// Release announced but not yet dated.
    Unreleased,

    /// Series with no fixed end-of-life.
    EolUndetermined,
}

impl VersionDate {
    /// The calendar date, if fixed. Unknown values take part in no
    /// ordering comparison; callers skip them.
    pub fn known(&self) -> Option<NaiveDate> {
        match self {
            Self::Known(date) => Some(*date),
            Self::Unreleased | Self::EolUndetermined => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl fmt::Display for VersionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            Self::Unreleased => write!(f, "unreleased"),
            Self::EolUndetermined => write!(f, "undetermined"),
        }
    }
}
