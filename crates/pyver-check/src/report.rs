//! Violations and the report that collects them.
//!
//! Every violation renders the human-readable label of the failed check
//! plus the offending identifiers, verbatim; callers surface the message
//! as-is. The serialized form additionally tags the violation kind so the
//! `--json` output stays machine-readable.

use chrono::NaiveDate;
use pyver_model::Version;
use serde::Serialize;

/// A single failed invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// A set of version numbers is not `{0..n-1}`.
    #[error("{label} not contiguous; missing {missing}")]
    NotContiguous { label: String, missing: u32 },

    /// A series is declared in `eol_dates` but owns no releases.
    #[error("{runtime}: Series {series} present but does not have any versions")]
    SeriesWithoutReleases { runtime: String, series: Version },

    /// A release exists whose series is not declared in `eol_dates`.
    #[error("{runtime}: Version {release} present but series {series} missing")]
    ReleaseWithoutSeries {
        runtime: String,
        release: Version,
        series: Version,
    },

    /// Two known dates appear out of order. `prev` was listed before
    /// `next` even though it is the later date.
    #[error("{label} not in chronological order; {prev} listed before {next}")]
    ChronologyInversion {
        label: String,
        prev: NaiveDate,
        next: NaiveDate,
    },

    /// A derived-runtime release has no compatibility mapping.
    #[error("{runtime}: {release} present in 'release_dates' but not in 'cpython_versions'")]
    UnmappedRelease { runtime: String, release: Version },

    /// A compatibility mapping names a release that was never released.
    #[error("{runtime}: {release} present in 'cpython_versions' but not in 'release_dates'")]
    UnreleasedMapping { runtime: String, release: Version },

    /// A compatibility list is empty.
    #[error("{runtime}: list of CPython versions for {release} is empty")]
    EmptyMapping { runtime: String, release: Version },

    /// A derived runtime is missing its compatibility map entirely.
    #[error("{runtime}: no 'cpython_versions' map in the database")]
    MissingCompatMap { runtime: String },

    /// The legacy flat database drifted from the nested CPython data.
    #[error("flat database diverges at {field}[{key}]: flat has {flat}, nested has {nested}")]
    Divergence {
        field: &'static str,
        key: Version,
        flat: String,
        nested: String,
    },
}

/// Ordered collection of violations from one validation run.
///
/// Collect-all is the native mode; a passing run is an empty report.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Report {
    violations: Vec<Violation>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    pub fn record(&mut self, outcome: Result<(), Violation>) {
        if let Err(violation) = outcome {
            self.violations.push(violation);
        }
    }

    pub fn absorb(&mut self, violations: Vec<Violation>) {
        self.violations.extend(violations);
    }

    pub fn merge(&mut self, other: Report) {
        self.violations.extend(other.violations);
    }

    pub fn is_ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyver_model::Version;

    #[test]
    fn messages_carry_offending_identifiers() {
        let v = Violation::NotContiguous {
            label: "CPython: Major versions".to_string(),
            missing: 2,
        };
        assert_eq!(
            v.to_string(),
            "CPython: Major versions not contiguous; missing 2"
        );

        let v = Violation::SeriesWithoutReleases {
            runtime: "CPython".to_string(),
            series: Version::parse("3.9").unwrap(),
        };
        assert_eq!(
            v.to_string(),
            "CPython: Series 3.9 present but does not have any versions"
        );
    }

    #[test]
    fn serialized_violation_is_tagged() {
        let v = Violation::NotContiguous {
            label: "test".to_string(),
            missing: 0,
        };
        let value = serde_json::to_value(&v).unwrap();
        assert_eq!(value["kind"], "not_contiguous");
        assert_eq!(value["missing"], 0);
    }
}
