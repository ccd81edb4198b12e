//! Cross-database consistency: the legacy flat snapshot against the
//! nested CPython data.
//!
//! The flat v0 format is kept for backward compatibility only; the nested
//! v1 document is authoritative. Both wire adapters decode into the same
//! normalized model, so "the formats agree" is plain equality of the two
//! decoded snapshots — any divergence names the field, the key, and both
//! sides.

use crate::report::Violation;
use pyver_model::{RuntimeData, Version, VersionDate};
use std::collections::BTreeMap;

fn diff_dates(
    field: &'static str,
    flat: &BTreeMap<Version, VersionDate>,
    nested: &BTreeMap<Version, VersionDate>,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let keys: std::collections::BTreeSet<&Version> = flat.keys().chain(nested.keys()).collect();
    for key in keys {
        let (left, right) = (flat.get(key), nested.get(key));
        if left != right {
            violations.push(Violation::Divergence {
                field,
                key: key.clone(),
                flat: render(left),
                nested: render(right),
            });
        }
    }
    violations
}

fn render(date: Option<&VersionDate>) -> String {
    match date {
        Some(date) => date.to_string(),
        None => "no entry".to_string(),
    }
}

/// Check that the flat snapshot projects onto exactly the nested CPython
/// data: same keys, same dates, same unknown markers.
pub fn flat_agreement(flat: &RuntimeData, nested: &RuntimeData) -> Vec<Violation> {
    let mut violations = diff_dates("release_dates", &flat.release_dates, &nested.release_dates);
    violations.extend(diff_dates("eol_dates", &flat.eol_dates, &nested.eol_dates));
    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn known(y: i32, m: u32, d: u32) -> VersionDate {
        VersionDate::Known(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn sample() -> RuntimeData {
        let mut data = RuntimeData::default();
        data.release_dates.insert(v("3.9.0"), known(2020, 10, 5));
        data.release_dates.insert(v("3.10.0"), VersionDate::Unreleased);
        data.eol_dates.insert(v("3.9"), VersionDate::EolUndetermined);
        data
    }

    #[test]
    fn identical_snapshots_agree() {
        assert!(flat_agreement(&sample(), &sample()).is_empty());
    }

    #[test]
    fn changed_value_names_field_and_key() {
        let flat = sample();
        let mut nested = sample();
        nested.release_dates.insert(v("3.9.0"), known(2020, 10, 6));
        let violations = flat_agreement(&flat, &nested);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "flat database diverges at release_dates[3.9.0]: flat has 2020-10-05, nested has 2020-10-06"
        );
    }

    #[test]
    fn missing_key_is_reported_from_either_side() {
        let mut flat = sample();
        flat.release_dates.remove(&v("3.10.0"));
        let violations = flat_agreement(&flat, &sample());
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "flat database diverges at release_dates[3.10.0]: flat has no entry, nested has unreleased"
        );
    }

    #[test]
    fn remapped_sentinel_is_a_divergence() {
        let flat = sample();
        let mut nested = sample();
        // An undetermined EOL on one side and a fixed date on the other.
        nested.eol_dates.insert(v("3.9"), known(2025, 10, 31));
        let violations = flat_agreement(&flat, &nested);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].to_string(),
            "flat database diverges at eol_dates[3.9]: flat has undetermined, nested has 2025-10-31"
        );
    }
}
