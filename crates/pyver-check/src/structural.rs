//! Structural validators: contiguity and series coverage.

use crate::report::Violation;
use crate::trie::VersionTrie;
use pyver_model::RuntimeData;
use std::collections::BTreeSet;

/// Check that `values`, as a set, equals `{0, 1, …, n-1}`.
///
/// Duplicates collapse before the check; the empty set trivially passes.
/// Failure reports the smallest missing integer.
pub fn contiguous_from_zero(
    values: impl IntoIterator<Item = u32>,
    label: impl Into<String>,
) -> Result<(), Violation> {
    let values: BTreeSet<u32> = values.into_iter().collect();
    let missing = (0..values.len() as u32).find(|n| !values.contains(n));
    match missing {
        Some(missing) => Err(Violation::NotContiguous {
            label: label.into(),
            missing,
        }),
        None => Ok(()),
    }
}

/// Check that series declarations and releases cover each other: every
/// series in `eol_dates` owns at least one release, and every release's
/// series prefix is declared.
pub fn series_coverage(data: &RuntimeData, trie: &VersionTrie, runtime: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    for series in data.eol_dates.keys() {
        let Some((major, minor)) = series.series_parts() else {
            continue;
        };
        if trie.micros(major, minor).is_empty() {
            violations.push(Violation::SeriesWithoutReleases {
                runtime: runtime.to_string(),
                series: series.clone(),
            });
        }
    }

    for release in data.release_dates.keys() {
        let series = release.series();
        if !data.eol_dates.contains_key(&series) {
            violations.push(Violation::ReleaseWithoutSeries {
                runtime: runtime.to_string(),
                release: release.clone(),
                series,
            });
        }
    }

    violations
}
