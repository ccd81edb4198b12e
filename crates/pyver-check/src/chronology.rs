//! Chronological validators over possibly-unknown date sequences.

use crate::report::Violation;
use chrono::NaiveDate;
use pyver_model::{Version, VersionDate};

/// Check that known dates in the sequence never decrease.
///
/// Unknown entries are skipped for comparison and do not reset the
/// last-known pointer: an undated release between two dated ones must not
/// hide an inversion around it.
pub fn chrono_order(
    dates: impl IntoIterator<Item = VersionDate>,
    label: impl Into<String>,
) -> Result<(), Violation> {
    let mut last: Option<NaiveDate> = None;
    for date in dates {
        if let Some(current) = date.known() {
            if let Some(prev) = last {
                if prev > current {
                    return Err(Violation::ChronologyInversion {
                        label: label.into(),
                        prev,
                        next: current,
                    });
                }
            }
            last = Some(current);
        }
    }
    Ok(())
}

/// Boundary search: the first entry of the version-sorted release list
/// whose components start with `prefix`.
///
/// A shorter version tuple sorts before every extension of itself, so the
/// partition point at `prefix` lands exactly on the first matching release.
pub fn first_release<'a>(
    releases: &[(&'a Version, VersionDate)],
    prefix: &[u32],
) -> Option<(&'a Version, VersionDate)> {
    let idx = releases.partition_point(|(version, _)| version.components() < prefix);
    releases
        .get(idx)
        .copied()
        .filter(|(version, _)| version.components().starts_with(prefix))
}
