//! Normalized in-memory snapshots of the version databases.
//!
//! `BTreeMap` keying gives canonical version-sorted iteration regardless of
//! the order the wire documents listed their keys, so consumers never have
//! to sort. Snapshots are immutable once decoded: the engine builds its own
//! derived structures (trie, date sequences) per validation pass.

use crate::date::VersionDate;
use crate::version::Version;
use std::collections::BTreeMap;

/// One runtime's release metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuntimeData {
    /// Release (`X.Y.Z`) → release date.
    pub release_dates: BTreeMap<Version, VersionDate>,

    /// Series (`X.Y`) → end-of-life date.
    pub eol_dates: BTreeMap<Version, VersionDate>,

    /// Derived runtimes only: release → ordered compatible CPython
    /// releases. The list being non-empty is a validator concern.
    pub cpython_versions: Option<BTreeMap<Version, Vec<Version>>>,
}

impl RuntimeData {
    /// `(major, minor, micro)` triples of every release, in version order.
    ///
    /// Keys that are not three-component (possible only for snapshots
    /// constructed in code, never from the wire adapters) are skipped.
    pub fn release_triples(&self) -> impl Iterator<Item = (u32, u32, u32)> + '_ {
        self.release_dates.keys().filter_map(Version::release_parts)
    }

    /// Version-sorted `(version, date)` pairs of every release.
    pub fn sorted_releases(&self) -> Vec<(&Version, VersionDate)> {
        self.release_dates.iter().map(|(v, d)| (v, *d)).collect()
    }
}

/// The nested (v1) database: both runtimes in one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionDatabase {
    pub cpython: RuntimeData,
    pub pypy: RuntimeData,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> VersionDate {
        VersionDate::Known(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn releases_iterate_in_version_order() {
        let mut data = RuntimeData::default();
        for key in ["3.10.0", "3.2.0", "3.9.1"] {
            data.release_dates
                .insert(Version::parse(key).unwrap(), date(2021, 1, 1));
        }
        let order: Vec<String> = data
            .sorted_releases()
            .iter()
            .map(|(v, _)| v.to_string())
            .collect();
        assert_eq!(order, ["3.2.0", "3.9.1", "3.10.0"]);
        assert_eq!(
            data.release_triples().collect::<Vec<_>>(),
            [(3, 2, 0), (3, 9, 1), (3, 10, 0)]
        );
    }
}
