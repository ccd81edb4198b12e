//! Orchestration: the full rule set for one runtime and for the whole
//! database.
//!
//! Check order is fixed: compatibility-map completeness (derived runtimes
//! only), series coverage, contiguity from coarse to fine, then chronology
//! from coarse to fine. Collect-all gathers every violation; fail-fast
//! stops after the first check group that failed, so a broken early
//! invariant does not bury the report in follow-on noise.

use crate::chronology::{chrono_order, first_release};
use crate::consistency::flat_agreement;
use crate::report::{Report, Violation};
use crate::rules::RuntimeRules;
use crate::structural::{contiguous_from_zero, series_coverage};
use crate::trie::VersionTrie;
use pyver_model::{RuntimeData, Version, VersionDatabase, VersionDate};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Gather every violation before reporting.
    CollectAll,

    /// Stop after the first failing check group.
    FailFast,
}

impl RunMode {
    fn bails(self, report: &Report) -> bool {
        self == Self::FailFast && !report.is_ok()
    }
}

fn check_compat_map(data: &RuntimeData, rules: &RuntimeRules, report: &mut Report) {
    let Some(map) = &data.cpython_versions else {
        report.push(Violation::MissingCompatMap {
            runtime: rules.name.clone(),
        });
        return;
    };

    for release in data.release_dates.keys() {
        match map.get(release) {
            None => report.push(Violation::UnmappedRelease {
                runtime: rules.name.clone(),
                release: release.clone(),
            }),
            Some(targets) if targets.is_empty() => report.push(Violation::EmptyMapping {
                runtime: rules.name.clone(),
                release: release.clone(),
            }),
            Some(_) => {}
        }
    }

    for release in map.keys() {
        if !data.release_dates.contains_key(release) {
            report.push(Violation::UnreleasedMapping {
                runtime: rules.name.clone(),
                release: release.clone(),
            });
        }
    }
}

fn check_contiguity(trie: &VersionTrie, rules: &RuntimeRules, mode: RunMode, report: &mut Report) {
    let mut majors: BTreeSet<u32> = trie.majors().into_iter().collect();
    majors.extend(rules.assumed_majors.iter().copied());
    report.record(contiguous_from_zero(
        majors,
        format!("{}: Major versions", rules.name),
    ));
    if mode.bails(report) {
        return;
    }

    for major in trie.majors() {
        if major < rules.minor_contiguity_floor {
            continue;
        }
        let mut minors: BTreeSet<u32> = trie.minors(major).into_iter().collect();
        if let Some(extra) = rules.extra_minors.get(&major) {
            minors.extend(extra.iter().copied());
        }
        report.record(contiguous_from_zero(
            minors,
            format!("{}: Minor versions of v{major}", rules.name),
        ));
    }
    if mode.bails(report) {
        return;
    }

    for major in trie.majors() {
        if major < rules.micro_contiguity_floor {
            continue;
        }
        for minor in trie.minors(major) {
            report.record(contiguous_from_zero(
                trie.micros(major, minor).iter().copied(),
                format!("{}: Micro versions of v{major}.{minor}", rules.name),
            ));
        }
    }
}

fn check_chronology(
    data: &RuntimeData,
    trie: &VersionTrie,
    rules: &RuntimeRules,
    mode: RunMode,
    report: &mut Report,
) {
    let releases = data.sorted_releases();

    let firsts: Vec<VersionDate> = trie
        .majors()
        .into_iter()
        .filter_map(|major| first_release(&releases, &[major]))
        .map(|(_, date)| date)
        .collect();
    report.record(chrono_order(
        firsts,
        format!("{}: Initial releases of major versions", rules.name),
    ));
    if mode.bails(report) {
        return;
    }

    for major in trie.majors() {
        let firsts: Vec<VersionDate> = trie
            .minors(major)
            .into_iter()
            .filter_map(|minor| first_release(&releases, &[major, minor]))
            .map(|(_, date)| date)
            .collect();
        report.record(chrono_order(
            firsts,
            format!("{}: Initial releases of minor versions of v{major}", rules.name),
        ));
    }
    if mode.bails(report) {
        return;
    }

    for major in trie.majors() {
        for minor in trie.minors(major) {
            let dates: Vec<VersionDate> = trie
                .micros(major, minor)
                .iter()
                .filter_map(|&micro| {
                    data.release_dates
                        .get(&Version::from_components([major, minor, micro]))
                        .copied()
                })
                .collect();
            report.record(chrono_order(
                dates,
                format!("{}: Micro releases of {major}.{minor}", rules.name),
            ));
        }
    }
}

/// Run the full rule set for one runtime's snapshot.
///
/// A check that does not apply (EOL'd series releasing further micros —
/// CPython 2.7 and 3.0 legitimately did) is deliberately not in the set.
pub fn validate_runtime(data: &RuntimeData, rules: &RuntimeRules, mode: RunMode) -> Report {
    let mut report = Report::new();
    let trie: VersionTrie = data.release_triples().collect();

    if rules.requires_compat_map {
        check_compat_map(data, rules, &mut report);
        if mode.bails(&report) {
            return report;
        }
    }

    report.absorb(series_coverage(data, &trie, &rules.name));
    if mode.bails(&report) {
        return report;
    }

    check_contiguity(&trie, rules, mode, &mut report);
    if mode.bails(&report) {
        return report;
    }

    check_chronology(data, &trie, rules, mode, &mut report);
    report
}

/// Validate the whole nested database, plus the legacy flat snapshot when
/// one is supplied: flat/nested agreement first, then each runtime under
/// its own rules.
pub fn validate_database(db: &VersionDatabase, flat: Option<&RuntimeData>, mode: RunMode) -> Report {
    let mut report = Report::new();

    if let Some(flat) = flat {
        report.absorb(flat_agreement(flat, &db.cpython));
        if mode.bails(&report) {
            return report;
        }
    }

    report.merge(validate_runtime(&db.cpython, &RuntimeRules::cpython(), mode));
    if mode.bails(&report) {
        return report;
    }

    report.merge(validate_runtime(&db.pypy, &RuntimeRules::pypy(), mode));
    report
}
