//! Per-dataset validation rules.
//!
//! The contiguity validators are fully generic; every historical carve-out
//! a dataset needs is data in this struct, supplied by the caller. The
//! presets below encode the known history of the two shipped databases.

use std::collections::{BTreeMap, BTreeSet};

/// Configuration for one runtime's rule set.
#[derive(Debug, Clone)]
pub struct RuntimeRules {
    /// Label prefix in every violation message.
    pub name: String,

    /// Majors treated as present before the major-contiguity check, for
    /// numbering gaps the database legitimately does not cover.
    pub assumed_majors: BTreeSet<u32>,

    /// Minor values injected per major before the minor-contiguity check,
    /// for release lines that never shipped a final.
    pub extra_minors: BTreeMap<u32, Vec<u32>>,

    /// Smallest major whose minor set is contiguity-checked.
    pub minor_contiguity_floor: u32,

    /// Smallest major whose micro sets are contiguity-checked.
    pub micro_contiguity_floor: u32,

    /// Derived runtimes must map every release to compatible CPython
    /// releases.
    pub requires_compat_map: bool,
}

impl RuntimeRules {
    /// CPython: major 0 predates the modern numbering scheme, so its
    /// minor and micro sets are exempt from contiguity.
    pub fn cpython() -> Self {
        Self {
            name: "CPython".to_string(),
            assumed_majors: BTreeSet::new(),
            extra_minors: BTreeMap::new(),
            minor_contiguity_floor: 1,
            micro_contiguity_floor: 1,
            requires_compat_map: false,
        }
    }

    /// PyPy: majors 0 and 3 never existed as releases, and v5.2/v5.5 were
    /// alpha-only and are absent from the database.
    pub fn pypy() -> Self {
        Self {
            name: "PyPy".to_string(),
            assumed_majors: BTreeSet::from([0, 3]),
            extra_minors: BTreeMap::from([(5, vec![2, 5])]),
            minor_contiguity_floor: 2,
            micro_contiguity_floor: 0,
            requires_compat_map: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_encode_the_shipped_carve_outs() {
        let cpython = RuntimeRules::cpython();
        assert!(cpython.assumed_majors.is_empty());
        assert_eq!(cpython.minor_contiguity_floor, 1);
        assert!(!cpython.requires_compat_map);

        let pypy = RuntimeRules::pypy();
        assert_eq!(pypy.assumed_majors, BTreeSet::from([0, 3]));
        assert_eq!(pypy.extra_minors.get(&5), Some(&vec![2, 5]));
        assert_eq!(pypy.micro_contiguity_floor, 0);
        assert!(pypy.requires_compat_map);
    }
}
