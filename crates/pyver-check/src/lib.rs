//! # Pyver Check
//!
//! The validation engine for the pyversion-info databases: the set of
//! structural and temporal consistency checks a version database must pass
//! before it is considered correct.
//!
//! ## Architecture
//!
//! ```text
//! VersionTrie            ← major → minor → micros index, built per pass
//!     │
//! structural             ← contiguous-from-zero, series coverage
//! chronology             ← non-decreasing known dates, first-release search
//! consistency            ← flat v0 snapshot must equal nested CPython data
//!     │
//! RuntimeRules           ← per-dataset carve-outs (assumed majors, …)
//!     │
//! validate_runtime       ← the fixed-order rule set for one runtime
//! validate_database      ← consistency + both runtimes, one report
//! ```
//!
//! Checks never mutate the snapshot they read; every pass derives its own
//! trie and date sequences, so concurrent runs over different snapshots
//! share nothing.

pub mod chronology;
pub mod consistency;
pub mod engine;
pub mod report;
pub mod rules;
pub mod structural;
pub mod trie;

pub use chronology::{chrono_order, first_release};
pub use consistency::flat_agreement;
pub use engine::{RunMode, validate_database, validate_runtime};
pub use report::{Report, Violation};
pub use rules::RuntimeRules;
pub use structural::{contiguous_from_zero, series_coverage};
pub use trie::VersionTrie;
