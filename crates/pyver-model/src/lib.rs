//! # Pyver Model
//!
//! The normalized in-memory model of the pyversion-info databases, plus
//! decode-only adapters for the two persisted JSON shapes (the legacy flat
//! v0 format and the nested multi-runtime v1 format).
//!
//! The model is what the validation engine consumes: dotted versions as
//! ordered integer tuples, dates as explicit `Known` / `Unreleased` /
//! `EolUndetermined` values (never raw wire sentinels), and per-runtime
//! snapshots keyed by version. Nothing here writes data back.

pub mod date;
pub mod db;
pub mod version;
pub mod wire;

pub use date::VersionDate;
pub use db::{RuntimeData, VersionDatabase};
pub use version::{FormatError, Version};
pub use wire::{FlatDoc, NestedDoc, NestedRuntimeDoc, RawDate, WireError};
