//! Decode-only adapters for the persisted JSON shapes.
//!
//! Two formats describe the same CPython facts: the legacy flat v0 layout
//! (`version_release_dates` / `series_eol_dates`, unknowns as `null`) and
//! the nested v1 layout (per-runtime `release_dates` / `eol_dates`,
//! unknowns as `true` for an undated release and `false` for an open
//! end-of-life). Both decode into the same normalized model; whether the
//! two agree is the consistency validator's business, not the adapters'.
//!
//! Decoding re-checks what JSON Schema cannot be trusted to have seen: key
//! arity (releases are `X.Y.Z`, series are `X.Y`) and the per-field
//! sentinel table.

use crate::date::VersionDate;
use crate::db::{RuntimeData, VersionDatabase};
use crate::version::Version;
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Wire form of calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Any value shape a date field can carry in either format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawDate {
    Date(String),
    Sentinel(bool),
    Null,
}

impl RawDate {
    fn describe(&self) -> String {
        match self {
            Self::Date(s) => format!("{s:?}"),
            Self::Sentinel(b) => b.to_string(),
            Self::Null => "null".to_string(),
        }
    }
}

/// Decode failure; carries the field and key so the caller can point at
/// the offending entry verbatim.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("{field}[{key}]: invalid date {value:?}: {source}")]
    BadDate {
        field: &'static str,
        key: Version,
        value: String,
        source: chrono::ParseError,
    },

    #[error("{field}[{key}]: unexpected value {value}")]
    BadSentinel {
        field: &'static str,
        key: Version,
        value: String,
    },

    #[error("{field} key {key} is not a {expected} version")]
    KeyArity {
        field: &'static str,
        key: Version,
        expected: &'static str,
    },
}

/// Which sentinel a field accepts for "unknown".
#[derive(Debug, Clone, Copy)]
enum UnknownForm {
    True,
    False,
    Null,
}

#[derive(Debug, Clone, Copy)]
enum KeyKind {
    Series,
    Release,
}

impl KeyKind {
    fn matches(self, key: &Version) -> bool {
        match self {
            Self::Series => key.is_series(),
            Self::Release => key.is_release(),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Series => "series",
            Self::Release => "release",
        }
    }
}

fn decode_dates(
    field: &'static str,
    raw: BTreeMap<Version, RawDate>,
    keys: KeyKind,
    unknown_form: UnknownForm,
    unknown: VersionDate,
) -> Result<BTreeMap<Version, VersionDate>, WireError> {
    let mut decoded = BTreeMap::new();
    for (key, value) in raw {
        if !keys.matches(&key) {
            return Err(WireError::KeyArity {
                field,
                key,
                expected: keys.name(),
            });
        }
        let date = match (&value, unknown_form) {
            (RawDate::Date(s), _) => match NaiveDate::parse_from_str(s, DATE_FORMAT) {
                Ok(date) => VersionDate::Known(date),
                Err(source) => {
                    return Err(WireError::BadDate {
                        field,
                        key,
                        value: s.clone(),
                        source,
                    });
                }
            },
            (RawDate::Sentinel(true), UnknownForm::True) => unknown,
            (RawDate::Sentinel(false), UnknownForm::False) => unknown,
            (RawDate::Null, UnknownForm::Null) => unknown,
            _ => {
                return Err(WireError::BadSentinel {
                    field,
                    key,
                    value: value.describe(),
                });
            }
        };
        decoded.insert(key, date);
    }
    Ok(decoded)
}

fn check_compat_map(
    map: &BTreeMap<Version, Vec<Version>>,
) -> Result<(), WireError> {
    for (key, targets) in map {
        if !key.is_release() {
            return Err(WireError::KeyArity {
                field: "cpython_versions",
                key: key.clone(),
                expected: "release",
            });
        }
        if let Some(bad) = targets.iter().find(|v| !v.is_release()) {
            return Err(WireError::KeyArity {
                field: "cpython_versions",
                key: bad.clone(),
                expected: "release",
            });
        }
    }
    Ok(())
}

/// One runtime's section of the nested v1 document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedRuntimeDoc {
    pub release_dates: BTreeMap<Version, RawDate>,
    pub eol_dates: BTreeMap<Version, RawDate>,
    #[serde(default)]
    pub cpython_versions: Option<BTreeMap<Version, Vec<Version>>>,
}

impl NestedRuntimeDoc {
    pub fn decode(self) -> Result<RuntimeData, WireError> {
        if let Some(map) = &self.cpython_versions {
            check_compat_map(map)?;
        }
        Ok(RuntimeData {
            release_dates: decode_dates(
                "release_dates",
                self.release_dates,
                KeyKind::Release,
                UnknownForm::True,
                VersionDate::Unreleased,
            )?,
            eol_dates: decode_dates(
                "eol_dates",
                self.eol_dates,
                KeyKind::Series,
                UnknownForm::False,
                VersionDate::EolUndetermined,
            )?,
            cpython_versions: self.cpython_versions,
        })
    }
}

/// The nested v1 document: both runtimes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedDoc {
    pub cpython: NestedRuntimeDoc,
    pub pypy: NestedRuntimeDoc,
}

impl NestedDoc {
    pub fn decode(self) -> Result<VersionDatabase, WireError> {
        Ok(VersionDatabase {
            cpython: self.cpython.decode()?,
            pypy: self.pypy.decode()?,
        })
    }
}

/// The legacy flat v0 document. CPython data only.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlatDoc {
    pub version_release_dates: BTreeMap<Version, RawDate>,
    pub series_eol_dates: BTreeMap<Version, RawDate>,
}

impl FlatDoc {
    pub fn decode(self) -> Result<RuntimeData, WireError> {
        Ok(RuntimeData {
            release_dates: decode_dates(
                "version_release_dates",
                self.version_release_dates,
                KeyKind::Release,
                UnknownForm::Null,
                VersionDate::Unreleased,
            )?,
            eol_dates: decode_dates(
                "series_eol_dates",
                self.series_eol_dates,
                KeyKind::Series,
                UnknownForm::Null,
                VersionDate::EolUndetermined,
            )?,
            cpython_versions: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn known(y: i32, m: u32, d: u32) -> VersionDate {
        VersionDate::Known(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn nested_decode_maps_sentinels_per_field() {
        let doc: NestedDoc = serde_json::from_value(json!({
            "cpython": {
                "release_dates": {"3.9.0": "2020-10-05", "3.10.0": true},
                "eol_dates": {"3.9": "2025-10-31", "3.10": false}
            },
            "pypy": {
                "release_dates": {"7.3.1": "2020-04-10"},
                "eol_dates": {"7.3": false},
                "cpython_versions": {"7.3.1": ["3.6.9"]}
            }
        }))
        .unwrap();
        let db = doc.decode().unwrap();
        assert_eq!(db.cpython.release_dates[&v("3.9.0")], known(2020, 10, 5));
        assert_eq!(
            db.cpython.release_dates[&v("3.10.0")],
            VersionDate::Unreleased
        );
        assert_eq!(
            db.cpython.eol_dates[&v("3.10")],
            VersionDate::EolUndetermined
        );
        assert_eq!(
            db.pypy.cpython_versions.as_ref().unwrap()[&v("7.3.1")],
            vec![v("3.6.9")]
        );
    }

    #[test]
    fn nested_rejects_wrong_sentinel() {
        // `false` means "no fixed EOL"; it is not a release sentinel.
        let doc: NestedRuntimeDoc = serde_json::from_value(json!({
            "release_dates": {"3.9.0": false},
            "eol_dates": {}
        }))
        .unwrap();
        let err = doc.decode().unwrap_err();
        assert!(matches!(err, WireError::BadSentinel { field: "release_dates", .. }));
    }

    #[test]
    fn nested_rejects_null_dates() {
        let doc: NestedRuntimeDoc = serde_json::from_value(json!({
            "release_dates": {"3.9.0": null},
            "eol_dates": {}
        }))
        .unwrap();
        assert!(matches!(
            doc.decode().unwrap_err(),
            WireError::BadSentinel { .. }
        ));
    }

    #[test]
    fn key_arity_is_rechecked() {
        let doc: NestedRuntimeDoc = serde_json::from_value(json!({
            "release_dates": {"3.9": "2020-10-05"},
            "eol_dates": {}
        }))
        .unwrap();
        let err = doc.decode().unwrap_err();
        assert_eq!(
            err.to_string(),
            "release_dates key 3.9 is not a release version"
        );

        let doc: NestedRuntimeDoc = serde_json::from_value(json!({
            "release_dates": {},
            "eol_dates": {"3.9.0": "2025-10-31"}
        }))
        .unwrap();
        assert!(matches!(
            doc.decode().unwrap_err(),
            WireError::KeyArity { field: "eol_dates", .. }
        ));
    }

    #[test]
    fn bad_date_string_carries_parse_error() {
        let doc: NestedRuntimeDoc = serde_json::from_value(json!({
            "release_dates": {"3.9.0": "2020-13-05"},
            "eol_dates": {}
        }))
        .unwrap();
        let err = doc.decode().unwrap_err();
        assert!(matches!(err, WireError::BadDate { .. }));
        assert!(err.to_string().contains("3.9.0"));
    }

    #[test]
    fn flat_decode_maps_null_per_field() {
        let doc: FlatDoc = serde_json::from_value(json!({
            "version_release_dates": {"3.9.0": "2020-10-05", "3.10.0": null},
            "series_eol_dates": {"3.9": null}
        }))
        .unwrap();
        let data = doc.decode().unwrap();
        assert_eq!(
            data.release_dates[&v("3.10.0")],
            VersionDate::Unreleased
        );
        assert_eq!(data.eol_dates[&v("3.9")], VersionDate::EolUndetermined);
        assert!(data.cpython_versions.is_none());
    }

    #[test]
    fn flat_rejects_boolean_sentinels() {
        let doc: FlatDoc = serde_json::from_value(json!({
            "version_release_dates": {"3.10.0": true},
            "series_eol_dates": {}
        }))
        .unwrap();
        assert!(matches!(
            doc.decode().unwrap_err(),
            WireError::BadSentinel { .. }
        ));
    }
}
