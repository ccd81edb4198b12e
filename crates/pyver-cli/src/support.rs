use serde_json::Value;
use std::fs;

/// At least one invariant failed.
pub const EXIT_VIOLATIONS: i32 = 1;

/// A document could not be read, parsed, schema-validated, or decoded.
pub const EXIT_LOAD: i32 = 2;

/// Embedded draft-07 schema for the legacy flat v0 format.
pub const SCHEMA_V0: &str = include_str!("../schemas/pyversion-info-data.schema.json");

/// Embedded draft-07 schema for the nested v1 format.
pub const SCHEMA_V1: &str = include_str!("../schemas/pyversion-info-data.v1.schema.json");

pub fn read_json_or_exit(path: &str, label: &str) -> Value {
    let bytes = fs::read(path).unwrap_or_else(|e| {
        eprintln!("error: failed to read {label} at {path}: {e}");
        std::process::exit(EXIT_LOAD);
    });
    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {label} JSON at {path}: {e}");
        std::process::exit(EXIT_LOAD);
    })
}

fn parse_schema_or_exit(text: &str, label: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|e| {
        eprintln!("error: failed to parse {label}: {e}");
        std::process::exit(EXIT_LOAD);
    })
}

/// Resolve the schema document: an override path, or the embedded copy.
pub fn schema_or_exit(override_path: Option<&str>, embedded: &str, label: &str) -> Value {
    match override_path {
        Some(path) => read_json_or_exit(path, label),
        None => parse_schema_or_exit(embedded, label),
    }
}

/// Validate `instance` against a draft-07 `schema`; any schema error is
/// printed with its instance path and terminates the run.
pub fn check_schema_or_exit(schema: &Value, instance: &Value, label: &str) {
    let validator = jsonschema::options()
        .should_validate_formats(true)
        .build(schema)
        .unwrap_or_else(|e| {
            eprintln!("error: invalid {label} schema: {e}");
            std::process::exit(EXIT_LOAD);
        });

    let errors: Vec<String> = validator
        .iter_errors(instance)
        .map(|e| format!("{}: {}", e.instance_path, e))
        .collect();
    if !errors.is_empty() {
        for error in &errors {
            eprintln!("error: {label} does not match its schema: {error}");
        }
        std::process::exit(EXIT_LOAD);
    }
}
