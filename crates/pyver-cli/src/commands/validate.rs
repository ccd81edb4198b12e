use crate::support::{
    EXIT_LOAD, EXIT_VIOLATIONS, SCHEMA_V0, SCHEMA_V1, check_schema_or_exit, read_json_or_exit,
    schema_or_exit,
};
use pyver_check::{RunMode, validate_database};
use pyver_model::{FlatDoc, NestedDoc, RuntimeData, VersionDatabase};
use serde_json::json;

pub struct Args {
    pub data: String,
    pub flat: String,
    pub data_schema: Option<String>,
    pub flat_schema: Option<String>,
    pub skip_schema: bool,
    pub fail_fast: bool,
    pub json: bool,
}

fn decode_nested(value: serde_json::Value, path: &str) -> VersionDatabase {
    let doc: NestedDoc = serde_json::from_value(value).unwrap_or_else(|e| {
        eprintln!("error: v1 database at {path} has an unexpected shape: {e}");
        std::process::exit(EXIT_LOAD);
    });
    doc.decode().unwrap_or_else(|e| {
        eprintln!("error: v1 database at {path}: {e}");
        std::process::exit(EXIT_LOAD);
    })
}

fn decode_flat(value: serde_json::Value, path: &str) -> RuntimeData {
    let doc: FlatDoc = serde_json::from_value(value).unwrap_or_else(|e| {
        eprintln!("error: v0 database at {path} has an unexpected shape: {e}");
        std::process::exit(EXIT_LOAD);
    });
    doc.decode().unwrap_or_else(|e| {
        eprintln!("error: v0 database at {path}: {e}");
        std::process::exit(EXIT_LOAD);
    })
}

pub fn run(args: Args) {
    let data_value = read_json_or_exit(&args.data, "v1 database");
    let flat_value = read_json_or_exit(&args.flat, "v0 database");

    if !args.skip_schema {
        let v1_schema = schema_or_exit(args.data_schema.as_deref(), SCHEMA_V1, "v1 schema");
        check_schema_or_exit(&v1_schema, &data_value, "v1 database");
        let v0_schema = schema_or_exit(args.flat_schema.as_deref(), SCHEMA_V0, "v0 schema");
        check_schema_or_exit(&v0_schema, &flat_value, "v0 database");
    }

    let db = decode_nested(data_value, &args.data);
    let flat = decode_flat(flat_value, &args.flat);

    let mode = if args.fail_fast {
        RunMode::FailFast
    } else {
        RunMode::CollectAll
    };
    let report = validate_database(&db, Some(&flat), mode);

    if args.json {
        let payload = json!({
            "data": args.data,
            "flat": args.flat,
            "cpython_releases": db.cpython.release_dates.len(),
            "pypy_releases": db.pypy.release_dates.len(),
            "ok": report.is_ok(),
            "violations": report.violations(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&payload).expect("json serialization")
        );
    } else {
        println!("pyver validate");
        println!("  v1 data: {}", args.data);
        println!("  v0 data: {}", args.flat);
        println!("  CPython releases: {}", db.cpython.release_dates.len());
        println!("  PyPy releases: {}", db.pypy.release_dates.len());
        if report.is_ok() {
            println!("  Result: OK");
        } else {
            println!("  Result: FAILED");
            for violation in report.violations() {
                println!("  - {violation}");
            }
        }
    }

    if !report.is_ok() {
        std::process::exit(EXIT_VIOLATIONS);
    }
}
