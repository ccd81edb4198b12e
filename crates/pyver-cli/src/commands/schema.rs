use crate::cli::SchemaFormat;
use crate::support::{SCHEMA_V0, SCHEMA_V1};

pub fn run(format: SchemaFormat) {
    let text = match format {
        SchemaFormat::V0 => SCHEMA_V0,
        SchemaFormat::V1 => SCHEMA_V1,
    };
    print!("{text}");
}
