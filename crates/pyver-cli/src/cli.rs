use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "pyver",
    about = "Pyver: sanity checks over the pyversion-info release databases",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate the databases: schema, flat/nested agreement, and every
    /// structural and chronological invariant
    Validate {
        /// Path to the nested v1 database
        #[arg(long, default_value = "pyversion-info-data.v1.json")]
        data: String,

        /// Path to the legacy flat v0 database
        #[arg(long, default_value = "pyversion-info-data.json")]
        flat: String,

        /// Validate against this schema instead of the embedded v1 schema
        #[arg(long)]
        data_schema: Option<String>,

        /// Validate against this schema instead of the embedded v0 schema
        #[arg(long)]
        flat_schema: Option<String>,

        /// Skip JSON Schema validation of both documents
        #[arg(long)]
        skip_schema: bool,

        /// Stop at the first failing check group
        #[arg(long)]
        fail_fast: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print an embedded schema document
    Schema {
        /// Which database format
        #[arg(value_enum)]
        format: SchemaFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SchemaFormat {
    /// Legacy flat format
    V0,
    /// Nested multi-runtime format
    V1,
}
