//! Pyver CLI: the `pyver` command.

mod cli;
mod commands;
mod support;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            data,
            flat,
            data_schema,
            flat_schema,
            skip_schema,
            fail_fast,
            json,
        } => commands::validate::run(commands::validate::Args {
            data,
            flat,
            data_schema,
            flat_schema,
            skip_schema,
            fail_fast,
            json,
        }),

        Commands::Schema { format } => commands::schema::run(format),
    }
}
