//! Query test file CLI
//!
//! Entry point for the `testfile` command-line tool. Parses query test files,
//! regenerates them in canonical form, rewrites their queries for a table
//! format and prints table constraints files.

mod args;
mod input;

use std::io::{self, Write};

use clap::Parser;
use testfile_common::{
    ParseConfig, build_query, parse_table_constraints, write_test_cases, write_test_file,
};
use tracing::info;

use args::{Args, Command};
use input::read_cases_or_stdin;

/// Executes the test file tool.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Runs the requested subcommand
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Parse {
            file,
            sections,
            json,
        } => {
            let cases = read_cases_or_stdin(&file, &sections.to_config())?;
            info!("Parsed {} cases from {}", cases.len(), file.display());

            if json {
                serde_json::to_writer_pretty(&mut out, &cases)?;
                writeln!(out)?;
            } else {
                for (i, case) in cases.iter().enumerate() {
                    let names: Vec<&str> = case.sections().map(|(name, _)| name).collect();
                    match case.query_name() {
                        Some(query_name) => writeln!(out, "{i}: {query_name} [{}]", names.join(", "))?,
                        None => writeln!(out, "{i}: [{}]", names.join(", "))?,
                    }
                }
            }
        }
        Command::Format {
            file,
            sections,
            output,
        } => {
            let cases = read_cases_or_stdin(&file, &sections.to_config())?;
            match output {
                Some(path) => {
                    write_test_file(&path, &cases)?;
                    info!("Wrote {} cases to {}", cases.len(), path.display());
                }
                None => {
                    write_test_cases(&mut out, &cases)?;
                    writeln!(out)?;
                }
            }
        }
        Command::BuildQuery {
            file,
            format,
            scale_factor,
        } => {
            let cases = read_cases_or_stdin(&file, &ParseConfig::query_test())?;
            info!("Rewriting queries for {} at scale factor '{}'", format, scale_factor);

            for query in cases.iter().filter_map(|case| case.query()) {
                writeln!(out, "{};", build_query(query, &format, &scale_factor)?)?;
            }
        }
        Command::Constraints { file } => {
            let constraints = parse_table_constraints(&file)?;
            for (table, formats) in &constraints.restrict_to {
                writeln!(out, "{table}: restrict_to {}", formats.join(","))?;
            }
            for (table, formats) in &constraints.exclude {
                writeln!(out, "{table}: exclude {}", formats.join(","))?;
            }
        }
    }

    Ok(())
}
