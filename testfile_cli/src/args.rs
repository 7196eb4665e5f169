//! Command-line arguments for the `testfile` tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use testfile_common::{ParseConfig, QUERY_TEST_SECTIONS, TableFormatInfo};

/// Query test file toolkit - inspect, regenerate and rewrite test fixtures
#[derive(Parser, Debug)]
#[command(name = "testfile")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands of the `testfile` tool
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a test file and print its cases
    Parse {
        /// Path to the test file, or `-` for stdin
        file: PathBuf,
        #[command(flatten)]
        sections: SectionArgs,
        /// Print the cases as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Parse a test file and write it back in canonical form
    Format {
        /// Path to the test file, or `-` for stdin
        file: PathBuf,
        #[command(flatten)]
        sections: SectionArgs,
        /// Where to write the result (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },
    /// Rewrite the queries of a test file for a table format and scale factor
    BuildQuery {
        /// Path to the test file, or `-` for stdin
        file: PathBuf,
        /// Table format as dataset/file_format/codec/compression_type
        #[arg(short = 'f', long, default_value = "functional/text/none/block")]
        format: TableFormatInfo,
        /// Scale factor appended to the dataset's database name
        #[arg(short = 's', long, default_value = "")]
        scale_factor: String,
    },
    /// Print the include and exclude rules of a table constraints file
    Constraints {
        /// Path to the constraints file
        file: PathBuf,
    },
}

/// Options controlling which subsections are recognized
#[derive(clap::Args, Debug, Clone)]
pub struct SectionArgs {
    /// Valid subsection names (defaults to the query test sections)
    #[arg(long, value_delimiter = ',')]
    pub sections: Vec<String>,
    /// Fail on unknown subsections instead of skipping them
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

impl SectionArgs {
    /// Convert command-line arguments into a parser configuration
    pub fn to_config(&self) -> ParseConfig {
        let builder = if self.sections.is_empty() {
            ParseConfig::builder().sections(QUERY_TEST_SECTIONS)
        } else {
            ParseConfig::builder().sections(self.sections.iter().cloned())
        };
        builder.skip_unknown_sections(!self.strict).build()
    }
}
