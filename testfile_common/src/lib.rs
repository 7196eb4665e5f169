//! Reader and writer for query test files.
//!
//! A test file is a sequence of `====`-delimited cases, each made of named
//! `----` subsections (query text, expected results, column types, ...).
//! This crate parses those files into [`TestCase`] values, writes them back
//! out, reads per-table format constraints and rewrites `$TABLE`-tagged query
//! text for a concrete table format and scale factor.
//!
//! Diagnostics are emitted through `tracing`; install a subscriber to see them.

mod comments;
mod config;
mod constraints;
mod error;
mod parser;
mod query;
mod table_format;
pub mod test_case;
mod writer;

pub use crate::comments::*;
pub use crate::config::*;
pub use crate::constraints::*;
pub use crate::error::*;
pub use crate::parser::*;
pub use crate::query::*;
pub use crate::table_format::*;
pub use crate::test_case::{QUERY_NAME, QUERY_TEST_SECTIONS, TestCase};
pub use crate::writer::*;
