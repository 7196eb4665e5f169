//! Error type shared by the whole crate.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading, rewriting or writing query test files.
#[derive(Error, Debug)]
pub enum TestFileError {
    /// The test file does not exist or could not be read.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying read failure.
        #[source]
        source: std::io::Error,
    },

    /// A subsection name outside the valid set was seen in strict mode.
    #[error("Unknown subsection: {0}")]
    UnknownSubsection(String),

    /// A constraints line used a constraint type other than `restrict_to` or `exclude`.
    #[error("Unknown constraint type: {0}")]
    InvalidConstraintType(String),

    /// A constraints line did not carry three `key:value` fields.
    #[error("Malformed constraint line: '{line}'")]
    MalformedConstraint {
        /// The offending line, trimmed.
        line: String,
    },

    /// A table-name rewrite pattern failed to compile.
    #[error("Invalid rewrite pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Writing a test file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias using [`TestFileError`].
pub type Result<T> = std::result::Result<T, TestFileError>;
