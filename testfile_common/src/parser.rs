//! Reader for the `====` / `----` test file grammar.
//!
//! ```text
//! ====                      <- case
//! ---- QUERY : name         <- named subsection, comment optional
//! select ...
//! ---- RESULTS
//! ...
//! ====
//! ```

use std::{fs, path::Path};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    ParseConfig, Result, TestCase, TestFileError,
    test_case::{QUERY, QUERY_NAME},
};

lazy_static! {
    static ref CASE_DELIMITER_RE: Regex = Regex::new(r"(?m)^====").unwrap();
    static ref SUBSECTION_DELIMITER_RE: Regex = Regex::new(r"(?m)^----").unwrap();
}

/// Reads a query test file with the standard section names, skipping unknown ones.
pub fn parse_query_test_file(test_file: impl AsRef<Path>) -> Result<Vec<TestCase>> {
    parse_test_file(test_file, &ParseConfig::query_test())
}

/// Reads a test file and splits it into cases.
pub fn parse_test_file(test_file: impl AsRef<Path>, config: &ParseConfig) -> Result<Vec<TestCase>> {
    let path = test_file.as_ref();
    let bytes = fs::read(path).map_err(|source| TestFileError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse_test_str(&String::from_utf8_lossy(&bytes), config)?;
    tracing::debug!("Parsed {} test cases from {}", cases.len(), path.display());
    Ok(cases)
}

/// Splits test file text into cases.
///
/// Cases without any recognized subsection are dropped.
pub fn parse_test_str(text: &str, config: &ParseConfig) -> Result<Vec<TestCase>> {
    let mut cases = Vec::new();
    for (index, case_text) in CASE_DELIMITER_RE.split(text).enumerate() {
        let case = parse_case(case_text, config)?;
        if case.is_empty() {
            continue;
        }
        tracing::trace!("case {}: {} sections", index, case.len());
        cases.push(case);
    }
    Ok(cases)
}

fn parse_case(case_text: &str, config: &ParseConfig) -> Result<TestCase> {
    let mut case = TestCase::new();

    // Anything ahead of the first subsection delimiter belongs to no subsection.
    for subsection in SUBSECTION_DELIMITER_RE.split(case_text).skip(1) {
        let lines: Vec<&str> = subsection.split('\n').collect();
        let (name, comment) = parse_header(lines[0]);

        if name.is_empty() {
            tracing::debug!("Skipping subsection without a name");
            continue;
        }
        if !config.is_valid_section(name) {
            if config.skip_unknown_sections {
                tracing::warn!("Unknown section {}", name);
                continue;
            }
            return Err(TestFileError::UnknownSubsection(name.to_string()));
        }

        if let Some(comment) = comment.filter(|c| name == QUERY && !c.is_empty()) {
            case.insert(QUERY_NAME, comment);
        }

        // Drops the header line and the line after the last newline.
        let body = match lines.len() {
            0..=2 => String::new(),
            n => lines[1..n - 1].join("\n"),
        };
        case.insert(name, body);
    }

    Ok(case)
}

/// Splits `NAME` or `NAME : comment` into its trimmed parts.
///
/// Tokens after the second `:` are ignored.
fn parse_header(header: &str) -> (&str, Option<&str>) {
    let mut tokens = header.trim().split(':').map(str::trim);
    let name = tokens.next().unwrap_or_default();
    (name, tokens.next())
}
