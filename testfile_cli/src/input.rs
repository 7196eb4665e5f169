//! Test file input, either from disk or from stdin (`-`).

use std::{
    io::{self, Read},
    path::Path,
};

use testfile_common::{ParseConfig, TestCase, parse_test_file, parse_test_str};

/// Path argument that selects stdin instead of a file.
pub const STDIN_PATH: &str = "-";

/// Whether `file` names stdin.
pub fn is_stdin(file: &Path) -> bool {
    file.as_os_str() == STDIN_PATH
}

/// Parses the cases of `file`, reading from `stdin` when `file` is `-`.
pub fn read_cases<R: Read>(
    file: &Path,
    config: &ParseConfig,
    mut stdin: R,
) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    if !is_stdin(file) {
        return Ok(parse_test_file(file, config)?);
    }

    let mut bytes = Vec::new();
    stdin.read_to_end(&mut bytes)?;
    Ok(parse_test_str(&String::from_utf8_lossy(&bytes), config)?)
}

/// [`read_cases`] against the process's stdin.
pub fn read_cases_or_stdin(
    file: &Path,
    config: &ParseConfig,
) -> Result<Vec<TestCase>, Box<dyn std::error::Error>> {
    read_cases(file, config, io::stdin().lock())
}
