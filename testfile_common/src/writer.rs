//! Serializes test cases back into the test file grammar.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    Result, TestCase,
    test_case::{QUERY, QUERY_NAME},
};

const CASE_DELIMITER: &str = "====";

/// Writes `cases` in test file form.
///
/// Sections are written in insertion order. `QUERY_NAME` is never written as
/// a section of its own; it becomes the comment of the `QUERY` header.
pub fn write_test_cases<W: Write>(mut out: W, cases: &[TestCase]) -> Result<()> {
    for case in cases {
        writeln!(out, "{CASE_DELIMITER}")?;
        for (name, body) in case.sections() {
            if name == QUERY_NAME {
                continue;
            }
            match case.query_name() {
                Some(query_name) if name == QUERY => writeln!(out, "---- {name} : {query_name}")?,
                _ => writeln!(out, "---- {name}")?,
            }
            writeln!(out, "{body}")?;
        }
    }
    write!(out, "{CASE_DELIMITER}")?;
    out.flush()?;
    Ok(())
}

/// Renders `cases` as test file text.
pub fn render_test_file(cases: &[TestCase]) -> String {
    let mut buf = Vec::new();
    write_test_cases(&mut buf, cases).expect("writing to a Vec cannot fail");
    String::from_utf8(buf).expect("test cases are valid UTF-8")
}

/// Writes `cases` to `test_file`, replacing its contents.
pub fn write_test_file(test_file: impl AsRef<Path>, cases: &[TestCase]) -> Result<()> {
    let path = test_file.as_ref();
    let file = File::create(path)?;
    write_test_cases(BufWriter::new(file), cases)?;
    tracing::debug!("Wrote {} test cases to {}", cases.len(), path.display());
    Ok(())
}
