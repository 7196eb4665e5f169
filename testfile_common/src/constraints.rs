//! Per-table file format constraints.
//!
//! A constraints file holds one rule per line:
//!
//! ```text
//! table_name:<name>, constraint_type:<restrict_to|exclude>, file_format:<f1>,<f2>,...
//! ```
//!
//! Blank lines and lines starting with `#` are ignored.

use std::{fs, path::Path};

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Result, TestFileError};

/// Include and exclude format lists keyed by lower-cased table name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableConstraints {
    /// Tables that may only be loaded in the listed formats.
    pub restrict_to: IndexMap<String, Vec<String>>,
    /// Tables that must not be loaded in the listed formats.
    pub exclude: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConstraintType {
    RestrictTo,
    Exclude,
}

impl ConstraintType {
    fn parse(value: &str) -> Result<Self> {
        match value {
            "restrict_to" => Ok(Self::RestrictTo),
            "exclude" => Ok(Self::Exclude),
            other => Err(TestFileError::InvalidConstraintType(other.to_string())),
        }
    }
}

impl TableConstraints {
    /// Empty constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no table has any rule.
    pub fn is_empty(&self) -> bool {
        self.restrict_to.is_empty() && self.exclude.is_empty()
    }

    /// Formats `table_name` is restricted to, if any.
    pub fn restrict_to(&self, table_name: &str) -> Option<&[String]> {
        self.restrict_to
            .get(&table_name.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Formats `table_name` must not use, if any.
    pub fn excludes(&self, table_name: &str) -> Option<&[String]> {
        self.exclude
            .get(&table_name.to_lowercase())
            .map(Vec::as_slice)
    }

    /// Parses constraint rules from in-memory text.
    pub fn parse_str(text: &str) -> Result<Self> {
        let mut constraints = Self::new();
        for line in text.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            constraints.add_line(line)?;
        }
        Ok(constraints)
    }

    fn add_line(&mut self, line: &str) -> Result<()> {
        let malformed = || TestFileError::MalformedConstraint {
            line: line.to_string(),
        };

        // The format list itself is comma separated, so only split off two fields.
        let values = line
            .splitn(3, ',')
            .map(|field| field.split(':').nth(1).map(str::trim).ok_or_else(malformed))
            .collect::<Result<Vec<_>>>()?;
        let [table_name, constraint_type, file_formats] = values.as_slice() else {
            return Err(malformed());
        };

        let target = match ConstraintType::parse(constraint_type)? {
            ConstraintType::RestrictTo => &mut self.restrict_to,
            ConstraintType::Exclude => &mut self.exclude,
        };
        target
            .entry(table_name.to_lowercase())
            .or_default()
            .extend(file_formats.split(',').map(str::to_string));
        Ok(())
    }
}

/// Reads a table constraints file.
///
/// A missing file is not an error: it yields empty constraints.
pub fn parse_table_constraints(constraints_file: impl AsRef<Path>) -> Result<TableConstraints> {
    let path = constraints_file.as_ref();
    if !path.is_file() {
        tracing::info!("No schema constraints file found at {}", path.display());
        return Ok(TableConstraints::new());
    }

    let bytes = fs::read(path)?;
    let constraints = TableConstraints::parse_str(&String::from_utf8_lossy(&bytes))?;
    tracing::debug!(
        "Loaded constraints for {} restricted and {} excluded tables from {}",
        constraints.restrict_to.len(),
        constraints.exclude.len(),
        path.display()
    );
    Ok(constraints)
}
