//! Rewrites `$TABLE`-tagged query text into fully qualified table names.

use std::fmt::Display;

use regex::{Captures, Regex};

use crate::{Result, TableFormatInfo, remove_comments};

/// Marker appended to table names that take the storage-format suffix.
pub const TABLE_MARKER: &str = "$TABLE";

/// Dataset whose tables live in the default database.
const FUNCTIONAL_DATASET: &str = "functional";

/// Replaces every `$TABLE` marker with the suffix for `table_format`.
///
/// Unlike [`build_query`] this leaves comments and database names alone.
pub fn replace_table_suffix(section_text: &str, table_format: &TableFormatInfo) -> String {
    section_text.replace(TABLE_MARKER, &table_format.table_suffix())
}

/// Database prefix (including the trailing dot) for a workload at a scale factor.
pub fn database_name(dataset: &str, scale_factor: impl Display) -> String {
    if dataset == FUNCTIONAL_DATASET {
        String::new()
    } else {
        format!("{dataset}{scale_factor}.")
    }
}

/// Builds the query to execute for a table format and scale factor.
///
/// Comment lines are removed first. `<dataset>.<table>` references (e.g.
/// insert targets) are then qualified with the scale-factor database, and
/// only afterwards are `<table>$TABLE` references qualified and suffixed.
/// The passes are applied in that order; the result is trimmed and loses
/// one trailing `;`.
pub fn build_query(
    query_section_text: &str,
    table_format: &TableFormatInfo,
    scale_factor: impl Display,
) -> Result<String> {
    let query = remove_comments(query_section_text);
    let dataset = table_format.dataset.as_str();
    let database_name = database_name(dataset, scale_factor);
    let table_suffix = table_format.table_suffix();

    tracing::trace!(
        "build_query: dataset={}, database_name='{}', table_suffix='{}'",
        dataset,
        database_name,
        table_suffix
    );

    let qualified = qualify_dataset_tables(&query, dataset, &database_name)?;
    let suffixed = suffix_marked_tables(&qualified, &database_name, &table_suffix)?;

    let trimmed = suffixed.trim();
    Ok(trimmed.strip_suffix(';').unwrap_or(trimmed).to_string())
}

/// `<dataset>.<table>` -> `<database_name><table>`.
fn qualify_dataset_tables(query: &str, dataset: &str, database_name: &str) -> Result<String> {
    let re = Regex::new(&format!(r"({}\.)(?P<table_name>\w+)", regex::escape(dataset)))?;
    let rewritten = re.replace_all(query, |caps: &Captures| {
        format!("{database_name}{}", &caps["table_name"])
    });
    Ok(rewritten.into_owned())
}

/// `[<database_name>]<table>$TABLE` -> `<database_name><table><table_suffix>`.
fn suffix_marked_tables(query: &str, database_name: &str, table_suffix: &str) -> Result<String> {
    let prefix = if database_name.is_empty() {
        String::new()
    } else {
        format!("(?:{})?", regex::escape(database_name))
    };
    let re = Regex::new(&format!(
        r"{prefix}(?P<table_name>\w+){}",
        regex::escape(TABLE_MARKER)
    ))?;
    let rewritten = re.replace_all(query, |caps: &Captures| {
        format!("{database_name}{}{table_suffix}", &caps["table_name"])
    });
    Ok(rewritten.into_owned())
}
