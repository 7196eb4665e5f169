//! Table format descriptors and the storage-format table suffix.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Describes which generated copy of a workload's tables a query should run against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableFormatInfo {
    /// Workload name, e.g. `tpch` or `functional`.
    pub dataset: String,
    /// Storage format, e.g. `text` or `parquet`.
    pub file_format: String,
    /// Codec name, `none` when uncompressed.
    pub compression_codec: String,
    /// `block` or `record`.
    pub compression_type: String,
}

impl TableFormatInfo {
    /// Builds a descriptor from its four parts.
    pub fn new(
        dataset: impl Into<String>,
        file_format: impl Into<String>,
        compression_codec: impl Into<String>,
        compression_type: impl Into<String>,
    ) -> Self {
        Self {
            dataset: dataset.into(),
            file_format: file_format.into(),
            compression_codec: compression_codec.into(),
            compression_type: compression_type.into(),
        }
    }

    /// Suffix appended to table names stored in this format.
    pub fn table_suffix(&self) -> String {
        build_table_suffix(
            &self.file_format,
            &self.compression_codec,
            &self.compression_type,
        )
    }
}

/// Builds the table name suffix for a file format and compression setting.
///
/// Uncompressed text tables carry no suffix, other uncompressed tables only
/// the format, and compressed tables the format plus the codec (with a
/// `record` marker for record-level compression).
pub fn build_table_suffix(file_format: &str, codec: &str, compression_type: &str) -> String {
    if file_format == "text" && codec == "none" {
        String::new()
    } else if codec == "none" {
        format!("_{file_format}")
    } else if compression_type == "record" {
        format!("_{file_format}_record_{codec}")
    } else {
        format!("_{file_format}_{codec}")
    }
}

/// Error parsing the compact table format form.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum TableFormatParseError {
    /// The input did not have four non-empty `/`-separated parts.
    #[error("expected 'dataset/file_format/codec/compression_type', got '{0}'")]
    InvalidFormat(String),
}

impl FromStr for TableFormatInfo {
    type Err = TableFormatParseError;

    /// Parses the compact `dataset/file_format/codec/compression_type` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        match parts.as_slice() {
            [dataset, file_format, codec, compression_type]
                if parts.iter().all(|p| !p.is_empty()) =>
            {
                Ok(Self::new(*dataset, *file_format, *codec, *compression_type))
            }
            _ => Err(TableFormatParseError::InvalidFormat(s.to_string())),
        }
    }
}

impl Display for TableFormatInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.dataset, self.file_format, self.compression_codec, self.compression_type
        )
    }
}
