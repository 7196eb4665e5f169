//! Parsed test cases and the section names they use.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Query text to execute.
pub const QUERY: &str = "QUERY";
/// Expected result rows.
pub const RESULTS: &str = "RESULTS";
/// Expected result column types.
pub const TYPES: &str = "TYPES";
/// Expected partitions.
pub const PARTITIONS: &str = "PARTITIONS";
/// Statements run before the query.
pub const SETUP: &str = "SETUP";

/// Synthetic key holding the comment of a `---- QUERY : <name>` header.
pub const QUERY_NAME: &str = "QUERY_NAME";

/// Section names recognized in query test files.
pub const QUERY_TEST_SECTIONS: [&str; 5] = [QUERY, RESULTS, TYPES, PARTITIONS, SETUP];

/// One `====`-delimited case of a test file.
///
/// Sections keep the order they were inserted in, so writing a parsed case
/// reproduces the original section order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TestCase {
    sections: IndexMap<String, String>,
}

impl TestCase {
    /// An empty case.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing cases in code.
    pub fn with_section(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.insert(name, body);
        self
    }

    /// Sets a section body. An existing section keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, body: impl Into<String>) -> Option<String> {
        self.sections.insert(name.into(), body.into())
    }

    /// Body of section `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.sections.get(name).map(String::as_str)
    }

    /// Whether the case has section `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.sections.contains_key(name)
    }

    /// The query body, if the case has one.
    pub fn query(&self) -> Option<&str> {
        self.get(QUERY)
    }

    /// The comment from the `QUERY` header, if one was given.
    pub fn query_name(&self) -> Option<&str> {
        self.get(QUERY_NAME)
    }

    /// Iterates `(name, body)` pairs in insertion order, `QUERY_NAME` included.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sections
            .iter()
            .map(|(name, body)| (name.as_str(), body.as_str()))
    }

    /// Number of sections, `QUERY_NAME` included.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the case has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TestCase {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut case = Self::new();
        for (name, body) in iter {
            case.insert(name, body);
        }
        case
    }
}
