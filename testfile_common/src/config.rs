//! Parser configuration.

use std::collections::HashSet;

use crate::test_case::QUERY_TEST_SECTIONS;

/// Parser settings for one call: the closed set of section names and how to
/// treat names outside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseConfig {
    /// Closed set of recognized subsection names.
    pub valid_section_names: HashSet<String>,
    /// Skip unknown subsections (the default) instead of failing.
    pub skip_unknown_sections: bool,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::query_test()
    }
}

impl ParseConfig {
    /// Starts a lenient configuration with no valid section names.
    pub fn builder() -> ParseConfigBuilder {
        ParseConfigBuilder::default()
    }

    /// Lenient settings for query test files.
    pub fn query_test() -> Self {
        Self::builder().sections(QUERY_TEST_SECTIONS).build()
    }

    /// Whether `name` is in the valid set.
    pub fn is_valid_section(&self, name: &str) -> bool {
        self.valid_section_names.contains(name)
    }
}

/// Builder for [`ParseConfig`].
#[derive(Debug, Clone)]
pub struct ParseConfigBuilder {
    valid_section_names: HashSet<String>,
    skip_unknown_sections: bool,
}

impl Default for ParseConfigBuilder {
    fn default() -> Self {
        Self {
            valid_section_names: HashSet::new(),
            skip_unknown_sections: true,
        }
    }
}

impl ParseConfigBuilder {
    /// Adds one valid section name.
    pub fn section(mut self, name: impl Into<String>) -> Self {
        self.valid_section_names.insert(name.into());
        self
    }

    /// Adds several valid section names.
    pub fn sections<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_section_names
            .extend(names.into_iter().map(Into::into));
        self
    }

    /// Chooses between skipping (`true`) and rejecting unknown subsections.
    pub fn skip_unknown_sections(mut self, skip: bool) -> Self {
        self.skip_unknown_sections = skip;
        self
    }

    /// Fail on unknown subsection names instead of skipping them.
    pub fn strict(self) -> Self {
        self.skip_unknown_sections(false)
    }

    /// Finishes the configuration.
    pub fn build(self) -> ParseConfig {
        ParseConfig {
            valid_section_names: self.valid_section_names,
            skip_unknown_sections: self.skip_unknown_sections,
        }
    }
}
