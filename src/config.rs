//! Configuration for CDO output parsing.
//!
//! Provides the small set of markers the parsers use to tell noise
//! (comments, the trailing tool banner, omitted-timestep rows) apart from
//! data. The defaults match stock CDO output.

use crate::constants::{DEFAULT_BANNER_PREFIX, DEFAULT_COMMENT_MARKER, DEFAULT_MIN_OMISSION_DOTS};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parser configuration shared by all output parsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Leading character of comment lines
    pub comment_marker: char,

    /// First word of the banner line CDO appends to its output
    pub banner_prefix: String,

    /// Minimum number of consecutive dots that marks omitted timesteps
    pub min_omission_dots: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            comment_marker: DEFAULT_COMMENT_MARKER,
            banner_prefix: DEFAULT_BANNER_PREFIX.to_string(),
            min_omission_dots: DEFAULT_MIN_OMISSION_DOTS,
        }
    }
}

impl ParserConfig {
    /// Create configuration with a custom comment marker
    pub fn with_comment_marker(mut self, marker: char) -> Self {
        self.comment_marker = marker;
        self
    }

    /// Create configuration with a custom banner prefix
    pub fn with_banner_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.banner_prefix = prefix.into();
        self
    }

    /// Create configuration with a custom omission marker length
    pub fn with_min_omission_dots(mut self, dots: usize) -> Self {
        self.min_omission_dots = dots;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.banner_prefix.trim().is_empty() {
            return Err(Error::configuration("Banner prefix cannot be empty"));
        }

        if self.min_omission_dots < 2 {
            return Err(Error::configuration(format!(
                "Omission marker must be at least 2 dots, got {}",
                self.min_omission_dots
            )));
        }

        if self.comment_marker.is_alphanumeric() || self.comment_marker.is_whitespace() {
            return Err(Error::configuration(format!(
                "Comment marker '{}' would swallow data lines",
                self.comment_marker
            )));
        }

        debug!("Parser configuration validated: {:?}", self);
        Ok(())
    }

    /// Check whether a trimmed line is a comment
    pub fn is_comment(&self, line: &str) -> bool {
        line.starts_with(self.comment_marker)
    }

    /// Check whether a trimmed line is the tool's trailing banner
    ///
    /// The banner looks like `cdo    griddes: Processed 1 variable [0.02s 44MB]`
    /// and never contains `=`, so key/value data is never mistaken for it.
    pub fn is_banner(&self, line: &str) -> bool {
        let mut words = line.split_whitespace();
        let first_word_matches = words.next() == Some(self.banner_prefix.as_str());
        first_word_matches
            && !line.contains('=')
            && words.next().is_some_and(|word| word.ends_with(':'))
    }

    /// Check whether a trimmed line is a row of dots marking omitted entries
    pub fn is_omission_marker(&self, line: &str) -> bool {
        line.len() >= self.min_omission_dots && line.chars().all(|c| c == '.')
    }
}
