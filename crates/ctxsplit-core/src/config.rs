//! Configuration types for the splitter.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SplitError};

/// Upper bound for `context_perc_of_chunk_size`.
pub const MAX_CONTEXT_PERCENTAGE: f64 = 90.0;

/// Splitter configuration.
///
/// The length function is not part of the serializable configuration; it is
/// supplied when the chunker is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitterConfig {
    /// Maximum chunk length, in length-function units.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Length retained from the previous chunk when sliding the merge window.
    #[serde(default = "default_chunk_overlap")]
    pub chunk_overlap: usize,

    /// Metadata key holding the optional per-document context.
    #[serde(default = "default_context_key")]
    pub context_key: String,

    /// Inserted between the context and the chunk body.
    #[serde(default = "default_context_separator")]
    pub context_separator: String,

    /// Maximum share of `chunk_size` the context may take, in percent.
    #[serde(default = "default_context_perc_of_chunk_size")]
    pub context_perc_of_chunk_size: f64,

    /// Candidate separators, tried in order. An empty string splits into
    /// individual characters.
    #[serde(default = "default_separators")]
    pub separators: Vec<String>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            chunk_overlap: default_chunk_overlap(),
            context_key: default_context_key(),
            context_separator: default_context_separator(),
            context_perc_of_chunk_size: default_context_perc_of_chunk_size(),
            separators: default_separators(),
        }
    }
}

impl SplitterConfig {
    /// Create a config with the given size and overlap, defaults elsewhere.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            ..Default::default()
        }
    }

    pub fn with_context_key(mut self, key: impl Into<String>) -> Self {
        self.context_key = key.into();
        self
    }

    pub fn with_context_separator(mut self, separator: impl Into<String>) -> Self {
        self.context_separator = separator.into();
        self
    }

    pub fn with_context_perc_of_chunk_size(mut self, perc: f64) -> Self {
        self.context_perc_of_chunk_size = perc;
        self
    }

    pub fn with_separators<I, S>(mut self, separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separators = separators.into_iter().map(Into::into).collect();
        self
    }

    /// Context share as a fraction of `chunk_size`.
    pub fn context_fraction(&self) -> f64 {
        self.context_perc_of_chunk_size / 100.0
    }

    /// Check the configuration invariants.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SplitError::InvalidChunkSize {
                chunk_size: self.chunk_size,
            });
        }

        if self.chunk_overlap > self.chunk_size {
            return Err(SplitError::OverlapExceedsChunkSize {
                chunk_overlap: self.chunk_overlap,
                chunk_size: self.chunk_size,
            });
        }

        // NaN fails both comparisons, so test for the valid range.
        let perc = self.context_perc_of_chunk_size;
        if !(perc > 0.0 && perc <= MAX_CONTEXT_PERCENTAGE) {
            return Err(SplitError::InvalidContextPercentage { value: perc });
        }

        if self.separators.is_empty() {
            return Err(SplitError::EmptySeparators);
        }

        Ok(())
    }

    /// Parse and validate a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| SplitError::config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }
}

// Default value functions

fn default_chunk_size() -> usize {
    4000
}

fn default_chunk_overlap() -> usize {
    200
}

fn default_context_key() -> String {
    "chunk-context".to_string()
}

fn default_context_separator() -> String {
    "\n\n".to_string()
}

fn default_context_perc_of_chunk_size() -> f64 {
    20.0
}

fn default_separators() -> Vec<String> {
    ["\n\n", "\n", " ", ""].iter().map(|s| s.to_string()).collect()
}
