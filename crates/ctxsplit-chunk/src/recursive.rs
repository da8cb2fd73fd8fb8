//! Recursive separator-based text splitter.
//!
//! Splits text on the first separator that occurs in it, merges the small
//! pieces back together and recurses into pieces that are still too long
//! with the remaining separators.

use ctxsplit_core::{char_count, LengthFunction, SplitterConfig, TextSplitter};
use tracing::{trace, warn};

use crate::merge::{join, SplitMerger};

/// Splitter that tries separators in order, from coarse to fine.
///
/// With the default separators this means:
/// 1. Double newline (paragraph breaks)
/// 2. Single newline
/// 3. Space
/// 4. Character (last resort)
#[derive(Clone)]
pub struct RecursiveCharacterSplitter {
    separators: Vec<String>,
    merger: SplitMerger,
    length_function: LengthFunction,
}

impl RecursiveCharacterSplitter {
    /// Create a splitter measuring length in characters.
    pub fn new(separators: Vec<String>, chunk_overlap: usize) -> Self {
        Self::with_length_function(separators, chunk_overlap, char_count())
    }

    /// Create a splitter with a custom length function.
    pub fn with_length_function(
        separators: Vec<String>,
        chunk_overlap: usize,
        length_function: LengthFunction,
    ) -> Self {
        Self {
            separators,
            merger: SplitMerger::new(chunk_overlap, length_function.clone()),
            length_function,
        }
    }

    /// Create a splitter from the separators and overlap in `config`.
    pub fn from_config(config: &SplitterConfig, length_function: LengthFunction) -> Self {
        Self::with_length_function(config.separators.clone(), config.chunk_overlap, length_function)
    }

    /// First separator present in `text`, or the last one when none is.
    fn pick_separator(&self, text: &str) -> &str {
        self.separators
            .iter()
            .find(|s| s.is_empty() || text.contains(s.as_str()))
            .or_else(|| self.separators.last())
            .map(String::as_str)
            .unwrap_or("")
    }

    fn split_recursive(&self, text: &str, chunk_size: usize, chunks: &mut Vec<String>) {
        let separator = self.pick_separator(text);
        trace!(separator = ?separator, text_len = text.len(), "Splitting text");

        let splits = split_by_separator(text, separator);
        let unsplittable = splits.len() == 1;

        let mut good_splits: Vec<&str> = Vec::new();
        for split in splits {
            if (self.length_function)(split) < chunk_size {
                good_splits.push(split);
                continue;
            }

            if !good_splits.is_empty() {
                chunks.extend(self.merger.merge(&good_splits, separator, chunk_size));
                good_splits.clear();
            }

            if unsplittable {
                // No separator makes progress on this piece; keep it whole.
                let Some(chunk) = join([split], separator) else {
                    continue;
                };
                let len = (self.length_function)(&chunk);
                if len > chunk_size {
                    warn!(
                        chunk_len = len,
                        chunk_size,
                        "Created a chunk of size {}, which is longer than the specified {}",
                        len,
                        chunk_size
                    );
                }
                chunks.push(chunk);
            } else {
                self.split_recursive(split, chunk_size, chunks);
            }
        }

        if !good_splits.is_empty() {
            chunks.extend(self.merger.merge(&good_splits, separator, chunk_size));
        }
    }
}

impl Default for RecursiveCharacterSplitter {
    fn default() -> Self {
        let config = SplitterConfig::default();
        Self::new(config.separators, config.chunk_overlap)
    }
}

impl TextSplitter for RecursiveCharacterSplitter {
    fn split_text(&self, text: &str, chunk_size: usize) -> Vec<String> {
        let mut chunks = Vec::new();
        self.split_recursive(text, chunk_size, &mut chunks);
        chunks
    }

    fn measure(&self, text: &str) -> usize {
        (self.length_function)(text)
    }

    fn name(&self) -> &'static str {
        "recursive-character"
    }
}

/// Split text by a separator, keeping empty pieces.
fn split_by_separator<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    if separator.is_empty() {
        // Character-level split as last resort
        return text
            .char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect();
    }

    text.split(separator).collect()
}
