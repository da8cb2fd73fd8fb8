//! ctxsplit-chunk - Context-aware text chunking
//!
//! This crate splits documents into bounded-size chunks for downstream LLM
//! prompting, prepending an optional per-document context to every chunk
//! without exceeding the configured size.
//!
//! # Components
//!
//! - [`RecursiveCharacterSplitter`]: Recursively splits text using
//!   progressively smaller separators (paragraphs, lines, words, characters).
//!
//! - [`SplitMerger`]: Greedily merges small fragments back into chunks with a
//!   sliding overlap window.
//!
//! - [`ContextAwareChunker`]: Applies a splitter to documents, handling the
//!   context prefix and per-chunk metadata.
//!
//! # Example
//!
//! ```rust
//! use ctxsplit_chunk::{ContextAwareChunker, Document, SplitterConfig};
//!
//! let config = SplitterConfig::new(17, 1).with_context_perc_of_chunk_size(53.0);
//! let chunker = ContextAwareChunker::new(config).unwrap();
//!
//! let doc = Document::new("Hola.\n\nQue tal?").with_entry("chunk-context", "Context");
//! let chunks = chunker.split_documents(&[doc]).unwrap();
//!
//! assert_eq!(chunks[0].page_content, "Context\n\nHola.");
//! assert_eq!(chunks[1].page_content, "Context\n\nQue tal?");
//! ```

mod context;
mod merge;
mod recursive;

#[cfg(test)]
mod test_support;

pub use context::ContextAwareChunker;
pub use merge::SplitMerger;
pub use recursive::RecursiveCharacterSplitter;

// Re-export types for convenience
pub use ctxsplit_core::{
    Document, DocumentTransformer, LengthFunction, Metadata, Result, SplitError, SplitterConfig,
    TextSplitter,
};
