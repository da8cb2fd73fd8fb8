//! Core traits defining the interfaces between components.

use std::sync::Arc;

use crate::error::Result;
use crate::types::Document;

/// Measures text in the units chunk sizes are expressed in.
pub type LengthFunction = Arc<dyn Fn(&str) -> usize + Send + Sync>;

/// Default length function: number of characters (Unicode scalar values).
pub fn char_count() -> LengthFunction {
    Arc::new(|text: &str| text.chars().count())
}

/// Text splitting strategy.
pub trait TextSplitter: Send + Sync {
    /// Split `text` into ordered fragments of at most `chunk_size` units
    /// where the text allows it.
    fn split_text(&self, text: &str, chunk_size: usize) -> Vec<String>;

    /// Length of `text` in the units `chunk_size` is expressed in.
    fn measure(&self, text: &str) -> usize;

    /// Human-readable strategy name.
    fn name(&self) -> &'static str;
}

/// Batch transformation over documents.
pub trait DocumentTransformer {
    /// Transform documents, preserving their order.
    fn transform_documents(&self, documents: &[Document]) -> Result<Vec<Document>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_counts_scalars() {
        let len = char_count();
        assert_eq!(len(""), 0);
        assert_eq!(len("Hi."), 3);
        assert_eq!(len("¿Qué?"), 5);
    }
}
