//! Context-aware document chunker.
//!
//! Each document may carry a context string in its metadata. The context is
//! prepended to every chunk of that document and its length is taken out of
//! the chunk budget, so prefixed chunks still respect `chunk_size`.

use std::sync::Arc;

use ctxsplit_core::{
    char_count, Document, DocumentTransformer, LengthFunction, Metadata, Result, SplitError,
    SplitterConfig, TextSplitter,
};
use serde_json::Value;
use tracing::debug;

use crate::RecursiveCharacterSplitter;

/// Splits documents into chunks, prefixing each chunk with its document's
/// context and copying the remaining metadata onto it.
///
/// Context length is measured with the splitter's own
/// [`TextSplitter::measure`], so the context budget and the fragment sizes
/// are always in the same units.
pub struct ContextAwareChunker<S = RecursiveCharacterSplitter> {
    config: SplitterConfig,
    splitter: S,
}

impl ContextAwareChunker<RecursiveCharacterSplitter> {
    /// Create a chunker measuring length in characters.
    pub fn new(config: SplitterConfig) -> Result<Self> {
        Self::with_length_function(config, char_count())
    }

    /// Create a chunker with a custom length function, used both for the
    /// context budget and by the recursive splitter.
    pub fn with_length_function(config: SplitterConfig, length_function: LengthFunction) -> Result<Self> {
        let splitter = RecursiveCharacterSplitter::from_config(&config, length_function);
        Self::with_splitter(config, splitter)
    }

    /// Convenience wrapper over [`Self::with_length_function`] for closures.
    pub fn with_length_fn<F>(config: SplitterConfig, f: F) -> Result<Self>
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self::with_length_function(config, Arc::new(f))
    }
}

impl<S: TextSplitter> ContextAwareChunker<S> {
    /// Create a chunker around any splitting strategy.
    pub fn with_splitter(config: SplitterConfig, splitter: S) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, splitter })
    }

    pub fn config(&self) -> &SplitterConfig {
        &self.config
    }

    pub fn splitter(&self) -> &S {
        &self.splitter
    }

    /// Split each text, pairing it with the metadata at the same index.
    ///
    /// Without `metadatas` every text gets empty metadata. The caller's maps
    /// are never modified.
    pub fn create_documents<T: AsRef<str>>(
        &self,
        texts: &[T],
        metadatas: Option<&[Metadata]>,
    ) -> Result<Vec<Document>> {
        if let Some(metadatas) = metadatas {
            if metadatas.len() != texts.len() {
                return Err(SplitError::invalid_argument(format!(
                    "got {} metadatas for {} texts",
                    metadatas.len(),
                    texts.len()
                )));
            }
        }

        let empty = Metadata::new();
        let mut documents = Vec::new();

        for (i, text) in texts.iter().enumerate() {
            let metadata = metadatas.map_or(&empty, |m| &m[i]);
            self.split_one(text.as_ref(), metadata, &mut documents)?;
        }

        Ok(documents)
    }

    /// Split documents, keeping input order.
    pub fn split_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        let mut chunks = Vec::new();
        for doc in documents {
            self.split_one(&doc.page_content, &doc.metadata, &mut chunks)?;
        }
        Ok(chunks)
    }

    fn split_one(&self, text: &str, metadata: &Metadata, out: &mut Vec<Document>) -> Result<()> {
        let context = self.context_for(metadata)?;
        let context_len = if context.is_empty() {
            0
        } else {
            self.splitter.measure(&context)
        };

        if context_len as f64 / self.config.chunk_size as f64 > self.config.context_fraction() {
            return Err(SplitError::ContextTooLong {
                context,
                length: context_len,
                chunk_size: self.config.chunk_size,
            });
        }

        let mut chunk_metadata = metadata.clone();
        chunk_metadata.remove(&self.config.context_key);

        let effective_size = self.config.chunk_size.saturating_sub(context_len);
        let fragments = self.splitter.split_text(text, effective_size);

        debug!(
            splitter = self.splitter.name(),
            context_len,
            effective_size,
            chunks = fragments.len(),
            "Split document"
        );

        out.extend(fragments.into_iter().map(|fragment| Document {
            page_content: format!("{}{}", context, fragment),
            metadata: chunk_metadata.clone(),
        }));

        Ok(())
    }

    /// Context prefix for a document, including the separator. Empty when
    /// the document has no (or an empty) context.
    fn context_for(&self, metadata: &Metadata) -> Result<String> {
        match metadata.get(&self.config.context_key) {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) if s.is_empty() => Ok(String::new()),
            Some(Value::String(s)) => Ok(format!("{}{}", s, self.config.context_separator)),
            Some(_) => Err(SplitError::InvalidContext {
                key: self.config.context_key.clone(),
            }),
        }
    }
}

impl<S: TextSplitter> DocumentTransformer for ContextAwareChunker<S> {
    fn transform_documents(&self, documents: &[Document]) -> Result<Vec<Document>> {
        self.split_documents(documents)
    }
}
