//! Core domain types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-document metadata. Keys are arbitrary.
pub type Metadata = HashMap<String, serde_json::Value>;

/// A piece of text together with its metadata.
///
/// Both the documents handed to a splitter and the chunks it produces are
/// represented by this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Text content.
    pub page_content: String,

    /// User-provided metadata.
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with empty metadata.
    pub fn new(page_content: impl Into<String>) -> Self {
        Self {
            page_content: page_content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Create a document with the given metadata.
    pub fn with_metadata(page_content: impl Into<String>, metadata: Metadata) -> Self {
        Self {
            page_content: page_content.into(),
            metadata,
        }
    }

    /// Insert a single metadata entry, builder style.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_builders() {
        let doc = Document::new("Hola.")
            .with_entry("source", "s1")
            .with_entry("page", 3);

        assert_eq!(doc.page_content, "Hola.");
        assert_eq!(doc.metadata.get("source"), Some(&json!("s1")));
        assert_eq!(doc.metadata.get("page"), Some(&json!(3)));
    }

    #[test]
    fn test_document_deserialize_without_metadata() {
        let doc: Document = serde_json::from_str(r#"{"page_content": "Hi."}"#).unwrap();
        assert_eq!(doc, Document::new("Hi."));
    }
}
