//! Error types for the splitter.

use thiserror::Error;

/// Result type alias using SplitError.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while configuring or running a splitter.
#[derive(Error, Debug)]
pub enum SplitError {
    /// Chunk size must be at least one length unit.
    #[error("Invalid chunk size: {chunk_size}, must be greater than 0")]
    InvalidChunkSize { chunk_size: usize },

    /// Overlap larger than the chunk it is carved out of.
    #[error(
        "Got a larger chunk overlap ({chunk_overlap}) than chunk size ({chunk_size}), should be smaller."
    )]
    OverlapExceedsChunkSize {
        chunk_overlap: usize,
        chunk_size: usize,
    },

    /// Context share outside (0, 90].
    #[error(
        "context_perc_of_chunk_size must be greater than 0 and less than or equal to 90 percent, got {value}"
    )]
    InvalidContextPercentage { value: f64 },

    /// No separators to split on.
    #[error("At least one separator must be configured")]
    EmptySeparators,

    /// The per-document context leaves too little room for the text.
    #[error("Chunk context is too long: {context}")]
    ContextTooLong {
        context: String,
        length: usize,
        chunk_size: usize,
    },

    /// Context metadata value is neither a string nor null.
    #[error("Invalid chunk context under key '{key}': expected a string")]
    InvalidContext { key: String },

    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration could not be parsed.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl SplitError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Whether the error was raised while validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidChunkSize { .. }
                | Self::OverlapExceedsChunkSize { .. }
                | Self::InvalidContextPercentage { .. }
                | Self::EmptySeparators
                | Self::Config { .. }
        )
    }

    /// Get a stable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidChunkSize { .. } => "INVALID_CHUNK_SIZE",
            Self::OverlapExceedsChunkSize { .. } => "OVERLAP_EXCEEDS_CHUNK_SIZE",
            Self::InvalidContextPercentage { .. } => "INVALID_CONTEXT_PERCENTAGE",
            Self::EmptySeparators => "EMPTY_SEPARATORS",
            Self::ContextTooLong { .. } => "CONTEXT_TOO_LONG",
            Self::InvalidContext { .. } => "INVALID_CONTEXT",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SplitError::ContextTooLong {
            context: "Title\n\n".to_string(),
            length: 7,
            chunk_size: 17,
        };
        assert_eq!(err.to_string(), "Chunk context is too long: Title\n\n");

        let err = SplitError::OverlapExceedsChunkSize {
            chunk_overlap: 20,
            chunk_size: 10,
        };
        assert!(err.to_string().contains("(20)"));
        assert!(err.to_string().contains("(10)"));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(
            SplitError::InvalidContextPercentage { value: 95.0 }.error_code(),
            "INVALID_CONTEXT_PERCENTAGE"
        );
        assert_eq!(
            SplitError::invalid_argument("test").error_code(),
            "INVALID_ARGUMENT"
        );
    }

    #[test]
    fn test_config_error_classification() {
        assert!(SplitError::EmptySeparators.is_config_error());
        assert!(SplitError::config("bad toml").is_config_error());
        assert!(!SplitError::InvalidContext {
            key: "chunk-context".to_string()
        }
        .is_config_error());
    }
}
