//! ctxsplit-core - Core types and traits for context-aware splitting
//!
//! This crate provides the document model, configuration, error handling
//! and splitter traits shared by the chunking crate.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::*;
pub use error::{Result, SplitError};
pub use traits::*;
pub use types::*;
