//! Error types for spelling resolution.

use crate::lexicon::error::TableError;

/// Errors that can occur when building a speller or resolving a word.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SpellerError {
    /// The input is empty after trimming whitespace
    #[error("No word provided")]
    EmptyInput,

    /// The lexicon data could not be loaded
    #[error("Failed to load lexicon")]
    Lexicon(#[from] TableError),
}
