//! Errors raised while loading lexicon data.
use smol_str::SmolStr;

/// Errors that can occur when parsing or validating the data tables.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TableError {
    /// The resource is not valid JSON of the expected shape
    #[error("Failed to parse {0}")]
    Json(&'static str, #[source] serde_json::Error),

    /// An entry is empty after trimming
    #[error("Empty entry in {0}")]
    EmptyEntry(&'static str),

    /// The same misspelling is mapped to two different correct words
    #[error("Misspelling '{misspelling}' maps to both '{first}' and '{second}'")]
    ConflictingMisspelling {
        /// the misspelled form
        misspelling: SmolStr,
        /// the correct word seen first
        first: SmolStr,
        /// the correct word seen later
        second: SmolStr,
    },

    /// A spelling belongs to two different dialect sets
    #[error("Spelling '{0}' appears in more than one dialect set")]
    ConflictingDialect(SmolStr),
}
