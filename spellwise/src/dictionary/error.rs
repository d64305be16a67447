//! Word-list source errors.
use std::path::PathBuf;

/// Errors that can occur when fetching the baseline word list.
///
/// None of these reach the caller of the speller: the provider falls back to
/// a built-in word set instead.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Transport failure, timeout or undecodable body
    #[error("Failed to fetch word list")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Word list request returned status {0}")]
    Status(reqwest::StatusCode),

    /// The server answered with something other than text
    #[error("Word list has non-text content type '{0}'")]
    NotText(String),

    /// The word list file could not be read
    #[error("Failed to read word list '{0}'")]
    Io(PathBuf, #[source] std::io::Error),

    /// The source produced no words at all
    #[error("Word list is empty")]
    Empty,
}
