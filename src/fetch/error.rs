//! Shared error type for chapter fetching: translation validation, HTTP, and passage parsing.

use thiserror::Error;

/// Fetch error for translation validation, HTTP, and passage parsing cases.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Translation '{translation}' is not available on Bible Gateway.")]
    UnsupportedTranslation { translation: String },

    #[error("Unknown book '{name}'. Use a canonical Old Testament book name, e.g. 'Genesis' or '1 Samuel'.")]
    UnknownBook { name: String },

    #[error("Network error: could not reach {url}: {source}")]
    Network { url: String, source: reqwest::Error },

    #[error("HTTP {status} when fetching: {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Failed to read response body: {source}")]
    BodyRead { source: reqwest::Error },

    #[error("Could not parse passage {reference}: {reason}")]
    ParsePassage { reference: String, reason: String },

    #[error("{reference} returned no verse text (passage missing or page layout changed).")]
    EmptyChapter { reference: String },

    #[error("No chapters could be retrieved.")]
    NoChaptersRetrieved,
}
