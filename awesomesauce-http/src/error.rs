//! Error types for the HTTP transport layer.

/// Errors that can occur while setting up the HTTP transport.
#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    /// The underlying reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// A configured header name or value is invalid.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name as given.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}
