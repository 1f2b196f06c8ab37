//! Error types for text generation
//!
//! These never leave the crate through [`crate::Annotator`]; they exist so
//! backends can say what went wrong and the adapter can log it.

/// Text generation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// No API key configured
    #[error("missing API credential")]
    MissingCredential,

    /// Transport failed before a response arrived
    #[error("network error: {0}")]
    Network(String),

    /// Service answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Http {
        /// Status code
        status: u16,
        /// Response body, as returned
        body: String,
    },

    /// Quota or rate limit hit
    #[error("rate limited")]
    RateLimited,

    /// Response body could not be decoded
    #[error("parse error: {0}")]
    Parse(String),

    /// Backend refused on purpose (test and offline backends)
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

impl GenerateError {
    /// Check if failure was caused by configuration rather than the service
    #[inline]
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}
