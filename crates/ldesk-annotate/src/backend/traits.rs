//! The backend seam

use crate::error::GenerateError;
use async_trait::async_trait;

/// One prompt in, one text out
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for `prompt`
    ///
    /// An empty string is a valid answer; the caller decides what to show.
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}
