//! Static text backend.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU32, Ordering};

use super::traits::TextGenerator;
use crate::error::GenerateError;

/// Backend answering every prompt with the same text
///
/// Used for offline runs and tests; records the prompts it receives.
#[derive(Debug)]
pub struct StaticBackend {
    response: Result<String, GenerateError>,
    call_count: AtomicU32,
    last_prompt: Mutex<Option<String>>,
}

impl StaticBackend {
    /// Create backend answering with `text`
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            response: Ok(text.into()),
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Create backend failing every call with `error`
    pub fn failing(error: GenerateError) -> Self {
        Self {
            response: Err(error),
            call_count: AtomicU32::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    /// Number of prompts received
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Most recent prompt
    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().clone()
    }
}

#[async_trait]
impl TextGenerator for StaticBackend {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock() = Some(prompt.to_string());
        self.response.clone()
    }
}
