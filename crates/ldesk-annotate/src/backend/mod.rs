//! Text generation backends
//!
//! - Gemini `generateContent` over HTTP
//! - Static text, for offline use and tests

pub mod fixed;
pub mod gemini;
pub mod traits;

pub use fixed::StaticBackend;
pub use gemini::GeminiBackend;
pub use traits::TextGenerator;

#[cfg(test)]
pub use traits::MockTextGenerator;
