//! Legal Desk AI annotations
//!
//! Wraps an external text-generation service behind an adapter that never
//! fails: every problem turns into a fixed Arabic message.
//!
//! - [`TextGenerator`]: the backend seam (Gemini over HTTP, static text)
//! - [`Annotator`]: case summaries and drafted legal opinions
//! - [`BusySet`]: per-case in-flight flags so an action is not re-triggered
//!
//! # Example
//!
//! ```rust,ignore
//! use ldesk_annotate::{Annotator, GeminiBackend};
//! use std::sync::Arc;
//!
//! # async fn example(case: &ldesk_case::CaseRecord) -> Result<(), Box<dyn std::error::Error>> {
//! let backend = GeminiBackend::new(std::env::var("API_KEY")?)?;
//! let annotator = Annotator::new(Arc::new(backend));
//!
//! let summary = annotator.summarize(case).await;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

#![warn(unreachable_pub)]

pub mod annotator;
pub mod backend;
pub mod busy;
pub mod error;
pub mod prompt;

pub use annotator::{AnnotationKind, AnnotationTask, Annotator, FallbackMessages, DEFAULT_STANCE};
pub use backend::{GeminiBackend, StaticBackend, TextGenerator};
pub use busy::{BusyGuard, BusySet};
pub use error::GenerateError;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
