//! Case annotation adapter
//!
//! Turns a case into a prompt, calls the generator and always hands back
//! text. Missing credentials short-circuit before any call; failures and
//! empty answers become fixed Arabic messages. Nothing here touches the
//! case store.

use crate::backend::TextGenerator;
use crate::prompt::{draft_prompt, summary_prompt};
use ldesk_case::CaseRecord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Stance used when a draft is requested without one
pub const DEFAULT_STANCE: &str = "قبول الطلب شكلاً وموضوعاً";

/// Which annotation is requested
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Executive summary
    Summary,
    /// Drafted legal opinion
    Draft,
}

impl AnnotationKind {
    /// Messages shown instead of generated text
    #[must_use]
    pub fn fallbacks(self) -> FallbackMessages {
        match self {
            AnnotationKind::Summary => FallbackMessages {
                missing_credential: "مفتاح API غير متوفر. يرجى ضبط الإعدادات.",
                failure: "حدث خطأ أثناء الاتصال بالمساعد الذكي.",
                empty: "لم يتم إنشاء ملخص.",
            },
            AnnotationKind::Draft => FallbackMessages {
                missing_credential: "مفتاح API غير متوفر.",
                failure: "حدث خطأ أثناء الإنشاء.",
                empty: "لم يتم إنشاء المسودة.",
            },
        }
    }
}

impl fmt::Display for AnnotationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationKind::Summary => f.write_str("summary"),
            AnnotationKind::Draft => f.write_str("draft"),
        }
    }
}

/// User-visible replacement texts for one annotation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackMessages {
    /// No credential configured
    pub missing_credential: &'static str,
    /// Service call failed
    pub failure: &'static str,
    /// Service answered with nothing
    pub empty: &'static str,
}

/// Annotation request with its parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationTask {
    /// Summarize the case
    Summary,
    /// Draft an opinion arguing `stance`
    Draft {
        /// Requested point of view
        stance: String,
    },
}

impl AnnotationTask {
    /// Draft with the default stance
    #[inline]
    #[must_use]
    pub fn default_draft() -> Self {
        Self::Draft {
            stance: DEFAULT_STANCE.to_string(),
        }
    }

    /// Kind of annotation
    #[inline]
    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Self::Summary => AnnotationKind::Summary,
            Self::Draft { .. } => AnnotationKind::Draft,
        }
    }
}

/// Summaries and drafted opinions for cases
#[derive(Clone, Default)]
pub struct Annotator {
    generator: Option<Arc<dyn TextGenerator>>,
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl Annotator {
    /// Create annotator backed by `generator`
    #[inline]
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Create annotator with no credential; every call returns the
    /// missing-credential message
    #[inline]
    #[must_use]
    pub fn unconfigured() -> Self {
        Self { generator: None }
    }

    /// Check if a generator is available
    #[inline]
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.generator.is_some()
    }

    /// Executive summary of `case`
    pub async fn summarize(&self, case: &CaseRecord) -> String {
        self.run(case, &AnnotationTask::Summary).await
    }

    /// Drafted legal opinion on `case` arguing `stance`
    pub async fn draft_opinion(&self, case: &CaseRecord, stance: &str) -> String {
        self.run(
            case,
            &AnnotationTask::Draft {
                stance: stance.to_string(),
            },
        )
        .await
    }

    /// Run `task` against `case`
    pub async fn run(&self, case: &CaseRecord, task: &AnnotationTask) -> String {
        let kind = task.kind();
        let messages = kind.fallbacks();

        let Some(generator) = &self.generator else {
            tracing::debug!(case_id = %case.id(), %kind, "no credential configured");
            return messages.missing_credential.to_string();
        };

        let prompt = match task {
            AnnotationTask::Summary => summary_prompt(case),
            AnnotationTask::Draft { stance } => draft_prompt(case, stance),
        };

        match generator.generate(&prompt).await {
            Ok(text) if text.is_empty() => {
                tracing::info!(case_id = %case.id(), %kind, "generator returned no text");
                messages.empty.to_string()
            }
            Ok(text) => {
                tracing::info!(case_id = %case.id(), %kind, chars = text.chars().count(), "annotation generated");
                text
            }
            Err(e) => {
                tracing::warn!(case_id = %case.id(), %kind, error = %e, "annotation failed");
                messages.failure.to_string()
            }
        }
    }
}
