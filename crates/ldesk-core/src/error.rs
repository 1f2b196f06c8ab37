//! Error types for the desk controller
//!
//! Case-level failures pass through unchanged; the rest cover what only
//! the controller can get wrong:
//! - acting without a selected case
//! - re-triggering an AI action still in flight
//! - incomplete new-case forms
//! - unreadable configuration

use ldesk_annotate::{AnnotationKind, GenerateError};
use ldesk_case::{CaseError, CaseId, Role};

/// Main desk error type
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    /// Case store or parsing failure
    #[error(transparent)]
    Case(#[from] CaseError),

    /// Action needs a selected case
    #[error("no case selected")]
    NoSelection,

    /// Same AI action already running for the case
    #[error("{kind} already in progress for {case_id}")]
    AnnotationInFlight {
        /// Case the request is for
        case_id: CaseId,
        /// Requested annotation
        kind: AnnotationKind,
    },

    /// Action hidden from the active role
    #[error("action not available to {role:?}")]
    NotAvailable {
        /// Active role
        role: Role,
    },

    /// Detail view holds no summary to save
    #[error("no summary to save for {0}")]
    NoSummary(CaseId),

    /// New-case form is incomplete
    #[error("invalid form: {field} is required")]
    InvalidForm {
        /// Name of the missing field
        field: &'static str,
    },

    /// Unknown page code
    #[error("unknown page: {0}")]
    UnknownPage(String),

    /// Unknown session command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Configuration could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Annotation backend could not be built
    #[error("annotation backend: {0}")]
    Backend(#[from] GenerateError),
}

impl DeskError {
    /// Check if the error means a case id did not resolve
    #[inline]
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, DeskError::Case(e) if e.is_lookup_failure())
    }

    /// Check if the user can fix the error by re-entering input
    #[must_use]
    pub fn is_user_input(&self) -> bool {
        match self {
            DeskError::Case(e) => e.is_parse_failure() || e.is_lookup_failure(),
            DeskError::InvalidForm { .. } | DeskError::UnknownPage(_) | DeskError::UnknownCommand(_) => true,
            _ => false,
        }
    }
}
