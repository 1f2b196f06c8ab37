//! Error types for the case model
//!
//! Covers:
//! - Lookups against unknown case identifiers
//! - Parsing of identifiers, statuses, categories and roles
//! - Transitions rejected by a configured policy

use crate::types::{CaseId, CaseStatus};

/// Case model error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CaseError {
    /// No case with this identifier exists in the store
    #[error("case not found: {0}")]
    NotFound(CaseId),

    /// Identifier does not follow `CASE-<year>-<sequence>`
    #[error("invalid case identifier: {0}")]
    InvalidId(String),

    /// Status code or label not recognised
    #[error("unknown status: {0}")]
    UnknownStatus(String),

    /// Category code or label not recognised
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// Role code or label not recognised
    #[error("unknown role: {0}")]
    UnknownRole(String),

    /// A transition policy refused the status change
    #[error("transition rejected: {from:?} -> {to:?}")]
    TransitionRejected {
        /// Current status
        from: CaseStatus,
        /// Requested status
        to: CaseStatus,
    },
}

impl CaseError {
    /// Check if error is a failed lookup by identifier
    #[inline]
    #[must_use]
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Check if error came from parsing user input
    #[inline]
    #[must_use]
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Self::InvalidId(_)
                | Self::UnknownStatus(_)
                | Self::UnknownCategory(_)
                | Self::UnknownRole(_)
        )
    }
}
