//! Case status lifecycle
//!
//! Statuses: `New`, `UnderReview`, `PendingDocs`, `Resolved`.
//! Any status may be assigned from any other; the status selector offers all
//! four values regardless of the current one. A [`TransitionPolicy`] is the
//! hook for tightening this later. The default [`Unrestricted`] accepts
//! every pair.

use crate::error::CaseError;
use crate::types::CaseStatus;
use chrono::NaiveDate;
use std::fmt::Debug;

/// Validation hook consulted before every status change
pub trait TransitionPolicy: Send + Sync + Debug {
    /// Accept or reject `from -> to`
    ///
    /// # Errors
    /// - `CaseError::TransitionRejected` when the pair is not allowed
    fn check(&self, from: CaseStatus, to: CaseStatus) -> Result<(), CaseError>;
}

/// Accepts any transition, including to the same status
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl TransitionPolicy for Unrestricted {
    fn check(&self, _from: CaseStatus, _to: CaseStatus) -> Result<(), CaseError> {
        Ok(())
    }
}

/// Statuses reachable from `from` under the default policy
#[must_use]
pub fn allowed_transitions(_from: CaseStatus) -> Vec<CaseStatus> {
    CaseStatus::ALL.to_vec()
}

/// What a transition does to the completion date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStamp {
    /// Set completion date to this day
    Stamp(NaiveDate),
    /// Leave completion date as it is
    Keep,
}

/// A single status change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Status before the change
    pub from: CaseStatus,
    /// Status after the change
    pub to: CaseStatus,
}

impl Transition {
    /// Create transition
    #[inline]
    #[must_use]
    pub fn new(from: CaseStatus, to: CaseStatus) -> Self {
        Self { from, to }
    }

    /// Whether this transition moves the case into `Resolved`
    #[inline]
    #[must_use]
    pub fn enters_resolved(&self) -> bool {
        self.to.is_resolved() && !self.from.is_resolved()
    }

    /// Completion date effect.
    ///
    /// Only entry into `Resolved` stamps. Re-assigning `Resolved` and
    /// leaving `Resolved` both keep the existing date.
    #[must_use]
    pub fn completion_effect(&self, today: NaiveDate) -> CompletionStamp {
        if self.enters_resolved() {
            CompletionStamp::Stamp(today)
        } else {
            CompletionStamp::Keep
        }
    }

    /// Run `policy` over this transition
    ///
    /// # Errors
    /// - whatever the policy rejects with
    #[inline]
    pub fn validate(&self, policy: &dyn TransitionPolicy) -> Result<(), CaseError> {
        policy.check(self.from, self.to)
    }
}
