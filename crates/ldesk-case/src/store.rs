//! Case store
//!
//! Owns the canonical, newest-first collection of case records. All
//! mutation goes through here:
//! - `create_case` assigns a fresh identifier and the creation log entry
//! - `update_status` runs the lifecycle and stamps completion dates
//! - `attach_summary` persists an AI summary when explicitly asked

use crate::clock::Clock;
use crate::error::CaseError;
use crate::lifecycle::{CompletionStamp, Transition, TransitionPolicy, Unrestricted};
use crate::seed;
use crate::types::{CaseId, CaseLogEntry, CaseRecord, CaseStatus, NewCase, Role};
use chrono::Datelike;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Log action written when a case is created
pub const CREATION_ACTION: &str = "إنشاء الطلب";

/// Log action prefix written on status changes (when enabled)
pub const STATUS_CHANGE_ACTION: &str = "تغيير الحالة إلى";

/// Log user for status changes with no known actor
pub const SYSTEM_ACTOR: &str = "النظام";

/// Store behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreOptions {
    /// Append an audit entry on every status change. Off by default: only
    /// creation is logged.
    #[serde(default)]
    pub record_status_changes: bool,
}

impl StoreOptions {
    /// With status change auditing
    #[inline]
    #[must_use]
    pub fn with_status_audit(mut self, enabled: bool) -> Self {
        self.record_status_changes = enabled;
        self
    }
}

/// In-memory case collection
#[derive(Debug)]
pub struct CaseStore {
    /// Newest first
    cases: Vec<CaseRecord>,
    /// Last sequence handed out; never decreases
    last_sequence: u32,
    clock: Arc<dyn Clock>,
    policy: Box<dyn TransitionPolicy>,
    options: StoreOptions,
}

impl CaseStore {
    /// Create empty store
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::from_records(Vec::new(), clock)
    }

    /// Create store holding the three example cases
    #[must_use]
    pub fn seeded(clock: Arc<dyn Clock>) -> Self {
        Self::from_records(seed::example_cases(), clock)
    }

    pub(crate) fn from_records(cases: Vec<CaseRecord>, clock: Arc<dyn Clock>) -> Self {
        let last_sequence = cases
            .iter()
            .filter_map(|c| c.id.sequence())
            .max()
            .unwrap_or(0);
        Self {
            cases,
            last_sequence,
            clock,
            policy: Box::new(Unrestricted),
            options: StoreOptions::default(),
        }
    }

    /// With transition policy
    #[inline]
    #[must_use]
    pub fn with_policy(mut self, policy: impl TransitionPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// With options
    #[inline]
    #[must_use]
    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    /// Create a case on behalf of `acting`
    ///
    /// The record starts `New` with one creation log entry dated today and
    /// is placed at the front of the collection.
    pub fn create_case(&mut self, input: NewCase, acting: Role) -> &CaseRecord {
        let today = self.clock.today();
        let id = self.next_id(today.year());

        let record = CaseRecord {
            id,
            title: input.title,
            description: input.description,
            category: input.category,
            status: CaseStatus::New,
            plaintiff: acting.plaintiff_identity().to_string(),
            assigned_counsel: None,
            referral_date: input.referral_date,
            receipt_date: None,
            completion_date: None,
            ai_summary: None,
            logs: vec![CaseLogEntry::new(today, CREATION_ACTION, acting.label())],
        };

        tracing::info!(case_id = %record.id, role = acting.code(), "case created");
        self.cases.insert(0, record);
        &self.cases[0]
    }

    /// Set status of case `id`
    ///
    /// Entering `Resolved` stamps today's completion date. No audit entry
    /// is written unless `StoreOptions::record_status_changes` is set.
    ///
    /// # Errors
    /// - `CaseError::NotFound` if no such case; the store is untouched
    /// - `CaseError::TransitionRejected` if the policy refuses
    pub fn update_status(
        &mut self,
        id: &CaseId,
        status: CaseStatus,
    ) -> Result<&CaseRecord, CaseError> {
        self.apply_status(id, status, None)
    }

    /// Set status of case `id`, naming the acting role in the audit entry
    ///
    /// # Errors
    /// Same as [`CaseStore::update_status`]
    pub fn update_status_as(
        &mut self,
        id: &CaseId,
        status: CaseStatus,
        acting: Role,
    ) -> Result<&CaseRecord, CaseError> {
        self.apply_status(id, status, Some(acting))
    }

    fn apply_status(
        &mut self,
        id: &CaseId,
        status: CaseStatus,
        acting: Option<Role>,
    ) -> Result<&CaseRecord, CaseError> {
        let today = self.clock.today();
        let audit = self.options.record_status_changes;
        let idx = self.index_of(id)?;

        let transition = Transition::new(self.cases[idx].status, status);
        transition.validate(self.policy.as_ref())?;

        let record = &mut self.cases[idx];
        record.status = status;
        if let CompletionStamp::Stamp(date) = transition.completion_effect(today) {
            record.completion_date = Some(date);
        }
        if audit {
            let user = acting.map_or(SYSTEM_ACTOR, Role::label);
            record.logs.push(CaseLogEntry::new(
                today,
                format!("{STATUS_CHANGE_ACTION} {}", status.label()),
                user,
            ));
        }

        tracing::info!(
            case_id = %id,
            from = transition.from.code(),
            to = transition.to.code(),
            "case status updated"
        );
        Ok(&self.cases[idx])
    }

    /// Persist an AI summary into the case record
    ///
    /// # Errors
    /// - `CaseError::NotFound` if no such case
    pub fn attach_summary(
        &mut self,
        id: &CaseId,
        summary: impl Into<String>,
    ) -> Result<&CaseRecord, CaseError> {
        let idx = self.index_of(id)?;
        self.cases[idx].ai_summary = Some(summary.into());
        tracing::debug!(case_id = %id, "summary attached");
        Ok(&self.cases[idx])
    }

    /// Get case by identifier
    #[must_use]
    pub fn get(&self, id: &CaseId) -> Option<&CaseRecord> {
        self.cases.iter().find(|c| &c.id == id)
    }

    /// Check if identifier is taken
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &CaseId) -> bool {
        self.get(id).is_some()
    }

    /// All cases, newest first
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[CaseRecord] {
        &self.cases
    }

    /// Iterate cases, newest first
    pub fn iter(&self) -> impl Iterator<Item = &CaseRecord> {
        self.cases.iter()
    }

    /// Number of cases
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Check if store has no cases
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Current date according to the store's clock
    #[inline]
    #[must_use]
    pub fn today(&self) -> chrono::NaiveDate {
        self.clock.today()
    }

    fn index_of(&self, id: &CaseId) -> Result<usize, CaseError> {
        self.cases
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CaseError::NotFound(id.clone()))
    }

    /// Next free identifier for `year`. The sequence only moves forward, so
    /// an identifier is never handed out twice.
    fn next_id(&mut self, year: i32) -> CaseId {
        loop {
            self.last_sequence += 1;
            let id = CaseId::new(year, self.last_sequence);
            if !self.contains(&id) {
                return id;
            }
        }
    }
}
