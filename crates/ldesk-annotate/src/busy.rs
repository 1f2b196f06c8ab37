//! In-flight annotation tracking
//!
//! One request per (case, kind) at a time. A `BusyGuard` holds the slot and
//! frees it on drop, so an abandoned request never leaves a case stuck busy.

use crate::annotator::AnnotationKind;
use ldesk_case::CaseId;
use parking_lot::Mutex;
use std::collections::HashSet;
use std::sync::Arc;

type Slot = (CaseId, AnnotationKind);

/// Set of annotation requests currently running
#[derive(Debug, Clone, Default)]
pub struct BusySet {
    inner: Arc<Mutex<HashSet<Slot>>>,
}

impl BusySet {
    /// Create empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the slot for `id` and `kind`
    ///
    /// Returns `None` if a request for the same slot is still running.
    #[must_use]
    pub fn try_acquire(&self, id: &CaseId, kind: AnnotationKind) -> Option<BusyGuard> {
        let slot = (id.clone(), kind);
        if !self.inner.lock().insert(slot.clone()) {
            return None;
        }
        Some(BusyGuard {
            set: Arc::clone(&self.inner),
            slot,
        })
    }

    /// Check if a request for `id` and `kind` is running
    #[must_use]
    pub fn is_busy(&self, id: &CaseId, kind: AnnotationKind) -> bool {
        self.inner.lock().contains(&(id.clone(), kind))
    }

    /// Number of running requests
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if nothing is running
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

/// Held while an annotation request runs
#[derive(Debug)]
pub struct BusyGuard {
    set: Arc<Mutex<HashSet<Slot>>>,
    slot: Slot,
}

impl BusyGuard {
    /// Case the request is for
    #[must_use]
    pub fn case_id(&self) -> &CaseId {
        &self.slot.0
    }

    /// Kind of request
    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        self.slot.1
    }
}

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.set.lock().remove(&self.slot);
    }
}
