//! Legal Desk case model
//!
//! The part of the desk that owns case files:
//! - Case records and their audit trail
//! - The status lifecycle and its validation hook
//! - The case store (creation, status changes)
//! - Role-based visibility and search
//! - Dashboard statistics
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use chrono::NaiveDate;
//! use ldesk_case::{CaseStatus, CaseStore, ManualClock, NewCase, Role};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let mut store = CaseStore::seeded(Arc::new(ManualClock::new(today)));
//!
//! let id = store
//!     .create_case(NewCase::new("X", "Y", today), Role::Student)
//!     .id()
//!     .clone();
//! assert_eq!(id.as_str(), "CASE-2024-004");
//!
//! let case = store.update_status(&id, CaseStatus::Resolved).unwrap();
//! assert_eq!(case.completion_date(), Some(today));
//! ```

#![warn(unreachable_pub)]

pub mod clock;
pub mod error;
pub mod lifecycle;
pub mod seed;
pub mod stats;
pub mod store;
pub mod types;
pub mod visibility;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::CaseError;
pub use lifecycle::{
    allowed_transitions, CompletionStamp, Transition, TransitionPolicy, Unrestricted,
};
pub use stats::{CategoryCount, DashboardStats, StatusCount};
pub use store::{CaseStore, StoreOptions};
pub use types::{CaseCategory, CaseId, CaseLogEntry, CaseRecord, CaseStatus, NewCase, Role};
pub use visibility::{is_visible_to, search, visible_cases};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with case files
    pub use crate::{
        CaseCategory, CaseError, CaseId, CaseRecord, CaseStatus, CaseStore, Clock, NewCase, Role,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
