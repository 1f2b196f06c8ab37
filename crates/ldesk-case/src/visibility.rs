//! Role-based case visibility
//!
//! - President: every case
//! - Counsel: every case (no per-counsel assignment filtering yet)
//! - Student: cases whose plaintiff display string carries the student marker
//!
//! The student rule matches on a display string, not on a user identity. A
//! deployment with real accounts has to filter on an authenticated user id.

use crate::types::{CaseRecord, Role};

/// Marker carried in the plaintiff field of student-filed cases
pub const STUDENT_MARKER: &str = "طالب";

/// Check if `role` may see `case` in list views
#[inline]
#[must_use]
pub fn is_visible_to(case: &CaseRecord, role: Role) -> bool {
    match role {
        Role::President | Role::Counsel => true,
        Role::Student => case.plaintiff().contains(STUDENT_MARKER),
    }
}

/// Cases visible to `role`, in input order
#[must_use]
pub fn visible_cases(all: &[CaseRecord], role: Role) -> Vec<&CaseRecord> {
    let visible: Vec<&CaseRecord> = all.iter().filter(|c| is_visible_to(c, role)).collect();
    tracing::debug!(
        role = role.code(),
        total = all.len(),
        visible = visible.len(),
        "visibility projection"
    );
    visible
}

/// Cases whose identifier or title contains `query`
///
/// Matching ignores case and surrounding whitespace; an empty query
/// keeps everything.
#[must_use]
pub fn search<'a, I>(cases: I, query: &str) -> Vec<&'a CaseRecord>
where
    I: IntoIterator<Item = &'a CaseRecord>,
{
    let needle = query.trim().to_lowercase();
    cases
        .into_iter()
        .filter(|c| {
            needle.is_empty()
                || c.id().as_str().to_lowercase().contains(&needle)
                || c.title().to_lowercase().contains(&needle)
        })
        .collect()
}
