//! Dashboard statistics
//!
//! Counts shown to counsel and the president. Always computed over the full
//! collection, not the role-filtered view.

use crate::types::{CaseCategory, CaseRecord, CaseStatus};
use serde::Serialize;

/// Title keyword that marks a case as a grievance on the dashboard
pub const GRIEVANCE_KEYWORD: &str = "تظلم";

/// Statuses plotted in the status distribution
pub const CHARTED_STATUSES: [CaseStatus; 3] = [
    CaseStatus::New,
    CaseStatus::UnderReview,
    CaseStatus::Resolved,
];

/// Number of cases in one status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCount {
    /// Status
    pub status: CaseStatus,
    /// Case count
    pub count: usize,
}

/// Number of cases in one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    /// Category
    pub category: CaseCategory,
    /// Case count
    pub count: usize,
}

/// Dashboard figures
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DashboardStats {
    /// All cases
    pub total: usize,
    /// Cases under review
    pub under_review: usize,
    /// Resolved cases
    pub resolved: usize,
    /// Cases not yet resolved
    pub pending: usize,
    /// Cases whose title mentions a grievance
    pub grievances: usize,
    /// Distribution over [`CHARTED_STATUSES`]
    pub by_status: Vec<StatusCount>,
    /// Distribution over categories, in order of first appearance
    pub by_category: Vec<CategoryCount>,
}

impl DashboardStats {
    /// Compute figures for `cases`
    #[must_use]
    pub fn compute(cases: &[CaseRecord]) -> Self {
        let count_status = |status: CaseStatus| cases.iter().filter(|c| c.status() == status).count();

        let by_status = CHARTED_STATUSES
            .into_iter()
            .map(|status| StatusCount {
                status,
                count: count_status(status),
            })
            .collect();

        let mut by_category: Vec<CategoryCount> = Vec::new();
        for case in cases {
            match by_category.iter_mut().find(|c| c.category == case.category()) {
                Some(entry) => entry.count += 1,
                None => by_category.push(CategoryCount {
                    category: case.category(),
                    count: 1,
                }),
            }
        }

        let resolved = count_status(CaseStatus::Resolved);
        Self {
            total: cases.len(),
            under_review: count_status(CaseStatus::UnderReview),
            resolved,
            pending: cases.len() - resolved,
            grievances: cases
                .iter()
                .filter(|c| c.title().contains(GRIEVANCE_KEYWORD))
                .count(),
            by_status,
            by_category,
        }
    }
}
