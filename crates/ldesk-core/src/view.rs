//! View projections of the desk state
//!
//! Pure data for a front end to render. Views borrow from the controller and
//! are rebuilt on every read, so they never hold a stale copy of a case.

use crate::nav::Page;
use chrono::NaiveDate;
use ldesk_case::{allowed_transitions, CaseCategory, CaseRecord, CaseStatus, DashboardStats, Role};

/// What the desk shows right now
#[derive(Debug, Clone, PartialEq)]
pub enum DeskView<'a> {
    /// Case list for the active role
    List(ListView<'a>),
    /// One case in detail
    Detail(DetailView<'a>),
    /// New-case form
    NewCaseForm(FormView),
}

impl DeskView<'_> {
    /// Short name of the view kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            DeskView::List(_) => "list",
            DeskView::Detail(_) => "detail",
            DeskView::NewCaseForm(_) => "new-case-form",
        }
    }
}

/// Case list
#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    /// Active role
    pub role: Role,
    /// Page being rendered
    pub page: Page,
    /// Cases visible to the role, newest first
    pub cases: Vec<&'a CaseRecord>,
    /// Statistics over every case; hidden from students
    pub stats: Option<DashboardStats>,
    /// Whether status and category distributions are shown
    pub show_charts: bool,
}

/// Actions offered on the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailCapabilities {
    /// Status selector shown
    pub change_status: bool,
    /// Statuses the selector offers
    pub statuses: Vec<CaseStatus>,
    /// Summary and draft actions shown
    pub annotate: bool,
}

impl DetailCapabilities {
    /// Capabilities of `role` on a case in `status`
    #[must_use]
    pub fn for_role(role: Role, status: CaseStatus) -> Self {
        let acts = role.can_act_on_cases();
        Self {
            change_status: acts,
            statuses: if acts {
                allowed_transitions(status)
            } else {
                Vec::new()
            },
            annotate: acts,
        }
    }
}

/// One case with its transient AI output
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView<'a> {
    /// The case, as currently stored
    pub case: &'a CaseRecord,
    /// Offered actions
    pub capabilities: DetailCapabilities,
    /// Summary shown in the detail panel
    pub summary: Option<&'a str>,
    /// Drafted opinion shown in the detail panel
    pub draft: Option<&'a str>,
    /// Summary request running
    pub summary_busy: bool,
    /// Draft request running
    pub draft_busy: bool,
}

/// New-case form defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Role submitting
    pub role: Role,
    /// Selectable categories
    pub categories: [CaseCategory; 5],
    /// Preselected category
    pub default_category: CaseCategory,
    /// Prefilled referral date
    pub default_referral_date: NaiveDate,
}

impl FormView {
    /// Form for `role` on `today`
    #[must_use]
    pub fn new(role: Role, today: NaiveDate) -> Self {
        Self {
            role,
            categories: CaseCategory::ALL,
            default_category: CaseCategory::default(),
            default_referral_date: today,
        }
    }
}
