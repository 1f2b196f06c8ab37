//! Core types for case files
//!
//! Defines:
//! - Case identifiers
//! - Roles, statuses and categories with their Arabic labels
//! - Case records and audit log entries
//! - Input for new cases

use crate::error::CaseError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Plaintiff identity recorded when a student opens a case
pub const STUDENT_PLAINTIFF: &str = "أحمد محمد (طالب)";

/// Plaintiff identity recorded when any other role opens a case
pub const STAFF_PLAINTIFF: &str = "عضو هيئة تدريس";

/// Unique case identifier, formatted `CASE-<year>-<sequence>`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CaseId(String);

impl CaseId {
    /// Build identifier from year and sequence (sequence padded to 3 digits)
    #[inline]
    #[must_use]
    pub fn new(year: i32, sequence: u32) -> Self {
        Self(format!("CASE-{year}-{sequence:03}"))
    }

    /// Parse identifier typed by a user
    ///
    /// The `CASE` prefix is case-insensitive; year must be four digits and
    /// the sequence non-empty digits. The result is in canonical form, so
    /// `case-2024-1` and `CASE-2024-0001` both become `CASE-2024-001`.
    ///
    /// # Errors
    /// - `CaseError::InvalidId` if the text does not follow the format
    pub fn parse(text: &str) -> Result<Self, CaseError> {
        let trimmed = text.trim();
        let invalid = || CaseError::InvalidId(trimmed.to_string());
        let mut parts = trimmed.splitn(3, '-');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(prefix), Some(year), Some(sequence))
                if prefix.eq_ignore_ascii_case("CASE")
                    && year.len() == 4
                    && all_digits(year)
                    && all_digits(sequence) =>
            {
                let year = year.parse().map_err(|_| invalid())?;
                let sequence = sequence.parse().map_err(|_| invalid())?;
                Ok(Self::new(year, sequence))
            }
            _ => Err(invalid()),
        }
    }

    /// Identifier text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Year component
    #[must_use]
    pub fn year(&self) -> Option<i32> {
        self.0.split('-').nth(1).and_then(|y| y.parse().ok())
    }

    /// Sequence component
    #[must_use]
    pub fn sequence(&self) -> Option<u32> {
        self.0.split('-').nth(2).and_then(|s| s.parse().ok())
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CaseId {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Normalise a code typed by a user: `Under-Review` -> `under_review`
fn normalise_code(input: &str) -> String {
    input.trim().to_ascii_lowercase().replace(['-', ' '], "_")
}

/// Active persona. Drives visibility only, never a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Student filing grievances
    Student,
    /// Legal office member reviewing and drafting
    Counsel,
    /// University president overseeing all cases
    #[default]
    President,
}

impl Role {
    /// All roles in switcher order
    pub const ALL: [Role; 3] = [Role::Student, Role::Counsel, Role::President];

    /// Arabic display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Role::Student => "طالب",
            Role::Counsel => "عضو قانوني",
            Role::President => "رئيس الجامعة",
        }
    }

    /// Stable machine code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Counsel => "counsel",
            Role::President => "president",
        }
    }

    /// Plaintiff identity recorded on cases this role creates
    #[must_use]
    pub fn plaintiff_identity(self) -> &'static str {
        match self {
            Role::Student => STUDENT_PLAINTIFF,
            Role::Counsel | Role::President => STAFF_PLAINTIFF,
        }
    }

    /// Whether the role sees case actions (status selector, AI tools, statistics)
    #[inline]
    #[must_use]
    pub fn can_act_on_cases(self) -> bool {
        !matches!(self, Role::Student)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Role {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalise_code(s);
        if code == "lawyer" {
            return Ok(Role::Counsel);
        }
        Role::ALL
            .into_iter()
            .find(|r| r.code() == code || r.label() == s.trim())
            .ok_or_else(|| CaseError::UnknownRole(s.trim().to_string()))
    }
}

/// Case status. Any status may be assigned from any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Freshly submitted
    #[default]
    New,
    /// Opinion being studied
    UnderReview,
    /// Waiting on documents from the requester
    PendingDocs,
    /// Disposed of; entering this status stamps the completion date
    Resolved,
}

impl CaseStatus {
    /// All statuses in selector order
    pub const ALL: [CaseStatus; 4] = [
        CaseStatus::New,
        CaseStatus::UnderReview,
        CaseStatus::PendingDocs,
        CaseStatus::Resolved,
    ];

    /// Arabic display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CaseStatus::New => "جديد",
            CaseStatus::UnderReview => "قيد الدراسة",
            CaseStatus::PendingDocs => "بانتظار مستندات",
            CaseStatus::Resolved => "تم الفصل",
        }
    }

    /// Stable machine code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            CaseStatus::New => "new",
            CaseStatus::UnderReview => "under_review",
            CaseStatus::PendingDocs => "pending_docs",
            CaseStatus::Resolved => "resolved",
        }
    }

    /// Check if the case has been disposed of
    #[inline]
    #[must_use]
    pub fn is_resolved(self) -> bool {
        matches!(self, CaseStatus::Resolved)
    }
}

impl fmt::Display for CaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseStatus {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalise_code(s);
        CaseStatus::ALL
            .into_iter()
            .find(|st| st.code() == code || st.label() == s.trim())
            .ok_or_else(|| CaseError::UnknownStatus(s.trim().to_string()))
    }
}

/// Case category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseCategory {
    /// Litigation section
    Judicial,
    /// Legal opinion requests
    Fatwa,
    /// Contract review
    Contract,
    /// Student and staff grievances
    #[default]
    Grievance,
    /// Anything else
    Other,
}

impl CaseCategory {
    /// All categories in form order
    pub const ALL: [CaseCategory; 5] = [
        CaseCategory::Judicial,
        CaseCategory::Fatwa,
        CaseCategory::Contract,
        CaseCategory::Grievance,
        CaseCategory::Other,
    ];

    /// Arabic display label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CaseCategory::Judicial => "قسم القضايا",
            CaseCategory::Fatwa => "فتاوى",
            CaseCategory::Contract => "عقود",
            CaseCategory::Grievance => "تظلمات",
            CaseCategory::Other => "أعمال قانونية أخرى",
        }
    }

    /// Stable machine code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            CaseCategory::Judicial => "judicial",
            CaseCategory::Fatwa => "fatwa",
            CaseCategory::Contract => "contract",
            CaseCategory::Grievance => "grievance",
            CaseCategory::Other => "other",
        }
    }
}

impl fmt::Display for CaseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CaseCategory {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = normalise_code(s);
        CaseCategory::ALL
            .into_iter()
            .find(|c| c.code() == code || c.label() == s.trim())
            .ok_or_else(|| CaseError::UnknownCategory(s.trim().to_string()))
    }
}

/// Audit trail entry. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseLogEntry {
    date: NaiveDate,
    action: String,
    user: String,
}

impl CaseLogEntry {
    pub(crate) fn new(date: NaiveDate, action: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            date,
            action: action.into(),
            user: user.into(),
        }
    }

    /// Date of the action
    #[inline]
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Action description
    #[inline]
    #[must_use]
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Acting user (role label or name)
    #[inline]
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }
}

/// A legal case file
///
/// Fields are only mutable through [`crate::CaseStore`], which keeps the
/// identifier, referral date and audit trail invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseRecord {
    pub(crate) id: CaseId,
    pub(crate) title: String,
    pub(crate) description: String,
    pub(crate) category: CaseCategory,
    pub(crate) status: CaseStatus,
    pub(crate) plaintiff: String,
    pub(crate) assigned_counsel: Option<String>,
    pub(crate) referral_date: NaiveDate,
    pub(crate) receipt_date: Option<NaiveDate>,
    pub(crate) completion_date: Option<NaiveDate>,
    pub(crate) ai_summary: Option<String>,
    pub(crate) logs: Vec<CaseLogEntry>,
}

impl CaseRecord {
    /// Case identifier
    #[inline]
    #[must_use]
    pub fn id(&self) -> &CaseId {
        &self.id
    }

    /// Case title
    #[inline]
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Free-text description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category
    #[inline]
    #[must_use]
    pub fn category(&self) -> CaseCategory {
        self.category
    }

    /// Current status
    #[inline]
    #[must_use]
    pub fn status(&self) -> CaseStatus {
        self.status
    }

    /// Requesting party display identity
    #[inline]
    #[must_use]
    pub fn plaintiff(&self) -> &str {
        &self.plaintiff
    }

    /// Counsel the case was distributed to
    #[inline]
    #[must_use]
    pub fn assigned_counsel(&self) -> Option<&str> {
        self.assigned_counsel.as_deref()
    }

    /// Referral date, fixed at creation
    #[inline]
    #[must_use]
    pub fn referral_date(&self) -> NaiveDate {
        self.referral_date
    }

    /// Receipt date
    #[inline]
    #[must_use]
    pub fn receipt_date(&self) -> Option<NaiveDate> {
        self.receipt_date
    }

    /// Completion date, stamped when the case enters `Resolved`
    #[inline]
    #[must_use]
    pub fn completion_date(&self) -> Option<NaiveDate> {
        self.completion_date
    }

    /// Persisted AI summary
    #[inline]
    #[must_use]
    pub fn ai_summary(&self) -> Option<&str> {
        self.ai_summary.as_deref()
    }

    /// Audit trail, earliest first
    #[inline]
    #[must_use]
    pub fn logs(&self) -> &[CaseLogEntry] {
        &self.logs
    }
}

/// Input for a new case (the submission form)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCase {
    /// Subject title
    pub title: String,
    /// Full details
    pub description: String,
    /// Category, defaults to grievance
    #[serde(default)]
    pub category: CaseCategory,
    /// Date the request was submitted
    pub referral_date: NaiveDate,
}

impl NewCase {
    /// Create new case input with the default category
    #[inline]
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        referral_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: CaseCategory::default(),
            referral_date,
        }
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: CaseCategory) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_id_format() {
        assert_eq!(CaseId::new(2024, 7).as_str(), "CASE-2024-007");
        assert_eq!(CaseId::new(2025, 1234).as_str(), "CASE-2025-1234");
    }

    #[test]
    fn case_id_parse() {
        let id = CaseId::parse(" case-2024-003 ").unwrap();
        assert_eq!(id.as_str(), "CASE-2024-003");
        assert_eq!(id.year(), Some(2024));
        assert_eq!(id.sequence(), Some(3));

        assert!(CaseId::parse("CASE-24-003").is_err());
        assert!(CaseId::parse("CASE-2024-").is_err());
        assert!(CaseId::parse("FILE-2024-003").is_err());
        assert!(CaseId::parse("CASE-2024-00x").is_err());
        assert!(CaseId::parse("CASE-2024-99999999999").is_err());
    }

    #[test]
    fn case_id_parse_pads_sequence() {
        assert_eq!(CaseId::parse("CASE-2024-1").unwrap(), CaseId::new(2024, 1));
        assert_eq!(CaseId::parse("case-2024-0001").unwrap(), CaseId::new(2024, 1));
        assert_eq!(CaseId::parse("CASE-2025-1234").unwrap().as_str(), "CASE-2025-1234");
    }

    #[test]
    fn role_parsing() {
        assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
        assert_eq!("Lawyer".parse::<Role>().unwrap(), Role::Counsel);
        assert_eq!("رئيس الجامعة".parse::<Role>().unwrap(), Role::President);
        assert!(matches!(
            "dean".parse::<Role>(),
            Err(CaseError::UnknownRole(_))
        ));
    }

    #[test]
    fn role_capabilities() {
        assert!(!Role::Student.can_act_on_cases());
        assert!(Role::Counsel.can_act_on_cases());
        assert_eq!(Role::Student.plaintiff_identity(), STUDENT_PLAINTIFF);
        assert_eq!(Role::President.plaintiff_identity(), STAFF_PLAINTIFF);
        assert_eq!(Role::default(), Role::President);
    }

    #[test]
    fn status_parsing() {
        assert_eq!(
            "under-review".parse::<CaseStatus>().unwrap(),
            CaseStatus::UnderReview
        );
        assert_eq!(
            "PENDING_DOCS".parse::<CaseStatus>().unwrap(),
            CaseStatus::PendingDocs
        );
        assert_eq!("تم الفصل".parse::<CaseStatus>().unwrap(), CaseStatus::Resolved);
        assert!("closed".parse::<CaseStatus>().is_err());
    }

    #[test]
    fn category_defaults_to_grievance() {
        let input = NewCase::new("t", "d", NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(input.category, CaseCategory::Grievance);
        assert_eq!(
            "fatwa".parse::<CaseCategory>().unwrap().label(),
            "فتاوى"
        );
    }

    #[test]
    fn enums_serialize_as_codes() {
        let json = serde_json::to_string(&CaseStatus::UnderReview).unwrap();
        assert_eq!(json, "\"under_review\"");
        let role: Role = serde_json::from_str("\"counsel\"").unwrap();
        assert_eq!(role, Role::Counsel);
    }
}
