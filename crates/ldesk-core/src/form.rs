//! New-case form input

use crate::error::DeskError;
use chrono::NaiveDate;
use ldesk_case::{CaseCategory, NewCase};
use serde::{Deserialize, Serialize};

/// Raw new-case form as entered by the user
///
/// Title and description are required. Category defaults to grievance and
/// the referral date to today.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseForm {
    /// Subject line
    #[serde(default)]
    pub title: String,
    /// Free-text details
    #[serde(default)]
    pub description: String,
    /// Chosen category
    #[serde(default)]
    pub category: Option<CaseCategory>,
    /// Date the case was referred
    #[serde(default)]
    pub referral_date: Option<NaiveDate>,
}

impl CaseForm {
    /// Create form with title and description
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// With category
    #[inline]
    #[must_use]
    pub fn with_category(mut self, category: CaseCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// With referral date
    #[inline]
    #[must_use]
    pub fn with_referral_date(mut self, date: NaiveDate) -> Self {
        self.referral_date = Some(date);
        self
    }

    /// Check required fields and fill defaults
    ///
    /// # Errors
    /// - `DeskError::InvalidForm` naming the first blank required field
    pub fn validate(self, today: NaiveDate) -> Result<NewCase, DeskError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DeskError::InvalidForm { field: "title" });
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DeskError::InvalidForm {
                field: "description",
            });
        }

        Ok(NewCase::new(
            title,
            description,
            self.referral_date.unwrap_or(today),
        )
        .with_category(self.category.unwrap_or_default()))
    }
}
