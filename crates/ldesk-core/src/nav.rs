//! Pages and role-dependent navigation

use crate::error::DeskError;
use ldesk_case::Role;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    /// Role's home list
    #[default]
    Dashboard,
    /// Every case (president)
    AllCases,
    /// New-case form
    NewCase,
    /// Counsel drafts; renders the case list
    Drafts,
}

impl Page {
    /// All pages
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::AllCases, Page::NewCase, Page::Drafts];

    /// Stable page code
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::AllCases => "all-cases",
            Page::NewCase => "new-case",
            Page::Drafts => "drafts",
        }
    }

    /// Parse a page code, falling back to the dashboard
    #[must_use]
    pub fn from_code_lossy(code: &str) -> Self {
        code.parse().unwrap_or_else(|_| {
            tracing::debug!(code, "unknown page, using dashboard");
            Page::Dashboard
        })
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Page {
    type Err = DeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_lowercase().replace('_', "-");
        Page::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| DeskError::UnknownPage(s.trim().to_string()))
    }
}

/// Menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Target page
    pub page: Page,
    /// Arabic menu label
    pub label: &'static str,
}

const PRESIDENT_MENU: [NavItem; 2] = [
    NavItem {
        page: Page::Dashboard,
        label: "لوحة القيادة",
    },
    NavItem {
        page: Page::AllCases,
        label: "جميع القضايا",
    },
];

const COUNSEL_MENU: [NavItem; 2] = [
    NavItem {
        page: Page::Dashboard,
        label: "قضاياي",
    },
    NavItem {
        page: Page::Drafts,
        label: "المسودات",
    },
];

const STUDENT_MENU: [NavItem; 2] = [
    NavItem {
        page: Page::Dashboard,
        label: "تظلماتي",
    },
    NavItem {
        page: Page::NewCase,
        label: "رفع طلب جديد",
    },
];

/// Menu shown to `role`
#[must_use]
pub fn nav_items(role: Role) -> &'static [NavItem] {
    match role {
        Role::President => &PRESIDENT_MENU,
        Role::Counsel => &COUNSEL_MENU,
        Role::Student => &STUDENT_MENU,
    }
}
