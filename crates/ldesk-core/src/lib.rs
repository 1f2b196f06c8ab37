//! Legal Desk controller
//!
//! Ties the case store and the AI annotator into one session:
//! - [`DeskController`]: role, page, selection, AI detail output
//! - [`DeskView`]: what a front end should render right now
//! - [`DeskConfig`]: TOML configuration with environment overrides
//! - [`nav_items`]: the menu each role gets
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ldesk_core::prelude::*;
//!
//! let config = DeskConfig::new().with_env();
//! let annotator = config.build_annotator(false)?;
//! let mut desk = DeskController::from_config(&config, Arc::new(SystemClock), annotator);
//!
//! desk.switch_role(Role::Student);
//! let id = desk.create_case(CaseForm::new("تظلم من نتيجة", "خطأ في رصد الدرجات"))?;
//! desk.select(&id)?;
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod nav;
pub mod render;
pub mod shell;
pub mod view;

pub use config::{AnnotationConfig, DeskConfig, DeskSettings, API_KEY_VAR, OFFLINE_RESPONSE};
pub use controller::{CompletedAnnotation, DeskController, PendingAnnotation};
pub use error::DeskError;
pub use form::CaseForm;
pub use nav::{nav_items, NavItem, Page};
pub use shell::{execute, parse_line, ShellCommand, ShellOutcome};
pub use view::{DeskView, DetailCapabilities, DetailView, FormView, ListView};

/// Common imports for front ends
pub mod prelude {
    pub use crate::{
        CaseForm, DeskConfig, DeskController, DeskError, DeskView, NavItem, Page,
    };
    pub use ldesk_annotate::{AnnotationKind, AnnotationTask, Annotator};
    pub use ldesk_case::{CaseCategory, CaseId, CaseStatus, Role, SystemClock};
    pub use std::sync::Arc;
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
