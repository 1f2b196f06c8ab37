//! Desk controller
//!
//! Owns the case store and the session state of one user: active role,
//! current page, selected case and the AI output shown next to it. The
//! selection is held by identifier and resolved against the store on every
//! read, so status changes show up immediately.
//!
//! AI requests run in two phases. [`DeskController::begin_annotation`]
//! snapshots the case and claims the busy slot; the returned
//! [`PendingAnnotation`] runs without borrowing the controller; and
//! [`DeskController::finish_annotation`] attaches the text if the user is
//! still looking at the same case.

use crate::config::DeskConfig;
use crate::error::DeskError;
use crate::form::CaseForm;
use crate::nav::{nav_items, NavItem, Page};
use crate::view::{DeskView, DetailCapabilities, DetailView, FormView, ListView};
use ldesk_annotate::{AnnotationKind, AnnotationTask, Annotator, BusyGuard, BusySet};
use ldesk_case::{
    is_visible_to, visible_cases, CaseError, CaseId, CaseRecord, CaseStatus, CaseStore, Clock,
    DashboardStats, Role,
};
use std::sync::Arc;

/// AI output shown for the selected case; discarded when it is left
#[derive(Debug, Clone, Default)]
struct DetailState {
    summary: Option<String>,
    draft: Option<String>,
}

/// Session state over one case store
#[derive(Debug)]
pub struct DeskController {
    store: CaseStore,
    annotator: Annotator,
    busy: BusySet,
    role: Role,
    page: Page,
    selected: Option<CaseId>,
    detail: DetailState,
    default_stance: String,
}

impl DeskController {
    /// Create controller as president on the dashboard
    #[must_use]
    pub fn new(store: CaseStore, annotator: Annotator) -> Self {
        Self {
            store,
            annotator,
            busy: BusySet::new(),
            role: Role::default(),
            page: Page::Dashboard,
            selected: None,
            detail: DetailState::default(),
            default_stance: ldesk_annotate::DEFAULT_STANCE.to_string(),
        }
    }

    /// Create controller from configuration
    #[must_use]
    pub fn from_config(config: &DeskConfig, clock: Arc<dyn Clock>, annotator: Annotator) -> Self {
        let store = if config.desk.seed {
            CaseStore::seeded(clock)
        } else {
            CaseStore::new(clock)
        }
        .with_options(config.store_options());

        Self::new(store, annotator)
            .with_role(config.desk.initial_role)
            .with_default_stance(config.annotation.default_stance.as_str())
    }

    /// With starting role
    #[inline]
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// With stance used for drafts requested without one
    #[inline]
    #[must_use]
    pub fn with_default_stance(mut self, stance: impl Into<String>) -> Self {
        self.default_stance = stance.into();
        self
    }

    /// Active role
    #[inline]
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Current page
    #[inline]
    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    /// Selected case id
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&CaseId> {
        self.selected.as_ref()
    }

    /// Selected case as currently stored
    #[must_use]
    pub fn selected_case(&self) -> Option<&CaseRecord> {
        self.selected.as_ref().and_then(|id| self.store.get(id))
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &CaseStore {
        &self.store
    }

    /// In-flight AI requests
    #[inline]
    #[must_use]
    pub fn busy(&self) -> &BusySet {
        &self.busy
    }

    /// Menu for the active role
    #[must_use]
    pub fn nav(&self) -> &'static [NavItem] {
        nav_items(self.role)
    }

    /// Cases the active role may see, newest first
    #[must_use]
    pub fn visible(&self) -> Vec<&CaseRecord> {
        visible_cases(self.store.as_slice(), self.role)
    }

    /// Switch persona; returns to the dashboard with nothing selected
    pub fn switch_role(&mut self, role: Role) {
        tracing::info!(from = self.role.code(), to = role.code(), "role switched");
        self.role = role;
        self.page = Page::Dashboard;
        self.clear_selection();
    }

    /// Go to `page`, leaving any selected case
    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(page = page.code(), "navigate");
        self.page = page;
        self.clear_selection();
    }

    /// Open case `id` in the detail view
    ///
    /// Cases hidden from the active role are reported as not found.
    ///
    /// # Errors
    /// - `DeskError::Case(CaseError::NotFound)` if absent or hidden
    pub fn select(&mut self, id: &CaseId) -> Result<&CaseRecord, DeskError> {
        let record = self
            .store
            .get(id)
            .filter(|c| is_visible_to(c, self.role))
            .ok_or_else(|| CaseError::NotFound(id.clone()))?;

        if self.selected.as_ref() != Some(id) {
            self.detail = DetailState {
                summary: record.ai_summary().map(str::to_string),
                draft: None,
            };
            self.selected = Some(id.clone());
        }
        Ok(record)
    }

    /// Leave the detail view
    pub fn back(&mut self) {
        self.clear_selection();
    }

    /// Submit the new-case form; returns to the dashboard
    ///
    /// # Errors
    /// - `DeskError::InvalidForm` if a required field is blank
    pub fn create_case(&mut self, form: CaseForm) -> Result<CaseId, DeskError> {
        let input = form.validate(self.store.today())?;
        let id = self.store.create_case(input, self.role).id().clone();
        self.page = Page::Dashboard;
        Ok(id)
    }

    /// Change status of case `id`
    ///
    /// # Errors
    /// - `DeskError::NotAvailable` for students
    /// - `DeskError::Case` if the case is missing or the change is rejected
    pub fn update_status(&mut self, id: &CaseId, status: CaseStatus) -> Result<&CaseRecord, DeskError> {
        self.require_staff()?;
        Ok(self.store.update_status_as(id, status, self.role)?)
    }

    /// Draft task with `stance`, or the configured default
    #[must_use]
    pub fn draft_task(&self, stance: Option<&str>) -> AnnotationTask {
        AnnotationTask::Draft {
            stance: stance.unwrap_or(self.default_stance.as_str()).to_string(),
        }
    }

    /// Start an AI request for the selected case
    ///
    /// # Errors
    /// - `DeskError::NoSelection` if no case is open
    /// - `DeskError::NotAvailable` for students
    /// - `DeskError::AnnotationInFlight` if the same request is running
    pub fn begin_annotation(&self, task: AnnotationTask) -> Result<PendingAnnotation, DeskError> {
        let case_id = self.selected.clone().ok_or(DeskError::NoSelection)?;
        self.require_staff()?;
        let case = self
            .store
            .get(&case_id)
            .ok_or_else(|| CaseError::NotFound(case_id.clone()))?
            .clone();

        let kind = task.kind();
        let Some(guard) = self.busy.try_acquire(&case_id, kind) else {
            tracing::debug!(%case_id, %kind, "annotation already running");
            return Err(DeskError::AnnotationInFlight { case_id, kind });
        };

        Ok(PendingAnnotation {
            case,
            task,
            annotator: self.annotator.clone(),
            guard,
        })
    }

    /// Attach a finished AI result to the detail view
    ///
    /// Returns `false` and drops the text if the selection moved on.
    pub fn finish_annotation(&mut self, done: CompletedAnnotation) -> bool {
        if self.selected.as_ref() != Some(&done.case_id) {
            tracing::debug!(case_id = %done.case_id, kind = %done.kind, "selection changed, result dropped");
            return false;
        }
        match done.kind {
            AnnotationKind::Summary => self.detail.summary = Some(done.text),
            AnnotationKind::Draft => self.detail.draft = Some(done.text),
        }
        true
    }

    /// Run an AI request for the selected case to completion
    ///
    /// # Errors
    /// Same as [`DeskController::begin_annotation`]
    pub async fn annotate(&mut self, task: AnnotationTask) -> Result<String, DeskError> {
        let pending = self.begin_annotation(task)?;
        let done = pending.run().await;
        let text = done.text.clone();
        self.finish_annotation(done);
        Ok(text)
    }

    /// Store the summary shown in the detail view on the case record
    ///
    /// # Errors
    /// - `DeskError::NoSelection` if no case is open
    /// - `DeskError::NoSummary` if no summary has been generated
    pub fn save_summary(&mut self) -> Result<&CaseRecord, DeskError> {
        let id = self.selected.clone().ok_or(DeskError::NoSelection)?;
        let Some(summary) = self.detail.summary.clone() else {
            return Err(DeskError::NoSummary(id));
        };
        Ok(self.store.attach_summary(&id, summary)?)
    }

    /// Project the current state
    #[must_use]
    pub fn view(&self) -> DeskView<'_> {
        if let Some(case) = self.selected_case() {
            let id = case.id();
            return DeskView::Detail(DetailView {
                case,
                capabilities: DetailCapabilities::for_role(self.role, case.status()),
                summary: self.detail.summary.as_deref(),
                draft: self.detail.draft.as_deref(),
                summary_busy: self.busy.is_busy(id, AnnotationKind::Summary),
                draft_busy: self.busy.is_busy(id, AnnotationKind::Draft),
            });
        }

        match self.page {
            Page::NewCase => DeskView::NewCaseForm(FormView::new(self.role, self.store.today())),
            Page::Dashboard | Page::AllCases | Page::Drafts => DeskView::List(self.list_view()),
        }
    }

    fn list_view(&self) -> ListView<'_> {
        let staff = self.role.can_act_on_cases();
        ListView {
            role: self.role,
            page: self.page,
            cases: self.visible(),
            stats: staff.then(|| DashboardStats::compute(self.store.as_slice())),
            show_charts: self.role == Role::President,
        }
    }

    fn require_staff(&self) -> Result<(), DeskError> {
        if self.role.can_act_on_cases() {
            Ok(())
        } else {
            Err(DeskError::NotAvailable { role: self.role })
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.detail = DetailState::default();
    }
}

/// AI request started but not yet run
///
/// Holds a snapshot of the case and the busy slot; the slot is released
/// once the [`CompletedAnnotation`] is handed back or dropped.
#[derive(Debug)]
pub struct PendingAnnotation {
    case: CaseRecord,
    task: AnnotationTask,
    annotator: Annotator,
    guard: BusyGuard,
}

impl PendingAnnotation {
    /// Case the request is for
    #[must_use]
    pub fn case_id(&self) -> &CaseId {
        self.case.id()
    }

    /// Requested annotation
    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        self.task.kind()
    }

    /// Call the generator
    pub async fn run(self) -> CompletedAnnotation {
        let text = self.annotator.run(&self.case, &self.task).await;
        CompletedAnnotation {
            case_id: self.case.id().clone(),
            kind: self.task.kind(),
            text,
            _guard: self.guard,
        }
    }
}

/// AI result waiting to be attached
#[derive(Debug)]
pub struct CompletedAnnotation {
    case_id: CaseId,
    kind: AnnotationKind,
    text: String,
    _guard: BusyGuard,
}

impl CompletedAnnotation {
    /// Case the result is for
    #[must_use]
    pub fn case_id(&self) -> &CaseId {
        &self.case_id
    }

    /// Annotation kind
    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        self.kind
    }

    /// Generated or fallback text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use ldesk_annotate::StaticBackend;
    use ldesk_case::ManualClock;

    fn controller() -> DeskController {
        let clock = Arc::new(ManualClock::new(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()));
        DeskController::new(
            CaseStore::seeded(clock),
            Annotator::new(Arc::new(StaticBackend::new("نص"))),
        )
    }

    fn id(seq: u32) -> CaseId {
        CaseId::new(2024, seq)
    }

    #[test]
    fn select_seeds_summary_from_record() {
        let mut desk = controller();
        desk.store.attach_summary(&id(2), "محفوظ").unwrap();
        desk.select(&id(2)).unwrap();
        assert_eq!(desk.detail.summary.as_deref(), Some("محفوظ"));

        desk.back();
        assert!(desk.detail.summary.is_none());
        assert!(desk.selected().is_none());
    }

    #[test]
    fn reselecting_same_case_keeps_detail() {
        let mut desk = controller();
        desk.select(&id(1)).unwrap();
        desk.detail.draft = Some("مسودة".to_string());
        desk.select(&id(1)).unwrap();
        assert_eq!(desk.detail.draft.as_deref(), Some("مسودة"));
    }

    #[tokio::test]
    async fn guard_is_held_until_completion_is_consumed() {
        let mut desk = controller();
        desk.select(&id(1)).unwrap();

        let pending = desk.begin_annotation(AnnotationTask::Summary).unwrap();
        let done = pending.run().await;
        assert!(desk.busy().is_busy(&id(1), AnnotationKind::Summary));

        assert!(desk.finish_annotation(done));
        assert!(desk.busy().is_empty());
    }
}
