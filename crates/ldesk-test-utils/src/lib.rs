//! Testing utilities for the legal desk workspace
//!
//! Shared fixtures: a clock pinned to 2024-06-01, the seeded store, and
//! controllers wired to static AI backends.

#![allow(missing_docs)]

use chrono::NaiveDate;
use ldesk_annotate::{Annotator, GenerateError, StaticBackend};
use ldesk_case::{CaseId, CaseStore, ManualClock, NewCase, StoreOptions};
use ldesk_core::{CaseForm, DeskController};
use std::sync::Arc;

pub const CANNED_TEXT: &str = "نص تجريبي من المساعد";

pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn case_id(seq: u32) -> CaseId {
    CaseId::new(2024, seq)
}

pub fn fixed_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(fixed_today()))
}

pub fn seeded_store() -> CaseStore {
    CaseStore::seeded(fixed_clock())
}

pub fn seeded_store_with_clock() -> (CaseStore, Arc<ManualClock>) {
    let clock = fixed_clock();
    (CaseStore::seeded(clock.clone()), clock)
}

pub fn audited_store() -> CaseStore {
    seeded_store().with_options(StoreOptions::default().with_status_audit(true))
}

pub fn sample_new_case() -> NewCase {
    NewCase::new("تظلم من نتيجة مقرر", "أطلب إعادة رصد درجة الاختبار النهائي", fixed_today())
}

pub fn sample_form() -> CaseForm {
    CaseForm::new("تظلم من نتيجة مقرر", "أطلب إعادة رصد درجة الاختبار النهائي")
}

pub fn static_backend() -> Arc<StaticBackend> {
    Arc::new(StaticBackend::new(CANNED_TEXT))
}

pub fn desk_with_backend(backend: Arc<StaticBackend>) -> DeskController {
    DeskController::new(seeded_store(), Annotator::new(backend))
}

pub fn setup_desk() -> DeskController {
    desk_with_backend(static_backend())
}

pub fn offline_desk() -> DeskController {
    DeskController::new(seeded_store(), Annotator::unconfigured())
}

pub fn failing_desk(error: GenerateError) -> DeskController {
    desk_with_backend(Arc::new(StaticBackend::failing(error)))
}
