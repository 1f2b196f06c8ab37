//! Desk controller behaviour over the seeded store

use ldesk_annotate::{AnnotationKind, AnnotationTask, GenerateError, DEFAULT_STANCE};
use ldesk_case::{CaseCategory, CaseError, CaseStatus, Role};
use ldesk_core::{CaseForm, DeskError, DeskView, Page};
use ldesk_test_utils::{
    case_id, desk_with_backend, failing_desk, fixed_today, offline_desk, sample_form, setup_desk,
    static_backend, CANNED_TEXT,
};
use pretty_assertions::assert_eq;

fn list_ids(view: &DeskView<'_>) -> Vec<String> {
    match view {
        DeskView::List(list) => list.cases.iter().map(|c| c.id().to_string()).collect(),
        other => panic!("expected list, got {}", other.kind()),
    }
}

#[test]
fn starts_as_president_on_dashboard() {
    let desk = setup_desk();
    assert_eq!(desk.role(), Role::President);
    assert_eq!(desk.page(), Page::Dashboard);

    let view = desk.view();
    assert_eq!(
        list_ids(&view),
        vec!["CASE-2024-001", "CASE-2024-002", "CASE-2024-003"]
    );
    let DeskView::List(list) = view else { unreachable!() };
    assert!(list.show_charts);
    assert_eq!(list.stats.unwrap().total, 3);
}

#[test]
fn student_sees_only_own_grievances_without_stats() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Student);

    let view = desk.view();
    assert_eq!(list_ids(&view), vec!["CASE-2024-001"]);
    let DeskView::List(list) = view else { unreachable!() };
    assert!(list.stats.is_none());
    assert!(!list.show_charts);
}

#[test]
fn counsel_gets_stats_but_no_charts() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Counsel);

    let DeskView::List(list) = desk.view() else {
        panic!("expected list");
    };
    assert_eq!(list.cases.len(), 3);
    assert!(list.stats.is_some());
    assert!(!list.show_charts);
}

#[test]
fn role_switch_resets_page_and_selection() {
    let mut desk = setup_desk();
    desk.navigate(Page::AllCases);
    desk.select(&case_id(2)).unwrap();

    desk.switch_role(Role::Counsel);
    assert_eq!(desk.page(), Page::Dashboard);
    assert!(desk.selected().is_none());
    assert_eq!(desk.view().kind(), "list");
}

#[test]
fn navigate_clears_selection() {
    let mut desk = setup_desk();
    desk.select(&case_id(1)).unwrap();
    desk.navigate(Page::Drafts);
    assert!(desk.selected().is_none());
    assert_eq!(desk.view().kind(), "list");

    desk.navigate(Page::NewCase);
    assert_eq!(desk.view().kind(), "new-case-form");
}

#[test]
fn student_cannot_open_hidden_case() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Student);
    let err = desk.select(&case_id(2)).unwrap_err();
    assert!(err.is_lookup_failure());
    assert!(desk.selected().is_none());
}

#[test]
fn create_case_returns_to_dashboard() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Student);
    desk.navigate(Page::NewCase);

    let id = desk.create_case(sample_form()).unwrap();
    assert_eq!(id.as_str(), "CASE-2024-004");
    assert_eq!(desk.page(), Page::Dashboard);
    assert_eq!(list_ids(&desk.view()), vec!["CASE-2024-004", "CASE-2024-001"]);

    let case = desk.store().get(&id).unwrap();
    assert_eq!(case.status(), CaseStatus::New);
    assert_eq!(case.category(), CaseCategory::Grievance);
    assert_eq!(case.referral_date(), fixed_today());
    assert_eq!(case.logs()[0].user(), "طالب");
}

#[test]
fn staff_cases_are_filed_as_faculty() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Counsel);
    let id = desk
        .create_case(CaseForm::new("مراجعة عقد", "عقد توريد").with_category(CaseCategory::Contract))
        .unwrap();
    let case = desk.store().get(&id).unwrap();
    assert_eq!(case.plaintiff(), "عضو هيئة تدريس");
    assert_eq!(case.logs()[0].user(), "عضو قانوني");
}

#[test]
fn incomplete_form_is_rejected() {
    let mut desk = setup_desk();
    desk.navigate(Page::NewCase);
    let err = desk.create_case(CaseForm::new("", "x")).unwrap_err();
    assert!(matches!(err, DeskError::InvalidForm { field: "title" }));
    assert_eq!(desk.store().len(), 3);
    assert_eq!(desk.page(), Page::NewCase);
}

#[test]
fn status_update_refreshes_detail_view() {
    let mut desk = setup_desk();
    desk.select(&case_id(1)).unwrap();

    desk.update_status(&case_id(1), CaseStatus::Resolved).unwrap();
    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert_eq!(detail.case.status(), CaseStatus::Resolved);
    assert_eq!(detail.case.completion_date(), Some(fixed_today()));
}

#[test]
fn students_cannot_change_status() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Student);
    let err = desk.update_status(&case_id(1), CaseStatus::Resolved).unwrap_err();
    assert!(matches!(err, DeskError::NotAvailable { role: Role::Student }));
    assert_eq!(
        desk.store().get(&case_id(1)).unwrap().status(),
        CaseStatus::UnderReview
    );
}

#[test]
fn unknown_case_status_update_fails() {
    let mut desk = setup_desk();
    let err = desk.update_status(&case_id(99), CaseStatus::New).unwrap_err();
    assert!(matches!(err, DeskError::Case(CaseError::NotFound(_))));
}

#[test]
fn student_detail_is_read_only() {
    let mut desk = setup_desk();
    desk.switch_role(Role::Student);
    desk.select(&case_id(1)).unwrap();
    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert!(!detail.capabilities.change_status);
    assert!(!detail.capabilities.annotate);
    assert!(matches!(
        desk.begin_annotation(AnnotationTask::Summary),
        Err(DeskError::NotAvailable { .. })
    ));
}

#[tokio::test]
async fn summary_attaches_to_detail_view() {
    let backend = static_backend();
    let mut desk = desk_with_backend(backend.clone());
    desk.select(&case_id(1)).unwrap();

    let text = desk.annotate(AnnotationTask::Summary).await.unwrap();
    assert_eq!(text, CANNED_TEXT);
    assert_eq!(backend.call_count(), 1);

    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert_eq!(detail.summary, Some(CANNED_TEXT));
    assert_eq!(detail.draft, None);
    assert!(!detail.summary_busy);

    // detail output does not touch the record
    assert_eq!(desk.store().get(&case_id(1)).unwrap().ai_summary(), None);
}

#[tokio::test]
async fn draft_uses_configured_default_stance() {
    let backend = static_backend();
    let mut desk = desk_with_backend(backend.clone());
    desk.select(&case_id(2)).unwrap();

    let task = desk.draft_task(None);
    assert_eq!(
        task,
        AnnotationTask::Draft {
            stance: DEFAULT_STANCE.to_string()
        }
    );
    desk.annotate(task).await.unwrap();
    assert!(backend.last_prompt().unwrap().contains(DEFAULT_STANCE));

    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert_eq!(detail.draft, Some(CANNED_TEXT));
}

#[tokio::test]
async fn annotation_requires_selection() {
    let desk = setup_desk();
    assert!(matches!(
        desk.begin_annotation(AnnotationTask::Summary),
        Err(DeskError::NoSelection)
    ));
}

#[tokio::test]
async fn same_request_cannot_run_twice() {
    let mut desk = setup_desk();
    desk.select(&case_id(1)).unwrap();

    let pending = desk.begin_annotation(AnnotationTask::Summary).unwrap();
    let err = desk.begin_annotation(AnnotationTask::Summary).unwrap_err();
    assert!(matches!(
        err,
        DeskError::AnnotationInFlight {
            kind: AnnotationKind::Summary,
            ..
        }
    ));
    // a draft for the same case is a different slot
    let draft = desk.begin_annotation(desk.draft_task(None)).unwrap();

    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert!(detail.summary_busy && detail.draft_busy);

    drop(draft);
    assert!(desk.finish_annotation(pending.run().await));
    assert!(desk.busy().is_empty());
}

#[tokio::test]
async fn controller_stays_usable_while_request_runs() {
    let mut desk = setup_desk();
    desk.select(&case_id(1)).unwrap();

    let pending = desk.begin_annotation(AnnotationTask::Summary).unwrap();
    desk.update_status(&case_id(1), CaseStatus::PendingDocs).unwrap();
    let done = pending.run().await;

    assert!(desk.finish_annotation(done));
    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert_eq!(detail.case.status(), CaseStatus::PendingDocs);
    assert_eq!(detail.summary, Some(CANNED_TEXT));
}

#[tokio::test]
async fn late_result_for_other_case_is_dropped() {
    let mut desk = setup_desk();
    desk.select(&case_id(1)).unwrap();
    let pending = desk.begin_annotation(AnnotationTask::Summary).unwrap();

    desk.back();
    desk.select(&case_id(2)).unwrap();

    let done = pending.run().await;
    assert_eq!(done.case_id(), &case_id(1));
    assert!(!desk.finish_annotation(done));

    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert_eq!(detail.case.id(), &case_id(2));
    assert_eq!(detail.summary, None);
    assert!(desk.busy().is_empty());
}

#[tokio::test]
async fn missing_credential_is_shown_as_text() {
    let mut desk = offline_desk();
    desk.select(&case_id(1)).unwrap();
    let text = desk.annotate(AnnotationTask::Summary).await.unwrap();
    assert_eq!(text, "مفتاح API غير متوفر. يرجى ضبط الإعدادات.");
}

#[tokio::test]
async fn service_failure_is_shown_as_text() {
    let mut desk = failing_desk(GenerateError::RateLimited);
    desk.select(&case_id(3)).unwrap();
    let task = desk.draft_task(Some("رفض الطلب"));
    assert_eq!(desk.annotate(task).await.unwrap(), "حدث خطأ أثناء الإنشاء.");
}

#[tokio::test]
async fn save_summary_persists_on_request() {
    let mut desk = setup_desk();
    desk.select(&case_id(2)).unwrap();
    assert!(matches!(desk.save_summary(), Err(DeskError::NoSummary(_))));

    desk.annotate(AnnotationTask::Summary).await.unwrap();
    let case = desk.save_summary().unwrap();
    assert_eq!(case.ai_summary(), Some(CANNED_TEXT));

    // reopening shows the stored summary
    desk.back();
    desk.select(&case_id(2)).unwrap();
    let DeskView::Detail(detail) = desk.view() else {
        panic!("expected detail");
    };
    assert_eq!(detail.summary, Some(CANNED_TEXT));
}

#[test]
fn save_summary_needs_selection() {
    let mut desk = setup_desk();
    assert!(matches!(desk.save_summary(), Err(DeskError::NoSelection)));
}
