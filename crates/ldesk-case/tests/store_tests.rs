use chrono::NaiveDate;
use ldesk_case::store::CREATION_ACTION;
use ldesk_case::*;
use std::sync::Arc;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_at(today: NaiveDate) -> (CaseStore, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(today));
    (CaseStore::seeded(clock.clone()), clock)
}

#[test]
fn test_create_case_scenario() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));

    let input = NewCase::new("X", "Y", day(2024, 6, 1)).with_category(CaseCategory::Grievance);
    let case = store.create_case(input, Role::Student);

    let id = case.id().as_str();
    assert!(id.starts_with("CASE-2024-"));
    assert_eq!(id.len(), "CASE-2024-NNN".len());
    assert_eq!(case.status(), CaseStatus::New);
    assert_eq!(case.title(), "X");
    assert_eq!(case.description(), "Y");
    assert_eq!(case.category(), CaseCategory::Grievance);
    assert_eq!(case.referral_date(), day(2024, 6, 1));
    assert_eq!(case.completion_date(), None);
    assert_eq!(case.logs().len(), 1);
    assert_eq!(case.logs()[0].date(), day(2024, 6, 1));
    assert_eq!(case.logs()[0].action(), CREATION_ACTION);
    assert_eq!(case.logs()[0].user(), Role::Student.label());
}

#[test]
fn test_create_case_prepends_and_sets_plaintiff() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));

    store.create_case(NewCase::new("a", "b", day(2024, 6, 1)), Role::Counsel);
    let newest = &store.as_slice()[0];
    assert_eq!(newest.plaintiff(), "عضو هيئة تدريس");
    assert_eq!(store.len(), 4);

    store.create_case(NewCase::new("c", "d", day(2024, 6, 1)), Role::Student);
    let newest = &store.as_slice()[0];
    assert_eq!(newest.plaintiff(), "أحمد محمد (طالب)");
    assert_eq!(newest.title(), "c");
}

#[test]
fn test_generated_ids_are_unique() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));
    for _ in 0..50 {
        store.create_case(NewCase::new("t", "d", day(2024, 6, 1)), Role::Student);
    }
    let mut ids: Vec<&str> = store.iter().map(|c| c.id().as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_update_status_unknown_id_leaves_store_unchanged() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));
    let before: Vec<CaseRecord> = store.as_slice().to_vec();

    let missing = CaseId::parse("CASE-2024-404").unwrap();
    let err = store
        .update_status(&missing, CaseStatus::Resolved)
        .unwrap_err();
    assert!(err.is_lookup_failure());
    assert_eq!(err, CaseError::NotFound(missing));
    assert_eq!(store.as_slice(), before.as_slice());
}

#[test]
fn test_unpadded_id_finds_stored_case() {
    let (store, _clock) = seeded_at(day(2024, 6, 1));

    for typed in ["CASE-2024-1", "case-2024-0001"] {
        let id = CaseId::parse(typed).unwrap();
        assert!(store.contains(&id), "{typed} should resolve");
        assert_eq!(store.get(&id).unwrap().id().as_str(), "CASE-2024-001");
    }
}

#[test]
fn test_resolving_stamps_today() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));
    let id = CaseId::parse("CASE-2024-001").unwrap();

    let case = store.update_status(&id, CaseStatus::Resolved).unwrap();
    assert_eq!(case.status(), CaseStatus::Resolved);
    assert_eq!(case.completion_date(), Some(day(2024, 6, 1)));
    // No audit entry for status changes by default
    assert_eq!(case.logs().len(), 2);
}

#[test]
fn test_leaving_resolved_keeps_completion_date() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));
    let id = CaseId::parse("CASE-2024-003").unwrap();
    assert_eq!(store.get(&id).unwrap().completion_date(), Some(day(2024, 4, 10)));

    let case = store.update_status(&id, CaseStatus::UnderReview).unwrap();
    assert_eq!(case.status(), CaseStatus::UnderReview);
    assert_eq!(case.completion_date(), Some(day(2024, 4, 10)));
}

#[test]
fn test_re_resolving_keeps_first_stamp_but_re_entry_restamps() {
    let (mut store, clock) = seeded_at(day(2024, 6, 1));
    let id = CaseId::parse("CASE-2024-002").unwrap();

    store.update_status(&id, CaseStatus::Resolved).unwrap();
    clock.advance_days(3);

    let case = store.update_status(&id, CaseStatus::Resolved).unwrap();
    assert_eq!(case.completion_date(), Some(day(2024, 6, 1)));

    store.update_status(&id, CaseStatus::PendingDocs).unwrap();
    let case = store.update_status(&id, CaseStatus::Resolved).unwrap();
    assert_eq!(case.completion_date(), Some(day(2024, 6, 4)));
}

#[test]
fn test_any_status_assignable_from_any_status() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));
    let id = CaseId::parse("CASE-2024-002").unwrap();
    for from in CaseStatus::ALL {
        for to in CaseStatus::ALL {
            store.update_status(&id, from).unwrap();
            let case = store.update_status(&id, to).unwrap();
            assert_eq!(case.status(), to);
        }
    }
}

#[derive(Debug)]
struct NoReopening;

impl TransitionPolicy for NoReopening {
    fn check(&self, from: CaseStatus, to: CaseStatus) -> Result<(), CaseError> {
        if from.is_resolved() && !to.is_resolved() {
            Err(CaseError::TransitionRejected { from, to })
        } else {
            Ok(())
        }
    }
}

#[test]
fn test_policy_hook_can_reject() {
    let clock = Arc::new(ManualClock::new(day(2024, 6, 1)));
    let mut store = CaseStore::seeded(clock).with_policy(NoReopening);
    let id = CaseId::parse("CASE-2024-003").unwrap();

    let err = store.update_status(&id, CaseStatus::New).unwrap_err();
    assert!(matches!(err, CaseError::TransitionRejected { .. }));
    assert_eq!(store.get(&id).unwrap().status(), CaseStatus::Resolved);
}

#[test]
fn test_ids_are_immutable_across_updates() {
    let (mut store, _clock) = seeded_at(day(2024, 6, 1));
    let ids_before: Vec<CaseId> = store.iter().map(|c| c.id().clone()).collect();
    let referral_before: Vec<NaiveDate> = store.iter().map(CaseRecord::referral_date).collect();

    for id in &ids_before {
        store.update_status(id, CaseStatus::Resolved).unwrap();
        store.attach_summary(id, "s").unwrap();
    }

    let ids_after: Vec<CaseId> = store.iter().map(|c| c.id().clone()).collect();
    let referral_after: Vec<NaiveDate> = store.iter().map(CaseRecord::referral_date).collect();
    assert_eq!(ids_before, ids_after);
    assert_eq!(referral_before, referral_after);
}
