use super::*;
use crate::net::fake_catalog::{Call, FakeCatalog};
use futures::executor::block_on;

#[test]
fn declined_confirmation_is_a_no_op() {
    let service = FakeCatalog::default();
    let mut busy = Vec::new();
    let outcome = block_on(run_delete(&service, "p-1", || false, |b| busy.push(b)));

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert!(service.calls().is_empty());
    assert!(busy.is_empty());
    assert!(outcome.toast().is_none());
    assert!(!outcome.should_refresh());
}

#[test]
fn confirmed_delete_calls_service_and_refreshes() {
    let service = FakeCatalog::default();
    let mut busy = Vec::new();
    let outcome = block_on(run_delete(&service, "p-1", || true, |b| busy.push(b)));

    assert_eq!(outcome, DeleteOutcome::Deleted);
    assert_eq!(service.calls(), vec![Call::Delete("p-1".to_owned())]);
    assert_eq!(busy, vec![true, false]);
    assert_eq!(outcome.toast(), Some((ToastKind::Success, DELETE_SUCCESS_MESSAGE)));
    assert!(outcome.should_refresh());
}

#[test]
fn rejected_delete_keeps_card_and_resets_busy() {
    let service = FakeCatalog::failing(ApiError::Network("offline".to_owned()));
    let mut busy = Vec::new();
    let outcome = block_on(run_delete(&service, "p-9", || true, |b| busy.push(b)));

    assert_eq!(outcome, DeleteOutcome::Failed(ApiError::Network("offline".to_owned())));
    assert_eq!(busy.last(), Some(&false));
    assert!(!outcome.should_refresh());
    assert_eq!(outcome.toast(), Some((ToastKind::Error, DELETE_FAILURE_MESSAGE)));
}

#[test]
fn not_found_is_reported_as_failure() {
    let service = FakeCatalog::failing(ApiError::NotFound("gone".to_owned()));
    let outcome = block_on(run_delete(&service, "p-9", || true, |_| {}));
    assert!(matches!(outcome, DeleteOutcome::Failed(ref e) if e.is_not_found()));
}

#[test]
fn button_label_tracks_busy_flag() {
    assert_eq!(delete_button_label(false), "Delete");
    assert_eq!(delete_button_label(true), "Deleting...");
}
