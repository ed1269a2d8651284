use super::*;
use crate::types::Assessment;
use serde_json::json;

fn assessment(id: i64, status: &str) -> Assessment {
    serde_json::from_value(json!({ "id": id, "title": format!("Assessment {id}"), "status": status })).unwrap()
}

fn viewing(status: &str) -> ModerationWorkflow<Assessment> {
    let mut wf = ModerationWorkflow::new();
    wf.open(assessment(1, status)).unwrap();
    wf
}

// =============================================================
// Opening and closing
// =============================================================

#[test]
fn starts_closed() {
    let wf = ModerationWorkflow::<Assessment>::new();
    assert_eq!(wf.state(), &ReviewState::Closed);
    assert!(!wf.is_open());
    assert!(wf.current_item().is_none());
}

#[test]
fn open_shows_item_and_offers_actions_when_pending() {
    let wf = viewing("PENDING");
    assert!(wf.is_open());
    assert!(wf.can_moderate());
    assert_eq!(wf.current_item().map(|a| a.id.clone()), Some(ItemId::Int(1)));
}

#[test]
fn non_pending_item_is_read_only() {
    let mut wf = viewing("VALIDATED");
    assert!(!wf.can_moderate());
    assert_eq!(wf.approve(), Err(WorkflowError::NotPending));
    assert_eq!(wf.begin_request_changes(), Err(WorkflowError::NotPending));
    assert!(matches!(wf.state(), ReviewState::Viewing { .. }));
}

#[test]
fn actions_without_open_item_fail() {
    let mut wf = ModerationWorkflow::<Assessment>::new();
    assert_eq!(wf.reject(), Err(WorkflowError::NoOpenItem));
    assert_eq!(wf.submit_comment(), Err(WorkflowError::NoOpenItem));
}

// =============================================================
// Approve / reject
// =============================================================

#[test]
fn approve_builds_payload_and_enters_submitting() {
    let mut wf = viewing("PENDING");
    let request = wf.approve().unwrap();
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({ "model": "assessment", "id": 1, "action": "approve" })
    );
    assert!(wf.is_submitting());
    assert_eq!(wf.close(), Err(WorkflowError::Busy));
    assert_eq!(wf.approve(), Err(WorkflowError::Busy));
}

#[test]
fn approve_success_closes_modal_and_patches_list() {
    let mut items = vec![assessment(1, "PENDING"), assessment(2, "PENDING")];
    let mut wf = viewing("PENDING");
    wf.approve().unwrap();

    let outcome = wf.complete(&ModerateResponse::default()).unwrap();
    assert_eq!(outcome.status, CanonicalStatus::Validated);
    assert_eq!(wf.state(), &ReviewState::Closed);

    assert!(apply_outcome(&mut items, &outcome));
    assert_eq!(items[0].canonical_status(), CanonicalStatus::Validated);
    assert_eq!(items[1].canonical_status(), CanonicalStatus::Pending);
}

#[test]
fn server_status_wins_over_action_target() {
    let mut wf = viewing("PENDING");
    wf.reject().unwrap();
    let response = ModerateResponse { status: Some("DECLINED".to_owned()), ..ModerateResponse::default() };
    let outcome = wf.complete(&response).unwrap();
    assert_eq!(outcome.status, CanonicalStatus::Rejected);
    assert_eq!(outcome.action, ModerationAction::Reject);
}

#[test]
fn unrecognized_server_status_falls_back_to_action_target() {
    let mut wf = viewing("PENDING");
    wf.approve().unwrap();
    let response = ModerateResponse { status: Some("success".to_owned()), ..ModerateResponse::default() };
    let outcome = wf.complete(&response).unwrap();
    assert_eq!(outcome.status, CanonicalStatus::Validated);

    let refetched = wf.reconcile(vec![assessment(1, "PENDING")]);
    assert_eq!(refetched[0].canonical_status(), CanonicalStatus::Validated);
}

#[test]
fn failure_returns_to_viewing_without_touching_list() {
    let items = vec![assessment(1, "PENDING")];
    let mut wf = viewing("PENDING");
    wf.reject().unwrap();
    wf.fail().unwrap();
    assert!(matches!(wf.state(), ReviewState::Viewing { .. }));
    assert!(wf.can_moderate());
    assert_eq!(items[0].canonical_status(), CanonicalStatus::Pending);
}

#[test]
fn complete_and_fail_require_submitting() {
    let mut wf = viewing("PENDING");
    assert_eq!(wf.complete(&ModerateResponse::default()), Err(WorkflowError::NotSubmitting));
    assert_eq!(wf.fail(), Err(WorkflowError::NotSubmitting));
}

// =============================================================
// Request changes
// =============================================================

#[test]
fn empty_comment_blocks_submission_with_inline_error() {
    let mut wf = viewing("PENDING");
    wf.begin_request_changes().unwrap();
    wf.update_comment("   \n\t");
    assert_eq!(wf.submit_comment(), Err(WorkflowError::EmptyComment));
    assert!(wf.is_awaiting_comment());
    assert_eq!(wf.comment_error(), Some(EMPTY_COMMENT_MESSAGE));
}

#[test]
fn typing_clears_inline_error() {
    let mut wf = viewing("PENDING");
    wf.begin_request_changes().unwrap();
    let _ = wf.submit_comment();
    wf.update_comment("Fix question 3");
    assert_eq!(wf.comment_error(), None);
    assert_eq!(wf.comment_draft(), Some("Fix question 3"));
}

#[test]
fn comment_is_trimmed_in_payload_and_outcome() {
    let mut wf = viewing("PENDING");
    wf.begin_request_changes().unwrap();
    wf.update_comment("  Please add an answer key.  ");
    let request = wf.submit_comment().unwrap();
    assert_eq!(request.action, ModerationAction::RequestChanges);
    assert_eq!(request.moderation_comment.as_deref(), Some("Please add an answer key."));

    let outcome = wf.complete(&ModerateResponse::default()).unwrap();
    assert_eq!(outcome.status, CanonicalStatus::RequestChanges);
    assert_eq!(outcome.comment.as_deref(), Some("Please add an answer key."));
    assert_eq!(outcome.action.success_message(), "Revision request sent to the creator.");
}

#[test]
fn cancel_comment_returns_to_viewing() {
    let mut wf = viewing("PENDING");
    wf.begin_request_changes().unwrap();
    wf.cancel_comment();
    assert!(matches!(wf.state(), ReviewState::Viewing { .. }));
}

#[test]
fn actions_serialize_snake_case() {
    assert_eq!(serde_json::to_value(ModerationAction::RequestChanges).unwrap(), json!("request_changes"));
    assert_eq!(serde_json::to_value(ModerationAction::RequestReview).unwrap(), json!("request_review"));
    assert!(ModerationAction::RequestChanges.requires_comment());
    assert!(!ModerationAction::Approve.requires_comment());
}

// =============================================================
// Re-fetch reconciliation
// =============================================================

fn approve_first(wf: &mut ModerationWorkflow<Assessment>) {
    wf.open(assessment(1, "PENDING")).unwrap();
    wf.approve().unwrap();
    wf.complete(&ModerateResponse::default()).unwrap();
}

#[test]
fn stale_refetch_keeps_confirmed_status() {
    let mut wf = ModerationWorkflow::new();
    approve_first(&mut wf);
    let merged = wf.reconcile(vec![assessment(1, "PENDING")]);
    assert_eq!(merged[0].canonical_status(), CanonicalStatus::Validated);
}

#[test]
fn agreeing_refetch_is_kept_and_clears_ledger() {
    let mut wf = ModerationWorkflow::new();
    approve_first(&mut wf);
    let merged = wf.reconcile(vec![assessment(1, "APPROVED")]);
    assert_eq!(merged[0].canonical_status(), CanonicalStatus::Validated);

    // Ledger is empty now: a later pending row is taken as-is.
    let later = wf.reconcile(vec![assessment(1, "PENDING")]);
    assert_eq!(later[0].canonical_status(), CanonicalStatus::Pending);
}

#[test]
fn newer_server_decision_wins() {
    let mut wf = ModerationWorkflow::new();
    approve_first(&mut wf);
    let merged = wf.reconcile(vec![assessment(1, "REJECTED")]);
    assert_eq!(merged[0].canonical_status(), CanonicalStatus::Rejected);
}

#[test]
fn reconcile_does_not_disturb_open_modal() {
    let mut wf = ModerationWorkflow::new();
    approve_first(&mut wf);
    wf.open(assessment(2, "PENDING")).unwrap();
    let _ = wf.reconcile(vec![assessment(1, "PENDING"), assessment(2, "PENDING")]);
    assert_eq!(wf.current_item().map(|a| a.id.clone()), Some(ItemId::Int(2)));
    assert!(wf.can_moderate());
}
