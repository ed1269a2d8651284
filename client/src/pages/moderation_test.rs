use super::*;

use content::types::Game;
use content::ModerationAction;

fn game(status: &str, comment: Option<&str>) -> Game {
    let value = serde_json::json!({
        "id": 7,
        "name": "Number Hunt",
        "type": "puzzle",
        "status": status,
        "moderation_comment": comment,
    });
    serde_json::from_value(value).expect("game fixture")
}

// =============================================================================
// review_view
// =============================================================================

#[test]
fn closed_workflow_has_no_view() {
    let workflow = ModerationWorkflow::<Game>::new();
    assert_eq!(review_view(&workflow), None);
}

#[test]
fn pending_item_offers_actions() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("pending", None)).expect("open");

    let view = review_view(&workflow).expect("view");
    assert_eq!(view.title, "Number Hunt");
    assert_eq!(view.status, CanonicalStatus::Pending);
    assert!(view.can_moderate);
    assert!(!view.awaiting_comment);
    assert_eq!(view.comment, None);
}

#[test]
fn reviewed_item_is_read_only_and_shows_comment() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("changes_requested", Some("Fix the intro"))).expect("open");

    let view = review_view(&workflow).expect("view");
    assert!(!view.can_moderate);
    assert_eq!(view.comment.as_deref(), Some("Fix the intro"));
}

#[test]
fn blank_comment_is_hidden() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("rejected", Some("   "))).expect("open");
    assert_eq!(review_view(&workflow).expect("view").comment, None);
}

#[test]
fn comment_draft_and_error_are_projected() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("pending", None)).expect("open");
    workflow.begin_request_changes().expect("begin");
    workflow.update_comment("  ");
    assert!(workflow.submit_comment().is_err());

    let view = review_view(&workflow).expect("view");
    assert!(view.awaiting_comment);
    assert_eq!(view.draft, "  ");
    assert!(view.error.is_some());
}

// =============================================================================
// apply_command
// =============================================================================

#[test]
fn approve_command_yields_request_and_locks_modal() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("pending", None)).expect("open");

    let request = apply_command(&mut workflow, ReviewCommand::Approve).expect("request");
    assert_eq!(request.action, ModerationAction::Approve);
    assert!(review_view(&workflow).expect("view").submitting);
}

#[test]
fn close_is_ignored_while_submitting() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("pending", None)).expect("open");
    apply_command(&mut workflow, ReviewCommand::Reject).expect("request");

    assert_eq!(apply_command(&mut workflow, ReviewCommand::Close), None);
    assert!(workflow.is_submitting());
}

#[test]
fn request_changes_flow_sends_trimmed_comment() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("pending", None)).expect("open");

    assert_eq!(apply_command(&mut workflow, ReviewCommand::BeginRequestChanges), None);
    assert_eq!(apply_command(&mut workflow, ReviewCommand::UpdateComment(" Add hints ".into())), None);
    let request = apply_command(&mut workflow, ReviewCommand::SubmitComment).expect("request");

    assert_eq!(request.action, ModerationAction::RequestChanges);
    assert_eq!(request.moderation_comment.as_deref(), Some("Add hints"));
}

#[test]
fn cancel_comment_returns_to_details() {
    let mut workflow = ModerationWorkflow::new();
    workflow.open(game("pending", None)).expect("open");
    apply_command(&mut workflow, ReviewCommand::BeginRequestChanges);
    apply_command(&mut workflow, ReviewCommand::CancelComment);

    let view = review_view(&workflow).expect("view");
    assert!(!view.awaiting_comment);
    assert!(view.can_moderate);
}

// =============================================================================
// status_options
// =============================================================================

#[test]
fn status_options_lead_with_all() {
    let options = status_options();
    assert_eq!(options.first(), Some(&("", "All statuses")));
    assert_eq!(options.len(), CanonicalStatus::ALL.len() + 1);
}
