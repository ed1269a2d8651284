//! Review-modal state machine shared by every moderation list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page owns one `ModerationWorkflow<T>` per resource list. The workflow
//! decides which actions are offered, produces the `POST /content/moderate/`
//! payload, and records server-confirmed outcomes so a background re-fetch
//! cannot roll a moderated row back to a stale `PENDING`.
//!
//! STATES
//! ======
//! `Closed → Viewing → (AwaitingCommentInput →) Submitting → Closed`, with
//! `Submitting → Viewing` on failure. Only pending items can be moderated.

#[cfg(test)]
#[path = "workflow_test.rs"]
mod workflow_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::resource::ResourceKind;
use crate::status::{CanonicalStatus, lookup_status, normalize_status};
use crate::types::{ItemId, ModerateResponse};

/// Inline validation text for an empty request-changes comment.
pub const EMPTY_COMMENT_MESSAGE: &str = "Please provide a comment describing the requested changes.";

/// A record a content validator can act on.
pub trait Moderatable: Clone {
    const RESOURCE: ResourceKind;

    fn item_id(&self) -> &ItemId;
    fn raw_status(&self) -> Option<&str>;
    fn moderation_comment(&self) -> Option<&str>;
    fn apply_moderation(&mut self, status: CanonicalStatus, comment: Option<String>);

    fn created_at(&self) -> Option<&str> {
        None
    }

    fn canonical_status(&self) -> CanonicalStatus {
        normalize_status(self.raw_status(), Self::RESOURCE.synonyms())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModerationAction {
    Approve,
    Reject,
    RequestChanges,
    /// Accepted by the backend but not offered in the dashboard.
    RequestReview,
}

impl ModerationAction {
    /// Status the item ends up in when the server does not echo one back.
    #[must_use]
    pub fn target_status(self) -> CanonicalStatus {
        match self {
            Self::Approve => CanonicalStatus::Validated,
            Self::Reject => CanonicalStatus::Rejected,
            Self::RequestChanges => CanonicalStatus::RequestChanges,
            Self::RequestReview => CanonicalStatus::Pending,
        }
    }

    #[must_use]
    pub fn requires_comment(self) -> bool {
        matches!(self, Self::RequestChanges)
    }

    #[must_use]
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Approve => "Content approved.",
            Self::Reject => "Content rejected.",
            Self::RequestChanges => "Revision request sent to the creator.",
            Self::RequestReview => "Review requested.",
        }
    }
}

/// Body of `POST /content/moderate/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ModerateRequest {
    pub model: &'static str,
    pub id: ItemId,
    pub action: ModerationAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderation_comment: Option<String>,
}

impl ModerateRequest {
    #[must_use]
    pub fn new(kind: ResourceKind, id: ItemId, action: ModerationAction, comment: Option<String>) -> Self {
        Self { model: kind.model_name(), id, action, moderation_comment: comment }
    }
}

/// Server-confirmed result of a moderation action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModerationOutcome {
    pub id: ItemId,
    pub action: ModerationAction,
    pub status: CanonicalStatus,
    pub comment: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ReviewState<T> {
    Closed,
    Viewing { item: T },
    AwaitingCommentInput { item: T, draft: String, error: Option<String> },
    Submitting { item: T, action: ModerationAction, comment: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WorkflowError {
    #[error("only pending items can be moderated")]
    NotPending,
    #[error("Please provide a comment describing the requested changes.")]
    EmptyComment,
    #[error("no item is open for review")]
    NoOpenItem,
    #[error("a moderation request is already in flight")]
    Busy,
    #[error("no moderation request is in flight")]
    NotSubmitting,
}

/// Review state plus the ledger of confirmed outcomes.
#[derive(Clone, Debug)]
pub struct ModerationWorkflow<T> {
    state: ReviewState<T>,
    confirmed: HashMap<ItemId, (CanonicalStatus, Option<String>)>,
}

impl<T> Default for ModerationWorkflow<T> {
    fn default() -> Self {
        Self { state: ReviewState::Closed, confirmed: HashMap::new() }
    }
}

impl<T: Moderatable> ModerationWorkflow<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &ReviewState<T> {
        &self.state
    }

    /// Item shown in the review modal, if any.
    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        match &self.state {
            ReviewState::Closed => None,
            ReviewState::Viewing { item }
            | ReviewState::AwaitingCommentInput { item, .. }
            | ReviewState::Submitting { item, .. } => Some(item),
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        !matches!(self.state, ReviewState::Closed)
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, ReviewState::Submitting { .. })
    }

    #[must_use]
    pub fn is_awaiting_comment(&self) -> bool {
        matches!(self.state, ReviewState::AwaitingCommentInput { .. })
    }

    /// Action buttons are shown only for a pending item in `Viewing`.
    #[must_use]
    pub fn can_moderate(&self) -> bool {
        match &self.state {
            ReviewState::Viewing { item } => item.canonical_status().is_pending(),
            _ => false,
        }
    }

    #[must_use]
    pub fn comment_draft(&self) -> Option<&str> {
        match &self.state {
            ReviewState::AwaitingCommentInput { draft, .. } => Some(draft),
            _ => None,
        }
    }

    #[must_use]
    pub fn comment_error(&self) -> Option<&str> {
        match &self.state {
            ReviewState::AwaitingCommentInput { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    /// Open the review modal for `item`.
    pub fn open(&mut self, item: T) -> Result<(), WorkflowError> {
        if self.is_submitting() {
            return Err(WorkflowError::Busy);
        }
        self.state = ReviewState::Viewing { item };
        Ok(())
    }

    pub fn close(&mut self) -> Result<(), WorkflowError> {
        if self.is_submitting() {
            return Err(WorkflowError::Busy);
        }
        self.state = ReviewState::Closed;
        Ok(())
    }

    /// Open the request-changes comment sub-modal.
    pub fn begin_request_changes(&mut self) -> Result<(), WorkflowError> {
        let item = self.take_viewing_pending()?;
        self.state = ReviewState::AwaitingCommentInput { item, draft: String::new(), error: None };
        Ok(())
    }

    /// Replace the comment draft; clears any inline error.
    pub fn update_comment(&mut self, text: &str) {
        if let ReviewState::AwaitingCommentInput { draft, error, .. } = &mut self.state {
            text.clone_into(draft);
            *error = None;
        }
    }

    /// Dismiss the comment sub-modal and return to the detail view.
    pub fn cancel_comment(&mut self) {
        if let ReviewState::AwaitingCommentInput { item, .. } = &self.state {
            self.state = ReviewState::Viewing { item: item.clone() };
        }
    }

    /// Submit the request-changes comment.
    ///
    /// A blank comment keeps the sub-modal open with an inline error and
    /// produces no request.
    pub fn submit_comment(&mut self) -> Result<ModerateRequest, WorkflowError> {
        let ReviewState::AwaitingCommentInput { item, draft, error } = &mut self.state else {
            return Err(WorkflowError::NoOpenItem);
        };
        let comment = draft.trim();
        if comment.is_empty() {
            *error = Some(EMPTY_COMMENT_MESSAGE.to_owned());
            return Err(WorkflowError::EmptyComment);
        }
        let comment = comment.to_owned();
        let item = item.clone();
        let request = ModerateRequest::new(
            T::RESOURCE,
            item.item_id().clone(),
            ModerationAction::RequestChanges,
            Some(comment.clone()),
        );
        self.state = ReviewState::Submitting { item, action: ModerationAction::RequestChanges, comment: Some(comment) };
        Ok(request)
    }

    pub fn approve(&mut self) -> Result<ModerateRequest, WorkflowError> {
        self.submit_direct(ModerationAction::Approve)
    }

    pub fn reject(&mut self) -> Result<ModerateRequest, WorkflowError> {
        self.submit_direct(ModerationAction::Reject)
    }

    fn submit_direct(&mut self, action: ModerationAction) -> Result<ModerateRequest, WorkflowError> {
        let item = self.take_viewing_pending()?;
        let request = ModerateRequest::new(T::RESOURCE, item.item_id().clone(), action, None);
        self.state = ReviewState::Submitting { item, action, comment: None };
        Ok(request)
    }

    fn take_viewing_pending(&self) -> Result<T, WorkflowError> {
        match &self.state {
            ReviewState::Viewing { item } if item.canonical_status().is_pending() => Ok(item.clone()),
            ReviewState::Viewing { .. } => Err(WorkflowError::NotPending),
            ReviewState::Submitting { .. } => Err(WorkflowError::Busy),
            _ => Err(WorkflowError::NoOpenItem),
        }
    }

    /// Record a successful response and close the modal.
    ///
    /// The server's status and comment win; when absent or unrecognized, the
    /// action's target status and the submitted comment are used.
    pub fn complete(&mut self, response: &ModerateResponse) -> Result<ModerationOutcome, WorkflowError> {
        let ReviewState::Submitting { item, action, comment } = &self.state else {
            return Err(WorkflowError::NotSubmitting);
        };
        let status = response
            .status
            .as_deref()
            .and_then(|raw| lookup_status(raw, T::RESOURCE.synonyms()))
            .unwrap_or_else(|| action.target_status());
        let comment = response.moderation_comment.clone().or_else(|| comment.clone());
        let outcome = ModerationOutcome { id: item.item_id().clone(), action: *action, status, comment };

        tracing::debug!(model = T::RESOURCE.model_name(), id = %outcome.id, status = %status, "moderation confirmed");
        self.confirmed.insert(outcome.id.clone(), (outcome.status, outcome.comment.clone()));
        self.state = ReviewState::Closed;
        Ok(outcome)
    }

    /// Revert to the detail view after a failed request.
    pub fn fail(&mut self) -> Result<(), WorkflowError> {
        let ReviewState::Submitting { item, .. } = &self.state else {
            return Err(WorkflowError::NotSubmitting);
        };
        self.state = ReviewState::Viewing { item: item.clone() };
        Ok(())
    }

    /// Merge a background re-fetch with confirmed outcomes.
    ///
    /// A fetched row still reporting `PENDING` for a confirmed item is a
    /// stale read and keeps the confirmed status. Once the server agrees the
    /// ledger entry is dropped; a different non-pending server status wins.
    pub fn reconcile(&mut self, mut fetched: Vec<T>) -> Vec<T> {
        for item in &mut fetched {
            let Some((status, comment)) = self.confirmed.get(item.item_id()).cloned() else {
                continue;
            };
            let server_status = item.canonical_status();
            if server_status == status {
                self.confirmed.remove(item.item_id());
            } else if server_status.is_pending() {
                item.apply_moderation(status, comment);
            } else {
                self.confirmed.remove(item.item_id());
            }
        }
        fetched
    }
}

/// Patch the row matching `outcome` in place. Returns whether a row matched.
pub fn apply_outcome<T: Moderatable>(items: &mut [T], outcome: &ModerationOutcome) -> bool {
    let Some(row) = items.iter_mut().find(|row| row.item_id() == &outcome.id) else {
        return false;
    };
    row.apply_moderation(outcome.status, outcome.comment.clone());
    true
}
