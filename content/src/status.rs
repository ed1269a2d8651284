//! Canonical moderation status and per-resource synonym tables.
//!
//! DESIGN
//! ======
//! The backend stores `status` as free text and each resource uses its own
//! vocabulary (`PUBLISHED`, `REVIEW_REQUESTED`, `VERIFIED`, ...). The UI only
//! ever reasons about four values, so every raw string is folded through a
//! resource-specific table into [`CanonicalStatus`] before display or
//! filtering.

#[cfg(test)]
#[path = "status_test.rs"]
mod status_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The four statuses the dashboard renders and filters on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalStatus {
    /// Approved by a content validator. Shown as "Approved".
    Validated,
    /// Awaiting review. Also the fallback for unknown raw values.
    Pending,
    /// Rejected by a content validator.
    Rejected,
    /// Sent back to the creator with a comment.
    RequestChanges,
}

/// Colour family for a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeTone {
    Green,
    Amber,
    Red,
    Indigo,
}

impl BadgeTone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Amber => "amber",
            Self::Red => "red",
            Self::Indigo => "indigo",
        }
    }
}

impl CanonicalStatus {
    pub const ALL: [Self; 4] = [Self::Pending, Self::Validated, Self::RequestChanges, Self::Rejected];

    /// Wire spelling used when sending or patching a status.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Validated => "VALIDATED",
            Self::Pending => "PENDING",
            Self::Rejected => "REJECTED",
            Self::RequestChanges => "REQUEST_CHANGES",
        }
    }

    /// Human-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Validated => "Approved",
            Self::Pending => "Pending Review",
            Self::Rejected => "Rejected",
            Self::RequestChanges => "Revision Requested",
        }
    }

    #[must_use]
    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Validated => BadgeTone::Green,
            Self::Pending => BadgeTone::Amber,
            Self::Rejected => BadgeTone::Red,
            Self::RequestChanges => BadgeTone::Indigo,
        }
    }

    /// CSS class list for the status badge element.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self.tone() {
            BadgeTone::Green => "status-badge status-badge--green",
            BadgeTone::Amber => "status-badge status-badge--amber",
            BadgeTone::Red => "status-badge status-badge--red",
            BadgeTone::Indigo => "status-badge status-badge--indigo",
        }
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Match a raw value that already names a canonical status.
    ///
    /// `APPROVED` is accepted as an alias of `VALIDATED`.
    fn from_canonical_name(upper: &str) -> Option<Self> {
        match upper {
            "VALIDATED" | "APPROVED" => Some(Self::Validated),
            "PENDING" => Some(Self::Pending),
            "REJECTED" => Some(Self::Rejected),
            "REQUEST_CHANGES" => Some(Self::RequestChanges),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a user-typed status name is not one of the four.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status `{0}` (expected pending, approved, rejected or request-changes)")]
pub struct UnknownStatus(pub String);

impl FromStr for CanonicalStatus {
    type Err = UnknownStatus;

    /// Strict parse for filter input; unlike [`normalize_status`] this does
    /// not fall back to `Pending`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace(['-', ' '], "_");
        Self::from_canonical_name(&key).ok_or_else(|| UnknownStatus(s.to_owned()))
    }
}

/// Raw backend spelling → canonical status, keys in upper case.
pub type SynonymTable = &'static [(&'static str, CanonicalStatus)];

pub const ASSESSMENT_SYNONYMS: SynonymTable = &[
    ("APPROVED", CanonicalStatus::Validated),
    ("VALIDATED", CanonicalStatus::Validated),
    ("PUBLISHED", CanonicalStatus::Validated),
    ("PENDING", CanonicalStatus::Pending),
    ("SUBMITTED", CanonicalStatus::Pending),
    ("IN_REVIEW", CanonicalStatus::Pending),
    ("DRAFT", CanonicalStatus::Pending),
    ("REJECTED", CanonicalStatus::Rejected),
    ("DECLINED", CanonicalStatus::Rejected),
    ("REQUEST_CHANGES", CanonicalStatus::RequestChanges),
    ("REVIEW_REQUESTED", CanonicalStatus::RequestChanges),
    ("CHANGES_REQUESTED", CanonicalStatus::RequestChanges),
    ("REVISION_REQUESTED", CanonicalStatus::RequestChanges),
];

pub const GAME_SYNONYMS: SynonymTable = &[
    ("APPROVED", CanonicalStatus::Validated),
    ("VALIDATED", CanonicalStatus::Validated),
    ("ACTIVE", CanonicalStatus::Validated),
    ("PENDING", CanonicalStatus::Pending),
    ("DRAFT", CanonicalStatus::Pending),
    ("SUBMITTED", CanonicalStatus::Pending),
    ("REJECTED", CanonicalStatus::Rejected),
    ("REQUEST_CHANGES", CanonicalStatus::RequestChanges),
    ("REVIEW_REQUESTED", CanonicalStatus::RequestChanges),
    ("CHANGES_REQUESTED", CanonicalStatus::RequestChanges),
];

pub const TEACHER_SYNONYMS: SynonymTable = &[
    ("APPROVED", CanonicalStatus::Validated),
    ("VALIDATED", CanonicalStatus::Validated),
    ("ACTIVE", CanonicalStatus::Validated),
    ("VERIFIED", CanonicalStatus::Validated),
    ("PENDING", CanonicalStatus::Pending),
    ("UNVERIFIED", CanonicalStatus::Pending),
    ("REJECTED", CanonicalStatus::Rejected),
    ("SUSPENDED", CanonicalStatus::Rejected),
    ("REQUEST_CHANGES", CanonicalStatus::RequestChanges),
    ("REVIEW_REQUESTED", CanonicalStatus::RequestChanges),
    ("INCOMPLETE", CanonicalStatus::RequestChanges),
];

/// Shared by lessons and subjects.
pub const CURRICULUM_SYNONYMS: SynonymTable = &[
    ("APPROVED", CanonicalStatus::Validated),
    ("VALIDATED", CanonicalStatus::Validated),
    ("PUBLISHED", CanonicalStatus::Validated),
    ("PENDING", CanonicalStatus::Pending),
    ("DRAFT", CanonicalStatus::Pending),
    ("SUBMITTED", CanonicalStatus::Pending),
    ("REJECTED", CanonicalStatus::Rejected),
    ("REQUEST_CHANGES", CanonicalStatus::RequestChanges),
    ("REVIEW_REQUESTED", CanonicalStatus::RequestChanges),
];

/// Strict lookup: `None` when `raw` is neither in `table` nor a canonical name.
#[must_use]
pub fn lookup_status(raw: &str, table: SynonymTable) -> Option<CanonicalStatus> {
    let key = raw.trim().to_ascii_uppercase();
    table
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, status)| *status)
        .or_else(|| CanonicalStatus::from_canonical_name(&key))
}

/// Fold a raw backend status into the canonical domain.
///
/// Lookup is case-insensitive. Values missing from `table` that already name
/// a canonical status pass through; anything else, including `None`, is
/// `Pending`.
#[must_use]
pub fn normalize_status(raw: Option<&str>, table: SynonymTable) -> CanonicalStatus {
    raw.and_then(|raw| lookup_status(raw, table)).unwrap_or(CanonicalStatus::Pending)
}
