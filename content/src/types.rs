//! Backend DTOs mirrored from the content API.
//!
//! DESIGN
//! ======
//! Records are deserialized leniently: optional fields default, numeric and
//! string spellings of ids/grades are both accepted, and `status` stays raw
//! text. Canonicalization happens through [`Moderatable::canonical_status`],
//! never at decode time, so unknown backend values survive a round trip.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::listing::Listable;
use crate::resource::ResourceKind;
use crate::status::CanonicalStatus;
use crate::workflow::Moderatable;

/// Record identifier; the backend uses integers for content and may use
/// strings (UUIDs) for profiles.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Int(i64),
    Str(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>().map_or_else(|_| Self::Str(s.to_owned()), Self::Int))
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Accept `"7"`, `7`, `7.0` or `null` and yield an optional string.
fn opt_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        Some(serde_json::Value::Bool(b)) => Some(b.to_string()),
        Some(other @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => {
            // Nested objects appear when the backend expands a relation; prefer its name.
            other
                .get("name")
                .or_else(|| other.get("title"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        }
    })
}

fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                serde_json::Value::Object(map) => map.get("name").and_then(|v| v.as_str()).map(str::to_owned),
                _ => None,
            })
            .collect(),
        Some(serde_json::Value::String(s)) => {
            s.split(',').map(str::trim).filter(|p| !p.is_empty()).map(str::to_owned).collect()
        }
        _ => Vec::new(),
    })
}

// =============================================================================
// MODERATABLE RECORDS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "AssessmentRecord")]
pub struct Assessment {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub assessment_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub lesson: Option<String>,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub marks: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "GameRecord")]
pub struct Game {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub game_type: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub grade: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub subject: Option<String>,
    #[serde(default)]
    pub game_url: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A teacher registration awaiting verification.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: ItemId,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub profile: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub school: Option<String>,
    #[serde(default)]
    pub qualification: Option<String>,
    #[serde(default, deserialize_with = "string_list")]
    pub subjects: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Teacher {
    #[must_use]
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone().unwrap_or_default()
        } else {
            name.to_owned()
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "LessonRecord")]
pub struct Lesson {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub topic: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub grade: Option<String>,
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

// =============================================================================
// WIRE SHAPES
// =============================================================================
//
// The backend spells some fields two ways (`type` / `assessment_type`,
// `title` / `name`, `link` / `game_url`) and may send both. Records decode
// through these shapes so either spelling is accepted and the primary one
// wins when both are present.

#[derive(Deserialize)]
struct AssessmentRecord {
    id: ItemId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    assessment_type: Option<String>,
    #[serde(default, rename = "type")]
    type_alias: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    grade: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    lesson: Option<String>,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    marks: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    created_by: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    moderation_comment: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<AssessmentRecord> for Assessment {
    fn from(r: AssessmentRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            assessment_type: r.assessment_type.or(r.type_alias),
            grade: r.grade,
            subject: r.subject,
            lesson: r.lesson,
            due_date: r.due_date,
            marks: r.marks,
            created_by: r.created_by,
            status: r.status,
            moderation_comment: r.moderation_comment,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Deserialize)]
struct GameRecord {
    id: ItemId,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    game_type: Option<String>,
    #[serde(default, rename = "type")]
    type_alias: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    grade: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    subject: Option<String>,
    #[serde(default)]
    game_url: Option<String>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    created_by: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    moderation_comment: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<GameRecord> for Game {
    fn from(r: GameRecord) -> Self {
        Self {
            id: r.id,
            name: r.name.or(r.title).unwrap_or_default(),
            description: r.description,
            game_type: r.game_type.or(r.type_alias),
            grade: r.grade,
            subject: r.subject,
            game_url: r.game_url.or(r.link),
            created_by: r.created_by,
            status: r.status,
            moderation_comment: r.moderation_comment,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Deserialize)]
struct LessonRecord {
    id: ItemId,
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    subject: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    topic: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    grade: Option<String>,
    #[serde(default)]
    resource_type: Option<String>,
    #[serde(default, rename = "type")]
    type_alias: Option<String>,
    #[serde(default)]
    file: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    created_by: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    moderation_comment: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
}

impl From<LessonRecord> for Lesson {
    fn from(r: LessonRecord) -> Self {
        Self {
            id: r.id,
            title: r.title,
            description: r.description,
            subject: r.subject,
            topic: r.topic,
            grade: r.grade,
            resource_type: r.resource_type.or(r.type_alias),
            file: r.file,
            created_by: r.created_by,
            status: r.status,
            moderation_comment: r.moderation_comment,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    #[serde(default)]
    pub id: Option<ItemId>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub grade: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub created_by: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

macro_rules! moderatable {
    ($ty:ty, $kind:expr) => {
        impl Moderatable for $ty {
            const RESOURCE: ResourceKind = $kind;

            fn item_id(&self) -> &ItemId {
                &self.id
            }

            fn raw_status(&self) -> Option<&str> {
                self.status.as_deref()
            }

            fn moderation_comment(&self) -> Option<&str> {
                self.moderation_comment.as_deref()
            }

            fn apply_moderation(&mut self, status: CanonicalStatus, comment: Option<String>) {
                self.status = Some(status.as_str().to_owned());
                self.moderation_comment = comment;
            }

            fn created_at(&self) -> Option<&str> {
                self.created_at.as_deref()
            }
        }
    };
}

moderatable!(Assessment, ResourceKind::Assessment);
moderatable!(Game, ResourceKind::Game);
moderatable!(Teacher, ResourceKind::Teacher);
moderatable!(Lesson, ResourceKind::Lesson);
moderatable!(Subject, ResourceKind::Subject);

impl Listable for Assessment {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }

    fn kind(&self) -> Option<&str> {
        self.assessment_type.as_deref()
    }

    fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }
}

impl Listable for Game {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn kind(&self) -> Option<&str> {
        self.game_type.as_deref()
    }

    fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }
}

impl Listable for Teacher {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Owned(self.full_name())
    }
}

impl Listable for Lesson {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.title)
    }

    fn kind(&self) -> Option<&str> {
        self.resource_type.as_deref()
    }

    fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }
}

impl Listable for Subject {
    fn search_text(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.name)
    }

    fn grade(&self) -> Option<&str> {
        self.grade.as_deref()
    }
}

// =============================================================================
// MODERATION
// =============================================================================

/// Body of the moderate endpoint's success response. Every field is optional
/// because the backend sometimes answers with only a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModerateResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub moderation_comment: Option<String>,
    #[serde(default, alias = "detail")]
    pub message: Option<String>,
}

// =============================================================================
// DASHBOARD
// =============================================================================

/// One labelled value in a chart series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    #[serde(alias = "month", alias = "status")]
    pub label: String,
    #[serde(alias = "count", alias = "total")]
    pub value: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSummary {
    pub total_subjects: u64,
    pub total_lessons: u64,
    pub total_assessments: u64,
    pub total_games: u64,
    pub total_teachers: u64,
    pub pending_reviews: u64,
    pub approved: u64,
    pub rejected: u64,
    pub changes_requested: u64,
    pub monthly_submissions: Vec<SeriesPoint>,
    pub status_breakdown: Vec<SeriesPoint>,
}

impl DashboardSummary {
    /// Status breakdown for the donut chart, derived from the counters when
    /// the backend does not send one.
    #[must_use]
    pub fn status_series(&self) -> Vec<SeriesPoint> {
        if !self.status_breakdown.is_empty() {
            return self.status_breakdown.clone();
        }
        [
            (CanonicalStatus::Pending, self.pending_reviews),
            (CanonicalStatus::Validated, self.approved),
            (CanonicalStatus::RequestChanges, self.changes_requested),
            (CanonicalStatus::Rejected, self.rejected),
        ]
        .into_iter()
        .map(|(status, value)| SeriesPoint { label: status.label().to_owned(), value })
        .collect()
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// The signed-in user as returned by the login endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionUser {
    pub id: Option<ItemId>,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Option<String>,
}

impl SessionUser {
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        let name = name.trim();
        if name.is_empty() { self.email.clone() } else { name.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(alias = "access", alias = "key")]
    pub token: String,
    #[serde(default)]
    pub user: Option<SessionUser>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

// =============================================================================
// CREATE REQUESTS
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopicDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Creation status chosen by the subject wizard's "active" toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftStatus {
    Pending,
    Draft,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateSubjectRequest {
    pub name: String,
    pub grade: String,
    pub description: String,
    pub status: DraftStatus,
    /// Always `null`: the cover image picked in the wizard is not uploaded.
    pub thumbnail: Option<String>,
    pub topics: Vec<TopicDraft>,
}

/// A file picked by the user, held in memory until submit.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CreateLessonRequest {
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub grade: String,
    pub description: String,
    pub resource_type: String,
    pub status: DraftStatus,
    pub file: Option<FileUpload>,
}

impl CreateLessonRequest {
    /// Text fields in multipart order.
    #[must_use]
    pub fn form_fields(&self) -> Vec<(String, String)> {
        let status = match self.status {
            DraftStatus::Pending => "PENDING",
            DraftStatus::Draft => "DRAFT",
        };
        [
            ("title", self.title.as_str()),
            ("subject", self.subject.as_str()),
            ("topic", self.topic.as_str()),
            ("grade", self.grade.as_str()),
            ("description", self.description.as_str()),
            ("resource_type", self.resource_type.as_str()),
            ("status", status),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateAssessmentRequest {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub assessment_type: String,
    pub grade: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marks: Option<f64>,
    pub status: DraftStatus,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CreateGameRequest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub game_type: String,
    pub grade: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_url: Option<String>,
    pub status: DraftStatus,
}
