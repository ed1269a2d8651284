//! Lesson wizard: shared details, then either a material upload or a quiz.
//!
//! The details collected on the first screen travel to the next route as
//! query parameters (`title`, `subject`, `topic`, `grade`, `description`).

#[cfg(test)]
#[path = "lesson_test.rs"]
mod lesson_test;

use super::require;
use crate::error::FieldError;
use crate::types::{CreateLessonRequest, DraftStatus, FileUpload};

pub const QUIZ_ROUTE: &str = "/lessons/quiz";
pub const MATERIAL_ROUTE: &str = "/lessons/new";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonKind {
    Material,
    Quiz,
}

impl LessonKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Material => "Learning Material",
            Self::Quiz => "Quiz",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LessonDetails {
    pub title: String,
    pub subject: String,
    pub topic: String,
    pub grade: String,
    pub description: String,
}

impl LessonDetails {
    const KEYS: [&'static str; 5] = ["title", "subject", "topic", "grade", "description"];

    fn values(&self) -> [&str; 5] {
        [
            self.title.as_str(),
            self.subject.as_str(),
            self.topic.as_str(),
            self.grade.as_str(),
            self.description.as_str(),
        ]
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, &self.title, "title", "Lesson title is required.");
        require(&mut errors, &self.subject, "subject", "Subject is required.");
        require(&mut errors, &self.topic, "topic", "Topic is required.");
        require(&mut errors, &self.grade, "grade", "Grade is required.");
        errors
    }

    /// Encode as a query string without the leading `?`; empty fields are omitted.
    #[must_use]
    pub fn to_query(&self) -> String {
        Self::KEYS
            .iter()
            .zip(self.values())
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v.trim())))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a query string (leading `?` optional). Unknown keys are ignored
    /// and `+` is read as a space.
    #[must_use]
    pub fn from_query(query: &str) -> Self {
        let mut details = Self::default();
        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let raw = raw.replace('+', " ");
            let value = urlencoding::decode(&raw).map_or_else(|_| raw.clone(), |v| v.into_owned());
            let slot = match key {
                "title" => &mut details.title,
                "subject" => &mut details.subject,
                "topic" => &mut details.topic,
                "grade" => &mut details.grade,
                "description" => &mut details.description,
                _ => continue,
            };
            *slot = value;
        }
        details
    }

    /// Route that continues the wizard for `kind`, carrying these details.
    #[must_use]
    pub fn href(&self, kind: LessonKind) -> String {
        let base = match kind {
            LessonKind::Material => MATERIAL_ROUTE,
            LessonKind::Quiz => QUIZ_ROUTE,
        };
        let query = self.to_query();
        if query.is_empty() { base.to_owned() } else { format!("{base}?{query}") }
    }
}

/// Lesson resource type inferred from a file name.
#[must_use]
pub fn resource_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "pdf" => "pdf",
        "mp4" | "mov" | "webm" | "mkv" => "video",
        "mp3" | "wav" | "ogg" | "m4a" => "audio",
        "png" | "jpg" | "jpeg" | "gif" | "webp" => "image",
        _ => "document",
    }
}

/// Material branch of the lesson wizard.
#[derive(Clone, Debug, PartialEq)]
pub struct MaterialUpload {
    pub details: LessonDetails,
    pub file: Option<FileUpload>,
    pub publish: bool,
}

impl MaterialUpload {
    #[must_use]
    pub fn new(details: LessonDetails) -> Self {
        Self { details, file: None, publish: true }
    }

    /// Replace the picked file, returning the previous one.
    pub fn set_file(&mut self, file: Option<FileUpload>) -> Option<FileUpload> {
        std::mem::replace(&mut self.file, file)
    }

    /// Multipart body for `POST /content/lessons/`.
    pub fn build_request(&self) -> Result<CreateLessonRequest, Vec<FieldError>> {
        let mut errors = self.details.validate();
        let Some(file) = &self.file else {
            errors.push(FieldError::new("file", "Please choose a file to upload."));
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        let d = &self.details;
        Ok(CreateLessonRequest {
            title: d.title.trim().to_owned(),
            subject: d.subject.trim().to_owned(),
            topic: d.topic.trim().to_owned(),
            grade: d.grade.trim().to_owned(),
            description: d.description.trim().to_owned(),
            resource_type: resource_type_for(&file.file_name).to_owned(),
            status: if self.publish { DraftStatus::Pending } else { DraftStatus::Draft },
            file: Some(file.clone()),
        })
    }
}
