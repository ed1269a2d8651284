//! Three-step subject wizard: details, topics, publish preview.
//!
//! DESIGN
//! ======
//! Topics live in a local array until the subject itself is submitted; there
//! is no per-topic endpoint. The cover image chosen on the details step is
//! kept for the preview only and the create call always carries
//! `thumbnail: null`.

#[cfg(test)]
#[path = "subject_test.rs"]
mod subject_test;

use super::require;
use crate::error::FieldError;
use crate::types::{CreateSubjectRequest, DraftStatus, TopicDraft};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubjectStep {
    Details,
    Topics,
    Publish,
}

impl SubjectStep {
    pub const ALL: [Self; 3] = [Self::Details, Self::Topics, Self::Publish];

    /// 1-based position for the step indicator.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Details => 1,
            Self::Topics => 2,
            Self::Publish => 3,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Details => "Subject Details",
            Self::Topics => "Topics",
            Self::Publish => "Publish",
        }
    }
}

/// The add-topic modal's fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TopicForm {
    pub name: String,
    pub description: String,
    pub error: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubjectWizard {
    step: SubjectStep,
    pub name: String,
    pub grade: String,
    pub description: String,
    /// Maps to `PENDING` when set, `DRAFT` otherwise.
    pub active: bool,
    /// Preview URL or file name of the chosen cover; never uploaded.
    pub cover_image: Option<String>,
    topics: Vec<TopicDraft>,
    topic_form: Option<TopicForm>,
}

impl Default for SubjectWizard {
    fn default() -> Self {
        Self {
            step: SubjectStep::Details,
            name: String::new(),
            grade: String::new(),
            description: String::new(),
            active: true,
            cover_image: None,
            topics: Vec::new(),
            topic_form: None,
        }
    }
}

impl SubjectWizard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn step(&self) -> SubjectStep {
        self.step
    }

    #[must_use]
    pub fn topics(&self) -> &[TopicDraft] {
        &self.topics
    }

    #[must_use]
    pub fn topic_form(&self) -> Option<&TopicForm> {
        self.topic_form.as_ref()
    }

    #[must_use]
    pub fn status(&self) -> DraftStatus {
        if self.active { DraftStatus::Pending } else { DraftStatus::Draft }
    }

    pub fn validate_details(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, &self.name, "name", "Subject name is required.");
        require(&mut errors, &self.grade, "grade", "Grade is required.");
        errors
    }

    fn validate_topics(&self) -> Vec<FieldError> {
        if self.topics.is_empty() {
            vec![FieldError::new("topics", "Add at least one topic.")]
        } else {
            Vec::new()
        }
    }

    /// Advance one step if the current one is complete.
    pub fn next(&mut self) -> Result<SubjectStep, Vec<FieldError>> {
        let (errors, to) = match self.step {
            SubjectStep::Details => (self.validate_details(), SubjectStep::Topics),
            SubjectStep::Topics => (self.validate_topics(), SubjectStep::Publish),
            SubjectStep::Publish => (Vec::new(), SubjectStep::Publish),
        };
        if !errors.is_empty() {
            return Err(errors);
        }
        self.step = to;
        Ok(to)
    }

    pub fn back(&mut self) -> SubjectStep {
        self.step = match self.step {
            SubjectStep::Details | SubjectStep::Topics => SubjectStep::Details,
            SubjectStep::Publish => SubjectStep::Topics,
        };
        self.step
    }

    // --- topic modal ---

    pub fn open_topic_form(&mut self) {
        self.topic_form = Some(TopicForm::default());
    }

    pub fn close_topic_form(&mut self) {
        self.topic_form = None;
    }

    pub fn update_topic_form(&mut self, name: &str, description: &str) {
        if let Some(form) = &mut self.topic_form {
            form.name = name.to_owned();
            form.description = description.to_owned();
            form.error = None;
        }
    }

    /// Add the modal's topic and close it. Blank and duplicate names keep the
    /// modal open with an inline error.
    pub fn save_topic(&mut self) -> Result<(), FieldError> {
        let Some(form) = &mut self.topic_form else {
            return Err(FieldError::new("topic", "No topic is being edited."));
        };
        let name = form.name.trim();
        let error = if name.is_empty() {
            Some(FieldError::new("name", "Topic name is required."))
        } else if self.topics.iter().any(|t| t.name.eq_ignore_ascii_case(name)) {
            Some(FieldError::new("name", "A topic with this name already exists."))
        } else {
            None
        };
        if let Some(err) = error {
            form.error = Some(err.message);
            return Err(err);
        }
        self.topics.push(TopicDraft { name: name.to_owned(), description: form.description.trim().to_owned() });
        self.topic_form = None;
        Ok(())
    }

    pub fn remove_topic(&mut self, index: usize) -> Option<TopicDraft> {
        (index < self.topics.len()).then(|| self.topics.remove(index))
    }

    /// Body for `POST /content/subjects/`, revalidating every step.
    pub fn build_request(&self) -> Result<CreateSubjectRequest, Vec<FieldError>> {
        let mut errors = self.validate_details();
        errors.extend(self.validate_topics());
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(CreateSubjectRequest {
            name: self.name.trim().to_owned(),
            grade: self.grade.trim().to_owned(),
            description: self.description.trim().to_owned(),
            status: self.status(),
            thumbnail: None,
            topics: self.topics.clone(),
        })
    }
}
