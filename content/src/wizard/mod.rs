//! Creation wizards: local form state that only leaves the process on the
//! final submit (and for quizzes, not at all).

pub mod lesson;
pub mod quiz;
pub mod subject;

pub use lesson::{LessonDetails, LessonKind, MaterialUpload};
pub use quiz::{AnswerOption, Question, QuizBuilder, QuizModal};
pub use subject::{SubjectStep, SubjectWizard, TopicForm};

use crate::error::FieldError;

/// Push `message` for `field` when `value` is blank.
fn require(errors: &mut Vec<FieldError>, value: &str, field: &'static str, message: &'static str) {
    if value.trim().is_empty() {
        errors.push(FieldError::new(field, message));
    }
}
