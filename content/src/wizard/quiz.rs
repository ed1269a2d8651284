//! Quiz question builder.
//!
//! Questions are collected in memory only. Saving a question or finishing
//! the quiz opens a confirmation modal; no endpoint is called.

#[cfg(test)]
#[path = "quiz_test.rs"]
mod quiz_test;

use super::lesson::LessonDetails;
use super::require;
use crate::error::FieldError;

pub const MIN_OPTIONS: usize = 2;
pub const DEFAULT_POINTS: u32 = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnswerOption {
    pub text: String,
    pub correct: bool,
}

/// A question as edited in the builder form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: Vec<AnswerOption>,
    pub points: u32,
}

impl Default for Question {
    fn default() -> Self {
        Self { text: String::new(), options: vec![AnswerOption::default(); MIN_OPTIONS], points: DEFAULT_POINTS }
    }
}

impl Question {
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        require(&mut errors, &self.text, "question", "Question text is required.");
        let filled = self.options.iter().filter(|o| !o.text.trim().is_empty()).count();
        if filled < MIN_OPTIONS {
            errors.push(FieldError::new("options", "Provide at least two answer options."));
        }
        let correct: Vec<&AnswerOption> = self.options.iter().filter(|o| o.correct).collect();
        match correct.as_slice() {
            [only] if !only.text.trim().is_empty() => {}
            [_] => errors.push(FieldError::new("correct", "The correct answer cannot be empty.")),
            _ => errors.push(FieldError::new("correct", "Mark exactly one correct answer.")),
        }
        if self.points == 0 {
            errors.push(FieldError::new("points", "Points must be greater than zero."));
        }
        errors
    }

    /// Copy with blank options dropped and text trimmed.
    fn normalized(&self) -> Self {
        Self {
            text: self.text.trim().to_owned(),
            options: self
                .options
                .iter()
                .filter(|o| !o.text.trim().is_empty())
                .map(|o| AnswerOption { text: o.text.trim().to_owned(), correct: o.correct })
                .collect(),
            points: self.points,
        }
    }

    #[must_use]
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.iter().find(|o| o.correct).map(|o| o.text.as_str())
    }
}

/// Confirmation modal currently shown by the builder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizModal {
    QuestionSaved,
    QuizSaved,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuizBuilder {
    pub details: LessonDetails,
    questions: Vec<Question>,
    draft: Question,
    editing: Option<usize>,
    modal: Option<QuizModal>,
}

impl QuizBuilder {
    #[must_use]
    pub fn new(details: LessonDetails) -> Self {
        Self { details, ..Self::default() }
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn draft(&self) -> &Question {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut Question {
        &mut self.draft
    }

    #[must_use]
    pub fn editing(&self) -> Option<usize> {
        self.editing
    }

    #[must_use]
    pub fn modal(&self) -> Option<QuizModal> {
        self.modal
    }

    pub fn dismiss_modal(&mut self) {
        self.modal = None;
    }

    #[must_use]
    pub fn total_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    pub fn add_option(&mut self) {
        self.draft.options.push(AnswerOption::default());
    }

    /// Remove an option; the form never drops below two slots.
    pub fn remove_option(&mut self, index: usize) {
        if self.draft.options.len() > MIN_OPTIONS && index < self.draft.options.len() {
            self.draft.options.remove(index);
        }
    }

    /// Mark `index` as the single correct option.
    pub fn set_correct(&mut self, index: usize) {
        for (i, option) in self.draft.options.iter_mut().enumerate() {
            option.correct = i == index;
        }
    }

    /// Validate the draft and store it (appending, or replacing the question
    /// being edited), then reset the form.
    pub fn save_question(&mut self) -> Result<usize, Vec<FieldError>> {
        let errors = self.draft.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let question = std::mem::take(&mut self.draft).normalized();
        let index = match self.editing.take() {
            Some(i) if i < self.questions.len() => {
                self.questions[i] = question;
                i
            }
            _ => {
                self.questions.push(question);
                self.questions.len() - 1
            }
        };
        self.modal = Some(QuizModal::QuestionSaved);
        Ok(index)
    }

    /// Load a saved question back into the form.
    pub fn edit_question(&mut self, index: usize) -> bool {
        let Some(question) = self.questions.get(index) else {
            return false;
        };
        let mut draft = question.clone();
        while draft.options.len() < MIN_OPTIONS {
            draft.options.push(AnswerOption::default());
        }
        self.draft = draft;
        self.editing = Some(index);
        true
    }

    pub fn cancel_edit(&mut self) {
        self.draft = Question::default();
        self.editing = None;
    }

    pub fn remove_question(&mut self, index: usize) -> Option<Question> {
        if index >= self.questions.len() {
            return None;
        }
        match self.editing {
            Some(i) if i == index => self.cancel_edit(),
            Some(i) if i > index => self.editing = Some(i - 1),
            _ => {}
        }
        Some(self.questions.remove(index))
    }

    /// Finish the quiz. Shows the saved modal; nothing is sent anywhere.
    pub fn finish(&mut self) -> Result<(), FieldError> {
        if self.questions.is_empty() {
            return Err(FieldError::new("questions", "Add at least one question."));
        }
        tracing::info!(title = %self.details.title, questions = self.questions.len(), "quiz completed locally");
        self.modal = Some(QuizModal::QuizSaved);
        Ok(())
    }
}
