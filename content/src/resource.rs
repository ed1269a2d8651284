//! Moderatable resource kinds and their REST coordinates.

use std::fmt;
use std::str::FromStr;

use crate::status::{
    ASSESSMENT_SYNONYMS, CURRICULUM_SYNONYMS, GAME_SYNONYMS, SynonymTable, TEACHER_SYNONYMS,
};

/// A resource type that content validators review.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Subject,
    Lesson,
    Assessment,
    Game,
    Teacher,
}

impl ResourceKind {
    pub const ALL: [Self; 5] = [Self::Subject, Self::Lesson, Self::Assessment, Self::Game, Self::Teacher];

    /// Collection endpoint, used for both list (`GET`) and create (`POST`).
    #[must_use]
    pub fn collection_path(self) -> &'static str {
        match self {
            Self::Subject => "/content/subjects/",
            Self::Lesson => "/content/lessons/",
            Self::Assessment => "/content/assessments/",
            Self::Game => "/content/games/",
            Self::Teacher => "/content/teachers/",
        }
    }

    /// Value of the `model` field in a moderate request.
    #[must_use]
    pub fn model_name(self) -> &'static str {
        match self {
            Self::Subject => "subject",
            Self::Lesson => "lesson",
            Self::Assessment => "assessment",
            Self::Game => "game",
            Self::Teacher => "teacher",
        }
    }

    #[must_use]
    pub fn synonyms(self) -> SynonymTable {
        match self {
            Self::Subject | Self::Lesson => CURRICULUM_SYNONYMS,
            Self::Assessment => ASSESSMENT_SYNONYMS,
            Self::Game => GAME_SYNONYMS,
            Self::Teacher => TEACHER_SYNONYMS,
        }
    }

    /// Plural heading used in page titles and CLI output.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Subject => "Subjects",
            Self::Lesson => "Lessons",
            Self::Assessment => "Assessments",
            Self::Game => "Games",
            Self::Teacher => "Teachers",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.model_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource `{0}`")]
pub struct UnknownResource(pub String);

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let singular = key.strip_suffix('s').unwrap_or(&key);
        Self::ALL
            .into_iter()
            .find(|kind| kind.model_name() == singular)
            .ok_or_else(|| UnknownResource(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_singular_and_plural() {
        assert_eq!("games".parse::<ResourceKind>(), Ok(ResourceKind::Game));
        assert_eq!("Teacher".parse::<ResourceKind>(), Ok(ResourceKind::Teacher));
        assert!("quizzes".parse::<ResourceKind>().is_err());
    }

    #[test]
    fn collection_paths_live_under_content() {
        for kind in ResourceKind::ALL {
            let path = kind.collection_path();
            assert!(path.starts_with("/content/") && path.ends_with('/'), "{path}");
        }
    }

    #[test]
    fn lessons_and_subjects_share_curriculum_synonyms() {
        assert_eq!(ResourceKind::Lesson.synonyms(), ResourceKind::Subject.synonyms());
    }
}
