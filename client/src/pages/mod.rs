//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The five resource lists share `moderation`.

pub mod assessments;
pub mod change_password;
pub mod dashboard;
pub mod games;
pub mod lesson_wizard;
pub mod lessons;
pub mod login;
pub mod moderation;
pub mod quiz_builder;
pub mod subject_wizard;
pub mod subjects;
pub mod teachers;
