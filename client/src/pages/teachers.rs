//! Teacher verification list.

use content::format::or_dash;
use content::types::Teacher;
use leptos::prelude::*;

use crate::pages::moderation::{ListPageConfig, Reviewable, moderation_list};

fn subjects_cell(subjects: &[String]) -> String {
    if subjects.is_empty() { or_dash(None).to_owned() } else { subjects.join(", ") }
}

impl Reviewable for Teacher {
    const COLUMNS: &'static [&'static str] = &["Email", "School"];

    fn display_title(&self) -> String {
        self.full_name()
    }

    fn cells(&self) -> Vec<String> {
        vec![or_dash(self.email.as_deref()).to_owned(), or_dash(self.school.as_deref()).to_owned()]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Email", or_dash(self.email.as_deref()).to_owned()),
            ("Phone", or_dash(self.phone.as_deref()).to_owned()),
            ("School", or_dash(self.school.as_deref()).to_owned()),
            ("Qualification", or_dash(self.qualification.as_deref()).to_owned()),
            ("Subjects", subjects_cell(&self.subjects)),
        ]
    }
}

#[component]
pub fn TeachersPage() -> impl IntoView {
    moderation_list::<Teacher>(ListPageConfig {
        title: "Teachers",
        search_placeholder: "Search by name or email...",
        kind_label: None,
        show_grade: false,
        create: None,
    })
}
