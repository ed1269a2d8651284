//! Subject moderation list with a link into the subject wizard.

use content::format::{or_dash, truncate};
use content::types::Subject;
use leptos::prelude::*;

use crate::pages::moderation::{ListPageConfig, Reviewable, moderation_list};

pub const NEW_SUBJECT_ROUTE: &str = "/subjects/new";

impl Reviewable for Subject {
    const COLUMNS: &'static [&'static str] = &["Grade", "Topics"];

    fn display_title(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![or_dash(self.grade.as_deref()).to_owned(), self.topics.len().to_string()]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let topics = if self.topics.is_empty() {
            or_dash(None).to_owned()
        } else {
            self.topics.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", ")
        };
        vec![
            ("Grade", or_dash(self.grade.as_deref()).to_owned()),
            ("Topics", topics),
            ("Created by", or_dash(self.created_by.as_deref()).to_owned()),
            ("Description", truncate(or_dash(self.description.as_deref()), 400)),
        ]
    }
}

#[component]
pub fn SubjectsPage() -> impl IntoView {
    moderation_list::<Subject>(ListPageConfig {
        title: "Subjects",
        search_placeholder: "Search subjects...",
        kind_label: None,
        show_grade: true,
        create: Some((NEW_SUBJECT_ROUTE, "New Subject")),
    })
}
