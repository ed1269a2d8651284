//! Lesson moderation list with a link into the lesson wizard.

use content::format::{or_dash, truncate};
use content::types::Lesson;
use content::wizard::lesson::MATERIAL_ROUTE;
use leptos::prelude::*;

use crate::pages::moderation::{ListPageConfig, Reviewable, moderation_list};

impl Reviewable for Lesson {
    const COLUMNS: &'static [&'static str] = &["Subject", "Topic", "Grade", "Type"];

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            or_dash(self.subject.as_deref()).to_owned(),
            or_dash(self.topic.as_deref()).to_owned(),
            or_dash(self.grade.as_deref()).to_owned(),
            or_dash(self.resource_type.as_deref()).to_owned(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Subject", or_dash(self.subject.as_deref()).to_owned()),
            ("Topic", or_dash(self.topic.as_deref()).to_owned()),
            ("Grade", or_dash(self.grade.as_deref()).to_owned()),
            ("Resource", or_dash(self.resource_type.as_deref()).to_owned()),
            ("File", or_dash(self.file.as_deref()).to_owned()),
            ("Created by", or_dash(self.created_by.as_deref()).to_owned()),
            ("Description", truncate(or_dash(self.description.as_deref()), 400)),
        ]
    }
}

#[component]
pub fn LessonsPage() -> impl IntoView {
    moderation_list::<Lesson>(ListPageConfig {
        title: "Lessons",
        search_placeholder: "Search lessons...",
        kind_label: Some("Resource types"),
        show_grade: true,
        create: Some((MATERIAL_ROUTE, "New Lesson")),
    })
}
