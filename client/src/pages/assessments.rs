//! Assessment moderation list.

use content::format::{format_date, or_dash, truncate};
use content::types::Assessment;
use leptos::prelude::*;

use crate::pages::moderation::{ListPageConfig, Reviewable, moderation_list};

impl Reviewable for Assessment {
    const COLUMNS: &'static [&'static str] = &["Type", "Subject", "Grade"];

    fn display_title(&self) -> String {
        self.title.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            or_dash(self.assessment_type.as_deref()).to_owned(),
            or_dash(self.subject.as_deref()).to_owned(),
            or_dash(self.grade.as_deref()).to_owned(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", or_dash(self.assessment_type.as_deref()).to_owned()),
            ("Subject", or_dash(self.subject.as_deref()).to_owned()),
            ("Lesson", or_dash(self.lesson.as_deref()).to_owned()),
            ("Grade", or_dash(self.grade.as_deref()).to_owned()),
            ("Marks", or_dash(self.marks.as_deref()).to_owned()),
            ("Due", format_date(self.due_date.as_deref())),
            ("Created by", or_dash(self.created_by.as_deref()).to_owned()),
            ("Description", truncate(or_dash(self.description.as_deref()), 400)),
        ]
    }
}

#[component]
pub fn AssessmentsPage() -> impl IntoView {
    moderation_list::<Assessment>(ListPageConfig {
        title: "Assessments",
        search_placeholder: "Search assessments...",
        kind_label: Some("Types"),
        show_grade: true,
        create: None,
    })
}
