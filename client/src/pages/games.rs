//! Game moderation list.

use content::format::{or_dash, truncate};
use content::types::Game;
use leptos::prelude::*;

use crate::pages::moderation::{ListPageConfig, Reviewable, moderation_list};

impl Reviewable for Game {
    const COLUMNS: &'static [&'static str] = &["Type", "Subject", "Grade"];

    fn display_title(&self) -> String {
        self.name.clone()
    }

    fn cells(&self) -> Vec<String> {
        vec![
            or_dash(self.game_type.as_deref()).to_owned(),
            or_dash(self.subject.as_deref()).to_owned(),
            or_dash(self.grade.as_deref()).to_owned(),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Type", or_dash(self.game_type.as_deref()).to_owned()),
            ("Subject", or_dash(self.subject.as_deref()).to_owned()),
            ("Grade", or_dash(self.grade.as_deref()).to_owned()),
            ("Link", or_dash(self.game_url.as_deref()).to_owned()),
            ("Created by", or_dash(self.created_by.as_deref()).to_owned()),
            ("Description", truncate(or_dash(self.description.as_deref()), 400)),
        ]
    }
}

#[component]
pub fn GamesPage() -> impl IntoView {
    moderation_list::<Game>(ListPageConfig {
        title: "Games",
        search_placeholder: "Search games...",
        kind_label: Some("Types"),
        show_grade: true,
        create: None,
    })
}
