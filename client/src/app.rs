//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    assessments::AssessmentsPage, change_password::ChangePasswordPage, dashboard::DashboardPage, games::GamesPage,
    lesson_wizard::LessonWizardPage, lessons::LessonsPage, login::LoginPage, quiz_builder::QuizBuilderPage,
    subject_wizard::SubjectWizardPage, subjects::SubjectsPage, teachers::TeachersPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;
use crate::util::auth::install_session_loader;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(session);
    provide_context(toasts);

    install_session_loader(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/elearn-admin.css"/>
        <Title text="eLearning Content Validation"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("assessments") view=AssessmentsPage/>
                <Route path=StaticSegment("games") view=GamesPage/>
                <Route path=StaticSegment("teachers") view=TeachersPage/>
                <Route path=StaticSegment("lessons") view=LessonsPage/>
                <Route path=(StaticSegment("lessons"), StaticSegment("new")) view=LessonWizardPage/>
                <Route path=(StaticSegment("lessons"), StaticSegment("quiz")) view=QuizBuilderPage/>
                <Route path=StaticSegment("subjects") view=SubjectsPage/>
                <Route path=(StaticSegment("subjects"), StaticSegment("new")) view=SubjectWizardPage/>
                <Route path=(StaticSegment("settings"), StaticSegment("password")) view=ChangePasswordPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
