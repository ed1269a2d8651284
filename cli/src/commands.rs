//! Command handlers.
//!
//! Each handler borrows the shared [`Context`] and goes through the same
//! `content` operations the dashboard uses: `ListState` for filtering and
//! paging, `ModerationWorkflow` for moderation, and the wizard types for
//! create requests.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use std::path::Path;

use content::account::{ChangePasswordForm, LoginForm};
use content::listing::{Choice, ListState, Listable};
use content::types::{Assessment, FileUpload, Game, Lesson, Subject, Teacher};
use content::wizard::{LessonDetails, MaterialUpload, SubjectWizard};
use content::workflow::WorkflowError;
use content::{CanonicalStatus, FieldError, ItemId, ModerationWorkflow, ResourceKind, Session, SessionProvider};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::CliError;
use crate::store::FileStore;
use crate::transport::ReqwestTransport;

pub struct Context {
    pub transport: ReqwestTransport,
    pub provider: SessionProvider<FileStore>,
    /// `--token` wins over the stored session.
    pub token_override: Option<String>,
}

impl Context {
    pub fn session(&self) -> Session {
        match &self.token_override {
            Some(token) => Session::new(Some(token.clone()), None),
            None => self.provider.load(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum ActionArg {
    Approve,
    Reject,
    RequestChanges,
}

#[derive(Debug, Default, Clone)]
pub struct ListArgs {
    pub search: Option<String>,
    pub kind: Option<String>,
    pub grade: Option<String>,
    pub status: Option<CanonicalStatus>,
    pub page: usize,
}

pub fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

pub(crate) fn validation_error(errors: &[FieldError]) -> CliError {
    CliError::Validation(errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))
}

/// Split `name[:description]` from a `--topic` flag.
pub fn parse_topic(raw: &str) -> (&str, &str) {
    raw.split_once(':').map_or((raw.trim(), ""), |(name, desc)| (name.trim(), desc.trim()))
}

/// Tab-separated rows for the visible page plus a trailing summary line.
pub fn render_page<T: Listable>(state: &ListState<T>) -> String {
    let mut out = String::new();
    for item in state.visible() {
        out.push_str(&format!(
            "{}\t{}\t{}\n",
            item.item_id(),
            item.canonical_status().label(),
            item.search_text().trim()
        ));
    }
    let (start, end, total) = state.showing_range();
    out.push_str(&format!(
        "Showing {start}-{end} of {total} (page {} of {})",
        state.page(),
        state.total_pages().max(1)
    ));
    out
}

pub(crate) fn apply_list_args<T: Listable>(state: &mut ListState<T>, args: &ListArgs) {
    if let Some(search) = &args.search {
        state.set_search(search);
    }
    state.set_kind(Choice::from_select(args.kind.as_deref().unwrap_or("")));
    state.set_grade(Choice::from_select(args.grade.as_deref().unwrap_or("")));
    state.set_status(args.status.map_or(Choice::All, Choice::Only));
    state.set_page(args.page.max(1));
}

// =============================================================================
// AUTH
// =============================================================================

pub async fn login(ctx: &Context, email: String, password: String) -> Result<(), CliError> {
    let request = LoginForm { email, password }.to_request().map_err(|e| validation_error(&e))?;
    let response = content::api::login(&ctx.transport, &request).await?;
    let session = ctx.provider.sign_in(&response)?;
    let name = session.user().map_or_else(|| request.email.clone(), content::types::SessionUser::display_name);
    tracing::info!(path = %ctx.provider.store().path().display(), "session stored");
    println!("Signed in as {name}");
    Ok(())
}

pub fn logout(ctx: &Context) -> Result<(), CliError> {
    ctx.provider.sign_out()?;
    println!("Signed out");
    Ok(())
}

pub async fn change_password(ctx: &Context, form: ChangePasswordForm) -> Result<(), CliError> {
    let request = form.to_request().map_err(|e| validation_error(&e))?;
    content::api::change_password(&ctx.transport, &ctx.session(), &request).await?;
    println!("Password updated");
    Ok(())
}

pub async fn dashboard(ctx: &Context) -> Result<(), CliError> {
    let summary = content::api::dashboard(&ctx.transport, &ctx.session()).await?;
    print_json(&serde_json::to_value(summary)?)
}

// =============================================================================
// LIST / SHOW / MODERATE
// =============================================================================

async fn fetch<T>(ctx: &Context) -> Result<Vec<T>, CliError>
where
    T: Listable + DeserializeOwned,
{
    Ok(content::api::list::<T, _>(&ctx.transport, &ctx.session()).await?)
}

async fn list_typed<T>(ctx: &Context, args: &ListArgs) -> Result<(), CliError>
where
    T: Listable + DeserializeOwned,
{
    let mut state = ListState::new();
    state.set_items(fetch::<T>(ctx).await?);
    apply_list_args(&mut state, args);
    println!("{}", render_page(&state));
    Ok(())
}

async fn show_typed<T>(ctx: &Context, id: &ItemId) -> Result<(), CliError>
where
    T: Listable + DeserializeOwned + Serialize,
{
    let item = find::<T>(ctx, id).await?;
    print_json(&serde_json::to_value(item)?)
}

async fn find<T>(ctx: &Context, id: &ItemId) -> Result<T, CliError>
where
    T: Listable + DeserializeOwned,
{
    fetch::<T>(ctx)
        .await?
        .into_iter()
        .find(|item| item.item_id() == id)
        .ok_or_else(|| CliError::NotFound { resource: T::RESOURCE, id: id.to_string() })
}

async fn moderate_typed<T>(
    ctx: &Context,
    id: &ItemId,
    action: ActionArg,
    comment: Option<String>,
) -> Result<(), CliError>
where
    T: Listable + DeserializeOwned,
{
    let mut workflow = ModerationWorkflow::new();
    workflow.open(find::<T>(ctx, id).await?)?;
    let request = match action {
        ActionArg::Approve => workflow.approve()?,
        ActionArg::Reject => workflow.reject()?,
        ActionArg::RequestChanges => {
            workflow.begin_request_changes()?;
            workflow.update_comment(comment.as_deref().unwrap_or_default());
            match workflow.submit_comment() {
                Err(WorkflowError::EmptyComment) => {
                    let message = workflow.comment_error().unwrap_or("comment required").to_owned();
                    return Err(CliError::Validation(message));
                }
                other => other?,
            }
        }
    };

    let session = ctx.session();
    match content::api::moderate(&ctx.transport, &session, &request).await {
        Ok(response) => {
            let outcome = workflow.complete(&response)?;
            println!("{} ({} {} is now {})", outcome.action.success_message(), T::RESOURCE, outcome.id, outcome.status.label());
            Ok(())
        }
        Err(e) => {
            workflow.fail()?;
            Err(e.into())
        }
    }
}

macro_rules! for_resource {
    ($kind:expr, $f:ident, $($arg:expr),*) => {
        match $kind {
            ResourceKind::Assessment => $f::<Assessment>($($arg),*).await,
            ResourceKind::Game => $f::<Game>($($arg),*).await,
            ResourceKind::Lesson => $f::<Lesson>($($arg),*).await,
            ResourceKind::Subject => $f::<Subject>($($arg),*).await,
            ResourceKind::Teacher => $f::<Teacher>($($arg),*).await,
        }
    };
}

pub async fn list(ctx: &Context, kind: ResourceKind, args: ListArgs) -> Result<(), CliError> {
    for_resource!(kind, list_typed, ctx, &args)
}

pub async fn show(ctx: &Context, kind: ResourceKind, id: &str) -> Result<(), CliError> {
    let Ok(id) = id.parse::<ItemId>();
    for_resource!(kind, show_typed, ctx, &id)
}

pub async fn moderate(
    ctx: &Context,
    kind: ResourceKind,
    id: &str,
    action: ActionArg,
    comment: Option<String>,
) -> Result<(), CliError> {
    let Ok(id) = id.parse::<ItemId>();
    for_resource!(kind, moderate_typed, ctx, &id, action, comment)
}

// =============================================================================
// CREATE
// =============================================================================

pub struct SubjectArgs {
    pub name: String,
    pub grade: String,
    pub description: String,
    pub topics: Vec<String>,
    pub draft: bool,
}

/// Drive the subject wizard non-interactively.
pub fn subject_wizard(args: &SubjectArgs) -> Result<SubjectWizard, CliError> {
    let mut wizard = SubjectWizard::new();
    wizard.name.clone_from(&args.name);
    wizard.grade.clone_from(&args.grade);
    wizard.description.clone_from(&args.description);
    wizard.active = !args.draft;
    wizard.next().map_err(|e| validation_error(&e))?;
    for raw in &args.topics {
        let (name, description) = parse_topic(raw);
        wizard.open_topic_form();
        wizard.update_topic_form(name, description);
        wizard.save_topic().map_err(|e| validation_error(&[e]))?;
    }
    wizard.next().map_err(|e| validation_error(&e))?;
    Ok(wizard)
}

pub async fn create_subject(ctx: &Context, args: SubjectArgs) -> Result<(), CliError> {
    let request = subject_wizard(&args)?.build_request().map_err(|e| validation_error(&e))?;
    let created = content::api::create_subject(&ctx.transport, &ctx.session(), &request).await?;
    print_json(&serde_json::to_value(created)?)
}

pub async fn read_upload(path: &Path) -> Result<FileUpload, CliError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| CliError::Io { path: path.to_path_buf(), source })?;
    let file_name = path.file_name().map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
    Ok(FileUpload { content_type: content_type_for(&file_name).to_owned(), file_name, bytes })
}

/// MIME type from a file extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    let ext = file_name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "ppt" => "application/vnd.ms-powerpoint",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        _ => "application/octet-stream",
    }
}

pub async fn create_lesson(
    ctx: &Context,
    details: LessonDetails,
    file: &Path,
    draft: bool,
) -> Result<(), CliError> {
    let mut upload = MaterialUpload::new(details);
    upload.publish = !draft;
    upload.set_file(Some(read_upload(file).await?));
    let request = upload.build_request().map_err(|e| validation_error(&e))?;
    let created = content::api::create_lesson(&ctx.transport, &ctx.session(), &request).await?;
    print_json(&serde_json::to_value(created)?)
}
