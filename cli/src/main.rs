//! `elearn`: command-line client for the eLearning content API.
//!
//! Shares the dashboard's `content` crate for request shaping, status
//! normalization, list filtering and the moderation workflow; only the
//! transport (`reqwest`) and session storage (a JSON file) are CLI-specific.

mod commands;
mod store;
mod transport;


use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use content::account::ChangePasswordForm;
use content::wizard::LessonDetails;
use content::workflow::WorkflowError;
use content::{CanonicalStatus, ClientError, ResourceKind, SessionProvider};
use tracing_subscriber::EnvFilter;

use crate::commands::{ActionArg, Context, ListArgs, SubjectArgs};
use crate::store::{FileStore, default_session_path};
use crate::transport::ReqwestTransport;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Store(#[from] content::session::StoreError),
    #[error("{0}")]
    Validation(String),
    #[error("cannot moderate: {0}")]
    Workflow(#[from] WorkflowError),
    #[error("{resource} {id} not found")]
    NotFound { resource: ResourceKind, id: String },
    #[error("cannot read {}: {source}", .path.display())]
    Io { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "elearn", about = "eLearning content validation CLI")]
struct Cli {
    #[arg(long, env = "ELEARN_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Use this token instead of the stored session.
    #[arg(long, env = "ELEARN_AUTH_TOKEN", hide_env_values = true)]
    token: Option<String>,

    #[arg(long, env = "ELEARN_SESSION_FILE")]
    session_file: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `content=trace`.
    #[arg(long, env = "ELEARN_LOG", default_value = "warn")]
    log: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "ELEARN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Remove the stored session.
    Logout,
    ChangePassword {
        #[arg(long)]
        old: String,
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
    Dashboard,
    List {
        resource: ResourceKind,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        kind: Option<String>,
        #[arg(long)]
        grade: Option<String>,
        /// pending, approved, rejected or request-changes.
        #[arg(long)]
        status: Option<CanonicalStatus>,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    Show {
        resource: ResourceKind,
        id: String,
    },
    Moderate {
        resource: ResourceKind,
        id: String,
        #[arg(value_enum)]
        action: ActionArg,
        /// Required for `request-changes`.
        #[arg(long)]
        comment: Option<String>,
    },
    Create(CreateCommand),
}

#[derive(Args, Debug)]
struct CreateCommand {
    #[command(subcommand)]
    command: CreateSubcommand,
}

#[derive(Subcommand, Debug)]
enum CreateSubcommand {
    Subject {
        #[arg(long)]
        name: String,
        #[arg(long)]
        grade: String,
        #[arg(long, default_value = "")]
        description: String,
        /// `name` or `name:description`; repeatable.
        #[arg(long = "topic")]
        topics: Vec<String>,
        /// Save as draft instead of submitting for review.
        #[arg(long)]
        draft: bool,
    },
    Lesson {
        #[arg(long)]
        title: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        topic: String,
        #[arg(long)]
        grade: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        file: PathBuf,
        #[arg(long)]
        draft: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&cli.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let session_path = cli.session_file.unwrap_or_else(default_session_path);
    let ctx = Context {
        transport: ReqwestTransport::new(&cli.api_base_url),
        provider: SessionProvider::new(FileStore::new(session_path)),
        token_override: cli.token,
    };
    tracing::debug!(base_url = ctx.transport.base_url(), "elearn starting");

    match cli.command {
        Command::Login { email, password } => commands::login(&ctx, email, password).await,
        Command::Logout => commands::logout(&ctx),
        Command::ChangePassword { old, new, confirm } => {
            let form = ChangePasswordForm { old_password: old, new_password: new, confirm_password: confirm };
            commands::change_password(&ctx, form).await
        }
        Command::Dashboard => commands::dashboard(&ctx).await,
        Command::List { resource, search, kind, grade, status, page } => {
            commands::list(&ctx, resource, ListArgs { search, kind, grade, status, page }).await
        }
        Command::Show { resource, id } => commands::show(&ctx, resource, &id).await,
        Command::Moderate { resource, id, action, comment } => {
            commands::moderate(&ctx, resource, &id, action, comment).await
        }
        Command::Create(create) => match create.command {
            CreateSubcommand::Subject { name, grade, description, topics, draft } => {
                commands::create_subject(&ctx, SubjectArgs { name, grade, description, topics, draft }).await
            }
            CreateSubcommand::Lesson { title, subject, topic, grade, description, file, draft } => {
                let details = LessonDetails { title, subject, topic, grade, description };
                commands::create_lesson(&ctx, details, &file, draft).await
            }
        },
    }
}
