//! Shared content model, moderation workflow, and typed REST wrappers for the
//! eLearning admin dashboard.
//!
//! This crate owns everything the browser dashboard and the validator CLI have
//! in common: backend DTOs, canonical status normalization, list filtering and
//! pagination, the review state machine, creation-wizard state, and the
//! session model. It performs no I/O itself; network access goes through the
//! [`transport::Transport`] seam that each front end implements.

pub mod account;
pub mod api;
pub mod error;
pub mod format;
pub mod listing;
pub mod resource;
pub mod session;
pub mod status;
pub mod transport;
pub mod types;
pub mod wizard;
pub mod workflow;

pub use error::{ApiError, ClientError, FieldError, MISSING_TOKEN_MESSAGE};
pub use resource::ResourceKind;
pub use session::{Session, SessionProvider, SessionStore};
pub use status::{BadgeTone, CanonicalStatus, lookup_status, normalize_status};
pub use transport::{ApiRequest, Method, RawResponse, RequestBody, Transport};
pub use types::ItemId;
pub use workflow::{Moderatable, ModerationAction, ModerationWorkflow, ReviewState};
