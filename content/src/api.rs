//! Typed wrappers over the content REST API.
//!
//! Every authenticated call takes the caller's [`Session`] explicitly and
//! fails with [`ClientError::MissingToken`] before touching the transport when
//! no token is present.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;
use crate::resource::ResourceKind;
use crate::session::Session;
use crate::transport::{ApiRequest, FilePart, MultipartForm, Transport, execute};
use crate::types::{
    Assessment, ChangePasswordRequest, CreateAssessmentRequest, CreateGameRequest, CreateLessonRequest,
    CreateSubjectRequest, DashboardSummary, Game, Lesson, LoginRequest, LoginResponse, ModerateResponse, Subject,
    Teacher,
};
use crate::workflow::{Moderatable, ModerateRequest};

pub const MODERATE_PATH: &str = "/content/moderate/";
pub const DASHBOARD_PATH: &str = "/content/dashboard/";
pub const LOGIN_PATH: &str = "/auth/content/";
pub const CHANGE_PASSWORD_PATH: &str = "/auth/change-password/";

fn authorized(request: ApiRequest, session: &Session) -> Result<ApiRequest, ClientError> {
    let header = session.authorization()?;
    Ok(request.header("Authorization", &header))
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ClientError> {
    serde_json::to_value(body).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Text bodies that look like JSON are accepted even without a JSON content type.
fn into_json(value: Value) -> Value {
    match value {
        Value::String(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
        other => other,
    }
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ClientError> {
    serde_json::from_value(into_json(value)).map_err(|e| ClientError::Decode(e.to_string()))
}

/// Accept a bare array or a `{"results": [...]}` / `{"data": [...]}` envelope.
pub fn decode_list<R: DeserializeOwned>(value: Value) -> Result<Vec<R>, ClientError> {
    let value = into_json(value);
    let items = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => match map.remove("results").or_else(|| map.remove("data")) {
            Some(inner @ Value::Array(_)) => inner,
            _ => return Err(ClientError::Decode("expected a list of records".to_owned())),
        },
        _ => return Err(ClientError::Decode("expected a list of records".to_owned())),
    };
    decode(items)
}

// =============================================================================
// LISTS
// =============================================================================

/// `GET` the collection endpoint for `T`.
pub async fn list<T, Tr>(transport: &Tr, session: &Session) -> Result<Vec<T>, ClientError>
where
    T: Moderatable + DeserializeOwned,
    Tr: Transport + ?Sized,
{
    let request = authorized(ApiRequest::get(T::RESOURCE.collection_path()), session)?;
    decode_list(execute(transport, request).await?)
}

pub async fn list_assessments<Tr: Transport + ?Sized>(transport: &Tr, session: &Session) -> Result<Vec<Assessment>, ClientError> {
    list(transport, session).await
}

pub async fn list_games<Tr: Transport + ?Sized>(transport: &Tr, session: &Session) -> Result<Vec<Game>, ClientError> {
    list(transport, session).await
}

pub async fn list_lessons<Tr: Transport + ?Sized>(transport: &Tr, session: &Session) -> Result<Vec<Lesson>, ClientError> {
    list(transport, session).await
}

pub async fn list_subjects<Tr: Transport + ?Sized>(transport: &Tr, session: &Session) -> Result<Vec<Subject>, ClientError> {
    list(transport, session).await
}

pub async fn list_teachers<Tr: Transport + ?Sized>(transport: &Tr, session: &Session) -> Result<Vec<Teacher>, ClientError> {
    list(transport, session).await
}

// =============================================================================
// MODERATION
// =============================================================================

/// `POST /content/moderate/`.
pub async fn moderate<Tr: Transport + ?Sized>(
    transport: &Tr,
    session: &Session,
    request: &ModerateRequest,
) -> Result<ModerateResponse, ClientError> {
    let http = authorized(ApiRequest::post_json(MODERATE_PATH, to_body(request)?), session)?;
    let value = execute(transport, http).await?;
    // A bare message or empty body still means success.
    Ok(match into_json(value) {
        obj @ Value::Object(_) => decode(obj)?,
        Value::String(message) => ModerateResponse { message: Some(message), ..ModerateResponse::default() },
        _ => ModerateResponse::default(),
    })
}

// =============================================================================
// DASHBOARD + AUTH
// =============================================================================

pub async fn dashboard<Tr: Transport + ?Sized>(transport: &Tr, session: &Session) -> Result<DashboardSummary, ClientError> {
    let request = authorized(ApiRequest::get(DASHBOARD_PATH), session)?;
    decode(execute(transport, request).await?)
}

/// `POST /auth/content/`; the only call made without a session.
pub async fn login<Tr: Transport + ?Sized>(transport: &Tr, credentials: &LoginRequest) -> Result<LoginResponse, ClientError> {
    let request = ApiRequest::post_json(LOGIN_PATH, to_body(credentials)?);
    decode(execute(transport, request).await?)
}

pub async fn change_password<Tr: Transport + ?Sized>(
    transport: &Tr,
    session: &Session,
    body: &ChangePasswordRequest,
) -> Result<(), ClientError> {
    let request = authorized(ApiRequest::post_json(CHANGE_PASSWORD_PATH, to_body(body)?), session)?;
    execute(transport, request).await.map(|_| ())
}

// =============================================================================
// CREATE
// =============================================================================

async fn create_json<R, B, Tr>(transport: &Tr, session: &Session, kind: ResourceKind, body: &B) -> Result<R, ClientError>
where
    R: DeserializeOwned,
    B: Serialize,
    Tr: Transport + ?Sized,
{
    let request = authorized(ApiRequest::post_json(kind.collection_path(), to_body(body)?), session)?;
    decode(execute(transport, request).await?)
}

pub async fn create_subject<Tr: Transport + ?Sized>(
    transport: &Tr,
    session: &Session,
    body: &CreateSubjectRequest,
) -> Result<Subject, ClientError> {
    create_json(transport, session, ResourceKind::Subject, body).await
}

pub async fn create_assessment<Tr: Transport + ?Sized>(
    transport: &Tr,
    session: &Session,
    body: &CreateAssessmentRequest,
) -> Result<Assessment, ClientError> {
    create_json(transport, session, ResourceKind::Assessment, body).await
}

pub async fn create_game<Tr: Transport + ?Sized>(
    transport: &Tr,
    session: &Session,
    body: &CreateGameRequest,
) -> Result<Game, ClientError> {
    create_json(transport, session, ResourceKind::Game, body).await
}

/// Create a lesson; multipart when a file is attached, JSON otherwise.
pub async fn create_lesson<Tr: Transport + ?Sized>(
    transport: &Tr,
    session: &Session,
    body: &CreateLessonRequest,
) -> Result<Lesson, ClientError> {
    let path = ResourceKind::Lesson.collection_path();
    let request = match &body.file {
        Some(file) => ApiRequest::post_multipart(
            path,
            MultipartForm {
                fields: body.form_fields(),
                files: vec![FilePart {
                    field: "file".to_owned(),
                    file_name: file.file_name.clone(),
                    content_type: file.content_type.clone(),
                    bytes: file.bytes.clone(),
                }],
            },
        ),
        None => {
            let fields: serde_json::Map<String, Value> =
                body.form_fields().into_iter().map(|(k, v)| (k, Value::String(v))).collect();
            ApiRequest::post_json(path, Value::Object(fields))
        }
    };
    let request = authorized(request, session)?;
    decode(execute(transport, request).await?)
}
