use super::*;

use axum::extract::Multipart;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use content::types::{CreateLessonRequest, DraftStatus, FileUpload, Game, LoginRequest};
use content::{CanonicalStatus, Moderatable, ModerationWorkflow, Session};
use serde_json::{Value, json};

const TOKEN: &str = "tok-123";

// =============================================================================
// FAKE BACKEND
// =============================================================================

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "secret" {
        let user = json!({ "email": body["email"], "first_name": "Ama", "last_name": "Kollie" });
        (StatusCode::OK, Json(json!({ "token": TOKEN, "user": user })))
    } else {
        (StatusCode::BAD_REQUEST, Json(json!({ "non_field_errors": ["Unable to log in with provided credentials."] })))
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    let expected = format!("Bearer {TOKEN}");
    headers.get("authorization").and_then(|v| v.to_str().ok()) == Some(expected.as_str())
}

async fn games(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Invalid token." })));
    }
    let results = json!([
        { "id": 1, "name": "Number Hunt", "type": "puzzle", "status": "PENDING" },
        { "id": 2, "name": "Word Race", "type": "quiz", "status": "ACTIVE" },
    ]);
    (StatusCode::OK, Json(json!({ "results": results })))
}

async fn moderate(headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Invalid token." })));
    }
    let status = match body["action"].as_str() {
        Some("approve") => "APPROVED",
        Some("reject") => "REJECTED",
        _ => "REVIEW_REQUESTED",
    };
    (StatusCode::OK, Json(json!({ "status": status, "moderation_comment": body["moderation_comment"] })))
}

async fn upload_lesson(headers: HeaderMap, mut multipart: Multipart) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "detail": "Invalid token." })));
    }
    let mut lesson = json!({ "id": 9, "status": "PENDING" });
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        if name == "file" {
            let file_name = field.file_name().unwrap_or_default().to_owned();
            let bytes = field.bytes().await.unwrap_or_default();
            lesson["file"] = json!(file_name);
            lesson["description"] = json!(format!("{} bytes", bytes.len()));
        } else {
            let text = field.text().await.unwrap_or_default();
            lesson[name] = json!(text);
        }
    }
    (StatusCode::CREATED, Json(lesson))
}

async fn dashboard() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "<html><body>Server Error</body></html>")
}

async fn spawn_backend() -> ReqwestTransport {
    let app = Router::new()
        .route("/api/auth/content/", post(login))
        .route("/api/content/games/", get(games))
        .route("/api/content/moderate/", post(moderate))
        .route("/api/content/lessons/", post(upload_lesson))
        .route("/api/content/dashboard/", get(dashboard));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    ReqwestTransport::new(&format!("http://{addr}/api/"))
}

fn signed_in() -> Session {
    Session::new(Some(TOKEN.to_owned()), None)
}

// =============================================================================
// TESTS
// =============================================================================

#[test]
fn base_url_trailing_slash_is_trimmed() {
    assert_eq!(ReqwestTransport::new("http://h/api/").base_url(), "http://h/api");
}

#[tokio::test]
async fn login_returns_token_and_user() {
    let transport = spawn_backend().await;
    let request = LoginRequest { email: "ama@example.org".to_owned(), password: "secret".to_owned() };

    let response = content::api::login(&transport, &request).await.unwrap();
    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user.unwrap().display_name(), "Ama Kollie");
}

#[tokio::test]
async fn bad_credentials_surface_field_errors() {
    let transport = spawn_backend().await;
    let request = LoginRequest { email: "ama@example.org".to_owned(), password: "nope".to_owned() };

    let err = content::api::login(&transport, &request).await.unwrap_err();
    let ClientError::Api(api) = err else { panic!("expected an api error") };
    assert_eq!(api.status, 400);
    assert_eq!(api.field("non_field_errors"), Some("Unable to log in with provided credentials."));
}

#[tokio::test]
async fn list_sends_bearer_token_and_decodes_envelope() {
    let transport = spawn_backend().await;

    let games: Vec<Game> = content::api::list(&transport, &signed_in()).await.unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].canonical_status(), CanonicalStatus::Pending);
    assert_eq!(games[1].canonical_status(), CanonicalStatus::Validated);
}

#[tokio::test]
async fn wrong_token_is_unauthorized() {
    let transport = spawn_backend().await;
    let session = Session::new(Some("stale".to_owned()), None);

    let err = content::api::list::<Game, _>(&transport, &session).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.user_message(), "Invalid token.");
}

#[tokio::test]
async fn approve_round_trip_updates_status() {
    let transport = spawn_backend().await;
    let session = signed_in();
    let games: Vec<Game> = content::api::list(&transport, &session).await.unwrap();

    let mut workflow = ModerationWorkflow::new();
    workflow.open(games[0].clone()).unwrap();
    let request = workflow.approve().unwrap();
    let response = content::api::moderate(&transport, &session, &request).await.unwrap();
    let outcome = workflow.complete(&response).unwrap();

    assert_eq!(outcome.status, CanonicalStatus::Validated);
    assert!(!workflow.is_open());
}

#[tokio::test]
async fn request_changes_carries_comment() {
    let transport = spawn_backend().await;
    let session = signed_in();
    let games: Vec<Game> = content::api::list(&transport, &session).await.unwrap();

    let mut workflow = ModerationWorkflow::new();
    workflow.open(games[0].clone()).unwrap();
    workflow.begin_request_changes().unwrap();
    workflow.update_comment("  Add a tutorial level ");
    let request = workflow.submit_comment().unwrap();
    let response = content::api::moderate(&transport, &session, &request).await.unwrap();
    let outcome = workflow.complete(&response).unwrap();

    assert_eq!(outcome.status, CanonicalStatus::RequestChanges);
    assert_eq!(outcome.comment.as_deref(), Some("Add a tutorial level"));
}

#[tokio::test]
async fn lesson_upload_is_multipart() {
    let transport = spawn_backend().await;
    let request = CreateLessonRequest {
        title: "Photosynthesis".to_owned(),
        subject: "Science".to_owned(),
        topic: "Plants".to_owned(),
        grade: "6".to_owned(),
        description: String::new(),
        resource_type: "pdf".to_owned(),
        status: DraftStatus::Pending,
        file: Some(FileUpload {
            file_name: "notes.pdf".to_owned(),
            content_type: "application/pdf".to_owned(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        }),
    };

    let lesson = content::api::create_lesson(&transport, &signed_in(), &request).await.unwrap();
    assert_eq!(lesson.title, "Photosynthesis");
    assert_eq!(lesson.resource_type.as_deref(), Some("pdf"));
    assert_eq!(lesson.file.as_deref(), Some("notes.pdf"));
    assert_eq!(lesson.description.as_deref(), Some("4 bytes"));
}

#[tokio::test]
async fn html_error_page_becomes_status_message() {
    let transport = spawn_backend().await;

    let err = content::api::dashboard(&transport, &signed_in()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.user_message(), "HTTP 500");
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new(&format!("http://{addr}/api"));
    let err = content::api::dashboard(&transport, &signed_in()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}
