use super::*;

#[test]
fn url_joins_base_and_path() {
    let transport = GlooTransport::new("https://api.elearn.lr/api/");
    let request = ApiRequest::get("/content/games/");
    assert_eq!(transport.url_for(&request), "https://api.elearn.lr/api/content/games/");
}

#[test]
fn default_uses_compiled_base_url() {
    let transport = GlooTransport::default();
    assert!(transport.url_for(&ApiRequest::get("/x")).starts_with(API_BASE_URL.trim_end_matches('/')));
}

#[test]
fn unreadable_body_is_a_transport_error() {
    let err = response_body::<&str>(Err("stream aborted")).unwrap_err();
    assert!(matches!(err, ClientError::Transport(ref msg) if msg.contains("stream aborted")));
}

#[test]
fn readable_body_passes_through() {
    assert_eq!(response_body::<&str>(Ok("[]".to_owned())).unwrap(), "[]");
}
