use super::*;

use content::ApiError;

#[test]
fn bad_credentials_get_a_generic_message() {
    let err = ClientError::Api(ApiError::from_body(401, ""));
    assert_eq!(login_failure_message(&err), INVALID_CREDENTIALS_MESSAGE);
}

#[test]
fn non_field_errors_are_shown_verbatim() {
    let body = r#"{"non_field_errors": ["Account is disabled."]}"#;
    let err = ClientError::Api(ApiError::from_body(400, body));
    assert_eq!(login_failure_message(&err), "Account is disabled.");
}

#[test]
fn detail_message_wins_over_generic_text() {
    let err = ClientError::Api(ApiError::from_body(403, r#"{"detail": "Not a validator account."}"#));
    assert_eq!(login_failure_message(&err), "Not a validator account.");
}

#[test]
fn network_failures_use_the_transport_message() {
    let err = ClientError::Transport("connection refused".to_owned());
    assert_eq!(login_failure_message(&err), err.user_message());
}
