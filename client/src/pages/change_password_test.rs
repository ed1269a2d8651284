use super::*;

use content::ApiError;

#[test]
fn local_error_takes_precedence() {
    let local = vec![FieldError::new("new_password", "New password is required.")];
    let server = ClientError::Api(ApiError::from_body(400, r#"{"new_password": ["Too common."]}"#));
    assert_eq!(
        merged_field_message(&local, Some(&server), "new_password").as_deref(),
        Some("New password is required.")
    );
}

#[test]
fn server_field_error_is_shown_when_form_is_valid() {
    let server = ClientError::Api(ApiError::from_body(400, r#"{"old_password": ["Wrong password."]}"#));
    assert_eq!(merged_field_message(&[], Some(&server), "old_password").as_deref(), Some("Wrong password."));
    assert_eq!(merged_field_message(&[], Some(&server), "new_password"), None);
}

#[test]
fn non_api_errors_have_no_field_message() {
    let server = ClientError::Transport("offline".to_owned());
    assert_eq!(merged_field_message(&[], Some(&server), "old_password"), None);
    assert_eq!(merged_field_message(&[], None, "old_password"), None);
}
