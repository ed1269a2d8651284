use super::*;
use content::types::SessionUser;

#[test]
fn default_state_is_loading_and_does_not_redirect() {
    let state = SessionState::default();
    assert!(state.loading);
    assert!(!state.needs_login());
}

#[test]
fn loaded_anonymous_needs_login() {
    assert!(SessionState::loaded(Session::anonymous()).needs_login());
}

#[test]
fn loaded_with_token_stays() {
    let state = SessionState::loaded(Session::new(Some("t".to_owned()), None));
    assert!(!state.needs_login());
    assert_eq!(state.display_name(), "Validator");
}

#[test]
fn display_name_prefers_user() {
    let user = SessionUser { first_name: "Musu".to_owned(), last_name: "Kollie".to_owned(), ..SessionUser::default() };
    let state = SessionState::loaded(Session::new(Some("t".to_owned()), Some(user)));
    assert_eq!(state.display_name(), "Musu Kollie");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_store_is_empty() {
    let session = provider().load();
    assert!(!session.is_authenticated());
}
