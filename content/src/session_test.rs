use super::*;

#[test]
fn empty_store_yields_anonymous_session() {
    let provider = SessionProvider::new(MemoryStore::new());
    let session = provider.load();
    assert!(!session.is_authenticated());
    assert_eq!(session.token(), Err(ClientError::MissingToken));
}

#[test]
fn blank_token_counts_as_missing() {
    let provider = SessionProvider::new(MemoryStore::new().with_entry(AUTH_TOKEN_KEY, "   "));
    assert_eq!(provider.load().token(), Err(ClientError::MissingToken));
}

#[test]
fn token_produces_bearer_header() {
    let provider = SessionProvider::new(MemoryStore::new().with_entry(AUTH_TOKEN_KEY, "abc123"));
    let session = provider.load();
    assert_eq!(session.token(), Ok("abc123"));
    assert_eq!(session.authorization(), Ok("Bearer abc123".to_owned()));
}

#[test]
fn corrupt_user_entry_keeps_token() {
    let store = MemoryStore::new().with_entry(AUTH_TOKEN_KEY, "t").with_entry(USER_KEY, "{not json");
    let session = SessionProvider::new(store).load();
    assert!(session.is_authenticated());
    assert!(session.user().is_none());
}

#[test]
fn sign_in_persists_both_keys_and_sign_out_clears_them() {
    let provider = SessionProvider::new(MemoryStore::new());
    let login = LoginResponse {
        token: "tok".to_owned(),
        user: Some(SessionUser { email: "v@elearn.lr".to_owned(), first_name: "Vera".to_owned(), ..SessionUser::default() }),
    };
    let session = provider.sign_in(&login).unwrap();
    assert_eq!(session.user().map(SessionUser::display_name), Some("Vera".to_owned()));
    assert_eq!(provider.store().get(AUTH_TOKEN_KEY).as_deref(), Some("tok"));
    assert!(provider.store().get(USER_KEY).is_some_and(|raw| raw.contains("v@elearn.lr")));

    let reloaded = provider.load();
    assert_eq!(reloaded, session);

    provider.sign_out().unwrap();
    assert_eq!(provider.store().get(AUTH_TOKEN_KEY), None);
    assert_eq!(provider.store().get(USER_KEY), None);
}

#[test]
fn sign_in_without_user_drops_stale_user() {
    let provider = SessionProvider::new(MemoryStore::new().with_entry(USER_KEY, r#"{"email":"old@x"}"#));
    provider.sign_in(&LoginResponse { token: "t2".to_owned(), user: None }).unwrap();
    assert_eq!(provider.store().get(USER_KEY), None);
}
