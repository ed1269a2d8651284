use super::*;

use content::SessionProvider;
use content::types::{LoginResponse, SessionUser};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("elearn-store-{}-{name}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir.join("nested").join("session.json")
}

#[test]
fn missing_file_reads_as_empty() {
    let store = FileStore::new(scratch_path("missing"));
    assert_eq!(store.get("auth_token"), None);
    assert!(store.remove("auth_token").is_ok());
}

#[test]
fn set_creates_parent_dirs_and_round_trips() {
    let path = scratch_path("roundtrip");
    let store = FileStore::new(&path);
    store.set("auth_token", "abc").unwrap();

    assert!(path.exists());
    assert_eq!(FileStore::new(&path).get("auth_token").as_deref(), Some("abc"));
}

#[test]
fn removing_last_key_deletes_file() {
    let path = scratch_path("cleanup");
    let store = FileStore::new(&path);
    store.set("auth_token", "abc").unwrap();
    store.remove("auth_token").unwrap();
    assert!(!path.exists());
}

#[test]
fn corrupt_file_is_ignored() {
    let path = scratch_path("corrupt");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "not json").unwrap();
    assert_eq!(FileStore::new(&path).get("auth_token"), None);
}

#[test]
fn provider_sign_in_and_out_through_file() {
    let path = scratch_path("provider");
    let provider = SessionProvider::new(FileStore::new(&path));
    let login = LoginResponse {
        token: "tok-1".to_owned(),
        user: Some(SessionUser { email: "v@example.org".to_owned(), ..SessionUser::default() }),
    };

    provider.sign_in(&login).unwrap();
    let loaded = SessionProvider::new(FileStore::new(&path)).load();
    assert_eq!(loaded.token().unwrap(), "tok-1");
    assert_eq!(loaded.user().map(|u| u.email.as_str()), Some("v@example.org"));

    provider.sign_out().unwrap();
    assert!(!provider.load().is_authenticated());
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn session_file_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let path = scratch_path("private");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{}").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    FileStore::new(&path).set("auth_token", "secret").unwrap();
    let mode = std::fs::metadata(&path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
