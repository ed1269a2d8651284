//! Session persistence for the CLI: one small JSON object on disk.
//!
//! The file holds the same `auth_token` / `user` keys the browser keeps in
//! `localStorage`, so `content::SessionProvider` works unchanged.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use content::SessionStore;
use content::session::StoreError;

pub const DEFAULT_SESSION_FILE: &str = ".elearn/session.json";

/// Default session path: `$HOME/.elearn/session.json`, or the working
/// directory when `HOME` is unset.
pub fn default_session_path() -> PathBuf {
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(DEFAULT_SESSION_FILE),
        None => PathBuf::from("elearn-session.json"),
    }
}

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> BTreeMap<String, String> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
            BTreeMap::new()
        })
    }

    fn write(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StoreError(e.to_string())),
            };
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError(e.to_string()))?;
        }
        let raw = serde_json::to_string_pretty(entries).map_err(|e| StoreError(e.to_string()))?;
        write_private(&self.path, &raw).map_err(|e| StoreError(e.to_string()))
    }
}

/// Write `raw` readable by the owner only; an existing file is tightened too.
fn write_private(path: &Path, raw: &str) -> std::io::Result<()> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    file.write_all(raw.as_bytes())
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read();
        entries.insert(key.to_owned(), value.to_owned());
        self.write(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write(&entries)
    }
}
