//! File-backed credential store.
//!
//! Persists the bearer token as a single line at `~/.docquery/token`.
//! Persistence failures are logged and swallowed: losing the token degrades
//! to a fresh login, it is never a crash.

use docquery_core::CredentialStore;
use std::path::PathBuf;

/// Bearer token persisted on disk.
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location, `~/.docquery/token`.
    pub fn at_default_path() -> Self {
        Self::new(crate::AppConfig::token_path())
    }
}

impl CredentialStore for FileCredentialStore {
    fn load(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_owned())
                }
            }
            Err(_) => None,
        }
    }

    fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Could not create {}: {e}", parent.display());
                return;
            }
        }

        if let Err(e) = std::fs::write(&self.path, token) {
            tracing::warn!("Could not persist token at {}: {e}", self.path.display());
            return;
        }

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let _ = std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600));
        }
    }

    fn clear(&self) -> bool {
        match std::fs::remove_file(&self.path) {
            Ok(()) => true,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => false,
            Err(e) => {
                tracing::warn!("Could not remove token at {}: {e}", self.path.display());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileCredentialStore {
        FileCredentialStore::new(dir.path().join("token"))
    }

    #[test]
    fn save_load_clear_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load(), None);

        store.save("tok-abc");
        assert_eq!(store.load().as_deref(), Some("tok-abc"));

        assert!(store.clear());
        assert_eq!(store.load(), None);
        assert!(!store.clear());
    }

    #[test]
    fn load_trims_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(dir.path().join("token"), "tok-abc\n").unwrap();
        assert_eq!(store.load().as_deref(), Some("tok-abc"));
    }

    #[test]
    fn whitespace_only_file_is_no_credential() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(dir.path().join("token"), "  \n").unwrap();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCredentialStore::new(dir.path().join("nested/dir/token"));
        store.save("tok-abc");
        assert_eq!(store.load().as_deref(), Some("tok-abc"));
    }
}
