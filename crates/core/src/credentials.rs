//! Persisted bearer credential seam.
//!
//! The session layer never reaches into shared process state for the token;
//! a [`CredentialStore`] is injected into whatever needs one, so tests can
//! substitute an in-memory fake. The store knows nothing about how the
//! token is obtained or what it authorizes — it exists or it doesn't.

use std::sync::Mutex;

/// Storage for the bearer token.
pub trait CredentialStore: Send + Sync {
    /// The currently persisted token, if any.
    fn load(&self) -> Option<String>;

    /// Persist a new token, replacing any previous one.
    fn save(&self, token: &str);

    /// Remove the persisted token. Returns whether one was present —
    /// callers use this to fire one-shot logout effects exactly once.
    fn clear(&self) -> bool;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_owned());
    }

    fn clear(&self) -> bool {
        self.token.lock().unwrap().take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.load(), None);

        store.save("tok-abc");
        assert_eq!(store.load().as_deref(), Some("tok-abc"));
    }

    #[test]
    fn clear_reports_presence_once() {
        let store = MemoryCredentialStore::with_token("tok-abc");
        assert!(store.clear());
        assert!(!store.clear());
        assert_eq!(store.load(), None);
    }
}
