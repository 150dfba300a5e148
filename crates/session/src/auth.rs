//! Credential presence and the one-shot logout.
//!
//! Any component seeing a 401 calls [`AuthGuard::logout`]. The first call
//! per credential clears it and reports `true`, which the controller turns
//! into a redirect to the login view; later calls find nothing to clear and
//! report `false`. A burst of concurrent 401s therefore produces exactly
//! one navigation.

use docquery_core::CredentialStore;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Notification text used by every session-expiry path.
pub const SESSION_EXPIRED_TEXT: &str = "Session expired. Please login again.";

pub struct AuthGuard {
    store: Arc<dyn CredentialStore>,
    generation: AtomicU64,
}

impl AuthGuard {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            generation: AtomicU64::new(0),
        }
    }

    pub fn has_credential(&self) -> bool {
        self.store.load().is_some()
    }

    /// The persisted token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// Persist a fresh token after a successful login.
    pub fn install(&self, token: &str) {
        self.store.save(token);
    }

    /// Clear the credential. Returns `true` exactly when this call removed
    /// a present credential — the signal to leave the workspace view.
    pub fn logout(&self) -> bool {
        let cleared = self.store.clear();
        if cleared {
            self.generation.fetch_add(1, Ordering::SeqCst);
            tracing::info!("Credential cleared, session ended");
        }
        cleared
    }

    /// Bumped on every effective logout. Operations capture this before a
    /// network round trip and discard the response if it has moved, so a
    /// slow reply cannot mutate state that belongs to an ended session.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}
