//! The workspace — the main view's orchestrator.
//!
//! Wires the registry, selection set, conversation and notifier together
//! behind the operations the view layer calls. The workspace never
//! navigates by itself: operations that end the session hand back a
//! [`Command`] for the embedding controller to execute.

use crate::auth::AuthGuard;
use crate::conversation::ConversationSession;
use crate::notify::{Notification, Notifier, Severity};
use crate::registry::{AssetRegistry, ConfirmDelete};
use crate::selection::SelectionSet;
use docquery_client::ApiClient;
use docquery_core::{Asset, AssetId, CredentialStore, FilePayload, Message};
use std::sync::Arc;

/// Side effects the orchestration cannot perform itself; the embedding
/// controller executes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The session ended (logout or expiry) — leave the workspace view.
    RedirectToLogin,
}

pub struct Workspace {
    guard: Arc<AuthGuard>,
    notifier: Notifier,
    registry: AssetRegistry,
    conversation: ConversationSession,
    selection: SelectionSet,
}

impl Workspace {
    pub fn new(api: ApiClient, store: Arc<dyn CredentialStore>) -> Self {
        let guard = Arc::new(AuthGuard::new(store));
        let notifier = Notifier::new();

        Self {
            registry: AssetRegistry::new(api.clone(), Arc::clone(&guard), notifier.clone()),
            conversation: ConversationSession::new(api, Arc::clone(&guard), notifier.clone()),
            selection: SelectionSet::new(),
            guard,
            notifier,
        }
    }

    // --- rendering accessors ---

    pub fn assets(&self) -> &[Asset] {
        self.registry.assets()
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn notification(&self) -> Option<Notification> {
        self.notifier.current()
    }

    pub fn is_uploading(&self) -> bool {
        self.registry.is_uploading()
    }

    pub fn is_sending(&self) -> bool {
        self.conversation.is_sending()
    }

    // --- operations ---

    /// Reload the asset listing.
    pub async fn refresh_assets(&mut self) -> Option<Command> {
        self.registry.refresh().await
    }

    /// Upload a file (or surface why there is nothing to upload).
    pub async fn upload(&mut self, file: Option<FilePayload>) -> Option<Command> {
        self.registry.upload(file).await
    }

    /// Delete an asset after interactive confirmation.
    pub async fn delete_asset(
        &mut self,
        id: AssetId,
        confirm: &dyn ConfirmDelete,
    ) -> Option<Command> {
        self.registry.delete(&mut self.selection, id, confirm).await
    }

    /// Toggle an asset in or out of the question scope. Only assets in the
    /// last-known listing can be selected, so the selection never holds an
    /// id the registry does not know about.
    pub fn toggle_selection(&mut self, id: AssetId) -> bool {
        if !self.selection.contains(id) && self.registry.find(id).is_none() {
            self.notifier
                .show(format!("No file with id {id}."), Severity::Warning);
            return false;
        }
        self.selection.toggle(id)
    }

    /// Ask a question scoped to the current selection.
    pub async fn ask(&mut self, question: &str) -> Option<Command> {
        self.conversation.send(question, &self.selection).await
    }

    /// User-initiated logout: always leaves the workspace view.
    pub fn logout(&mut self) -> Command {
        self.guard.logout();
        Command::RedirectToLogin
    }

    pub fn dismiss_notification(&self) {
        self.notifier.dismiss();
    }
}
