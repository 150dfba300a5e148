//! The asset registry — create/list/delete over the backend.
//!
//! Owns the local copy of the listing and the `uploading` gate. Every
//! operation resolves into a notification; refreshes replace the listing
//! wholesale (last response wins — concurrent refreshes are not mutually
//! excluded, which is an accepted limitation, not a consistency guarantee).

use crate::auth::{AuthGuard, SESSION_EXPIRED_TEXT};
use crate::notify::{Notifier, Severity};
use crate::selection::SelectionSet;
use crate::validate::{validate, FileMetadata};
use crate::workspace::Command;
use async_trait::async_trait;
use docquery_client::ApiClient;
use docquery_core::{
    Asset, AssetId, AssetKind, DeleteOutcome, FilePayload, ListOutcome, UploadOutcome,
};
use std::sync::Arc;
use tracing::debug;

/// Asks the user to confirm a destructive action. Implemented by the UI;
/// a `false` answer aborts the operation with no side effects.
#[async_trait]
pub trait ConfirmDelete: Send + Sync {
    async fn confirm(&self, filename: &str) -> bool;
}

pub struct AssetRegistry {
    api: ApiClient,
    guard: Arc<AuthGuard>,
    notifier: Notifier,
    assets: Vec<Asset>,
    uploading: bool,
}

impl AssetRegistry {
    pub fn new(api: ApiClient, guard: Arc<AuthGuard>, notifier: Notifier) -> Self {
        Self {
            api,
            guard,
            notifier,
            assets: Vec::new(),
            uploading: false,
        }
    }

    /// The last-known listing.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn find(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|asset| asset.id == id)
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    /// Fetch the listing and replace the local copy wholesale.
    pub async fn refresh(&mut self) -> Option<Command> {
        let Some(token) = self.guard.token() else {
            return self.expire_session();
        };

        let generation = self.guard.generation();
        match self.api.list_assets(&token).await {
            ListOutcome::Listed(assets) => {
                if self.guard.generation() != generation {
                    debug!("Discarding asset listing that resolved after logout");
                    return None;
                }
                self.assets = assets;
                None
            }
            ListOutcome::AuthExpired => self.expire_session(),
            ListOutcome::Failed { status } => {
                self.notifier.show(
                    format!("Could not load your files (status {status})."),
                    Severity::Error,
                );
                None
            }
            ListOutcome::Transport(_) => {
                self.notifier
                    .show("Network error. Could not load your files.", Severity::Error);
                None
            }
        }
    }

    /// Upload a file after a local validation pass. Invalid files never
    /// reach the network; a second upload while one is in flight is
    /// rejected, not queued.
    pub async fn upload(&mut self, file: Option<FilePayload>) -> Option<Command> {
        if self.uploading {
            self.notifier
                .show("An upload is already in progress.", Severity::Warning);
            return None;
        }

        let metadata = file.as_ref().map(|f| FileMetadata {
            mime_type: f.mime_type.clone(),
            size_bytes: f.bytes.len() as u64,
        });
        let verdict = validate(metadata.as_ref());
        if let Some(error) = verdict.error {
            self.notifier.show(error, Severity::Error);
            return None;
        }
        let Some(file) = file else {
            // validate() already rejected the absent case
            return None;
        };

        let Some(token) = self.guard.token() else {
            return self.expire_session();
        };

        let filename = file.filename.clone();
        let label = AssetKind::from_mime(&file.mime_type)
            .map(|kind| kind.label())
            .unwrap_or("file");

        self.uploading = true;
        let generation = self.guard.generation();
        let outcome = self.api.upload_asset(&token, file).await;
        self.uploading = false;

        if self.guard.generation() != generation {
            debug!("Discarding upload outcome that resolved after logout");
            return None;
        }

        match outcome {
            UploadOutcome::Uploaded => {
                self.notifier.show(
                    format!("Uploaded {label} \"{filename}\"."),
                    Severity::Success,
                );
                self.refresh().await
            }
            UploadOutcome::AuthExpired => self.expire_session(),
            UploadOutcome::TooLarge => {
                self.notifier
                    .show("The server rejected the file: too large.", Severity::Error);
                None
            }
            UploadOutcome::Unsupported => {
                self.notifier.show(
                    "The server rejected the file: unsupported type.",
                    Severity::Error,
                );
                None
            }
            UploadOutcome::BadRequest(detail) => {
                let text =
                    detail.unwrap_or_else(|| "The server rejected the upload.".into());
                self.notifier.show(text, Severity::Error);
                None
            }
            UploadOutcome::ServerFault => {
                self.notifier
                    .show("Server error. Please try again later.", Severity::Error);
                None
            }
            UploadOutcome::Failed { status, detail } => {
                let text =
                    detail.unwrap_or_else(|| format!("Upload failed with status {status}."));
                self.notifier.show(text, Severity::Error);
                None
            }
            UploadOutcome::Transport(_) => {
                self.notifier
                    .show("Network error. The file was not uploaded.", Severity::Error);
                None
            }
        }
    }

    /// Delete an asset after interactive confirmation, pruning it from the
    /// selection so no dangling id survives.
    pub async fn delete(
        &mut self,
        selection: &mut SelectionSet,
        id: AssetId,
        confirm: &dyn ConfirmDelete,
    ) -> Option<Command> {
        let filename = self
            .find(id)
            .map(|asset| asset.filename.clone())
            .unwrap_or_else(|| format!("file {id}"));

        if !confirm.confirm(&filename).await {
            return None;
        }

        let Some(token) = self.guard.token() else {
            return self.expire_session();
        };

        let generation = self.guard.generation();
        let outcome = self.api.delete_asset(&token, id).await;

        if self.guard.generation() != generation {
            debug!("Discarding delete outcome that resolved after logout");
            return None;
        }

        match outcome {
            DeleteOutcome::Deleted => {
                selection.prune(id);
                self.notifier
                    .show(format!("Deleted \"{filename}\"."), Severity::Success);
                self.refresh().await
            }
            DeleteOutcome::AuthExpired => self.expire_session(),
            DeleteOutcome::AlreadyGone => {
                selection.prune(id);
                self.notifier
                    .show("That file was already deleted.", Severity::Warning);
                self.refresh().await
            }
            DeleteOutcome::Failed { status } => {
                self.notifier.show(
                    format!("Could not delete \"{filename}\" (status {status})."),
                    Severity::Error,
                );
                None
            }
            DeleteOutcome::Transport(_) => {
                self.notifier
                    .show("Network error. The file was not deleted.", Severity::Error);
                None
            }
        }
    }

    fn expire_session(&self) -> Option<Command> {
        self.notifier.show(SESSION_EXPIRED_TEXT, Severity::Error);
        self.guard.logout().then_some(Command::RedirectToLogin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docquery_client::ScriptedTransport;
    use docquery_core::MemoryCredentialStore;
    use serde_json::json;

    struct Always(bool);

    #[async_trait]
    impl ConfirmDelete for Always {
        async fn confirm(&self, _filename: &str) -> bool {
            self.0
        }
    }

    fn registry_with(transport: Arc<ScriptedTransport>) -> AssetRegistry {
        let guard = Arc::new(AuthGuard::new(Arc::new(MemoryCredentialStore::with_token(
            "tok",
        ))));
        AssetRegistry::new(ApiClient::new(transport), guard, Notifier::new())
    }

    fn listing_body() -> serde_json::Value {
        json!([
            {"id": 7, "filename": "policy.pdf", "type": "pdf", "created_at": "2025-11-03T10:15:00Z"}
        ])
    }

    fn pdf_payload(size: usize) -> FilePayload {
        FilePayload {
            filename: "policy.pdf".into(),
            mime_type: "application/pdf".into(),
            bytes: vec![0u8; size],
        }
    }

    #[tokio::test]
    async fn refresh_replaces_listing_wholesale() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(200, listing_body());
        transport.respond(200, json!([]));

        let mut registry = registry_with(transport);
        registry.refresh().await;
        assert_eq!(registry.assets().len(), 1);

        // Second refresh replaces, not merges.
        registry.refresh().await;
        assert!(registry.assets().is_empty());
    }

    #[tokio::test]
    async fn refresh_401_expires_the_session_once() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_status(401);

        let mut registry = registry_with(transport);
        let command = registry.refresh().await;
        assert_eq!(command, Some(Command::RedirectToLogin));
        assert_eq!(
            registry.notifier.current().unwrap().text,
            SESSION_EXPIRED_TEXT
        );

        // The credential is gone; a later 401 path cannot navigate again.
        let command = registry.refresh().await;
        assert_eq!(command, None);
    }

    #[tokio::test]
    async fn invalid_file_never_reaches_the_network() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut registry = registry_with(transport.clone());

        // 15 MB PNG: rejected locally, citing the 10MB limit.
        let oversized = FilePayload {
            filename: "big.png".into(),
            mime_type: "image/png".into(),
            bytes: vec![0u8; 15 * 1024 * 1024],
        };
        registry.upload(Some(oversized)).await;

        assert_eq!(transport.request_count(), 0);
        let notification = registry.notifier.current().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert!(notification.text.contains("10MB"));
    }

    #[tokio::test]
    async fn missing_file_never_reaches_the_network() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut registry = registry_with(transport.clone());

        registry.upload(None).await;

        assert_eq!(transport.request_count(), 0);
        assert_eq!(
            registry.notifier.current().unwrap().text,
            "No file selected"
        );
    }

    #[tokio::test]
    async fn successful_upload_notifies_and_refreshes() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(200, json!({"message": "Upload and Ingestion Successful"}));
        transport.respond(200, listing_body());

        let mut registry = registry_with(transport.clone());
        let command = registry.upload(Some(pdf_payload(128))).await;

        assert_eq!(command, None);
        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.recorded()[1].path, "/assets/");
        assert_eq!(registry.assets().len(), 1);

        let notification = registry.notifier.current().unwrap();
        assert_eq!(notification.severity, Severity::Success);
        assert!(notification.text.contains("policy.pdf"));
        assert!(notification.text.contains("PDF"));
    }

    #[tokio::test]
    async fn upload_413_does_not_refresh() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_status(413);

        let mut registry = registry_with(transport.clone());
        registry.upload(Some(pdf_payload(128))).await;

        assert_eq!(transport.request_count(), 1);
        let notification = registry.notifier.current().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert!(notification.text.contains("too large"));
    }

    #[tokio::test]
    async fn upload_400_surfaces_server_detail() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(400, json!({"error": "Invalid file type"}));

        let mut registry = registry_with(transport);
        registry.upload(Some(pdf_payload(128))).await;

        assert_eq!(
            registry.notifier.current().unwrap().text,
            "Invalid file type"
        );
    }

    #[tokio::test]
    async fn upload_transport_failure_is_worded_as_network_error() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_transport_failure("connection refused");

        let mut registry = registry_with(transport);
        registry.upload(Some(pdf_payload(128))).await;

        assert!(registry
            .notifier
            .current()
            .unwrap()
            .text
            .starts_with("Network error"));
    }

    #[tokio::test]
    async fn declined_confirmation_aborts_with_no_side_effects() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut registry = registry_with(transport.clone());
        let mut selection = SelectionSet::new();
        selection.toggle(AssetId(42));

        let command = registry
            .delete(&mut selection, AssetId(42), &Always(false))
            .await;

        assert_eq!(command, None);
        assert_eq!(transport.request_count(), 0);
        assert!(selection.contains(AssetId(42)));
        assert_eq!(registry.notifier.current(), None);
    }

    #[tokio::test]
    async fn delete_prunes_selection_and_refreshes() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(200, json!({"message": "deleted"}));
        transport.respond(200, json!([]));

        let mut registry = registry_with(transport.clone());
        let mut selection = SelectionSet::new();
        selection.toggle(AssetId(42));

        registry
            .delete(&mut selection, AssetId(42), &Always(true))
            .await;

        assert!(!selection.contains(AssetId(42)));
        assert_eq!(transport.request_count(), 2);
        assert_eq!(
            registry.notifier.current().unwrap().severity,
            Severity::Success
        );
    }

    #[tokio::test]
    async fn delete_of_never_selected_asset_is_a_quiet_prune() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(200, json!({"message": "deleted"}));
        transport.respond(200, json!([]));

        let mut registry = registry_with(transport);
        let mut selection = SelectionSet::new();

        registry
            .delete(&mut selection, AssetId(42), &Always(true))
            .await;

        assert!(selection.is_empty());
    }

    #[tokio::test]
    async fn delete_404_warns_and_still_refreshes() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond_status(404);
        transport.respond(200, json!([]));

        let mut registry = registry_with(transport.clone());
        let mut selection = SelectionSet::new();

        let command = registry
            .delete(&mut selection, AssetId(42), &Always(true))
            .await;

        assert_eq!(command, None);
        assert_eq!(transport.request_count(), 2);
        assert_eq!(transport.recorded()[1].path, "/assets/");
        assert_eq!(
            registry.notifier.current().unwrap().severity,
            Severity::Warning
        );
    }

    #[tokio::test]
    async fn delete_transport_failure_changes_nothing() {
        let transport = Arc::new(ScriptedTransport::new());
        transport.respond(200, listing_body());
        transport.respond_transport_failure("connection reset");

        let mut registry = registry_with(transport.clone());
        registry.refresh().await;

        let mut selection = SelectionSet::new();
        selection.toggle(AssetId(7));

        registry
            .delete(&mut selection, AssetId(7), &Always(true))
            .await;

        assert!(selection.contains(AssetId(7)));
        assert_eq!(registry.assets().len(), 1);
        assert!(registry
            .notifier
            .current()
            .unwrap()
            .text
            .starts_with("Network error"));
    }
}
