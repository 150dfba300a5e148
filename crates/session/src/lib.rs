//! # docquery session
//!
//! The orchestration core of the docquery client: everything between user
//! intent and the typed HTTP client.
//!
//! - [`validate`] — pure pre-flight checks on a file selection
//! - [`SelectionSet`] — which assets scope the next question
//! - [`ConversationSession`] — history plus the single-flight send protocol
//! - [`AssetRegistry`] — list/upload/delete with deterministic error mapping
//! - [`AuthGuard`] — credential presence and the one-shot logout
//! - [`Notifier`] — the single-slot auto-dismissing notification
//! - [`Workspace`] — the façade the view layer drives
//!
//! All state mutation is single-threaded and cooperative: operations take
//! `&mut self`, network calls are awaited, and the two in-flight gates
//! (`sending`, `uploading`) reject synchronously rather than queueing.

pub mod auth;
pub mod conversation;
pub mod notify;
pub mod registry;
pub mod selection;
pub mod validate;
pub mod workspace;

pub use auth::{AuthGuard, SESSION_EXPIRED_TEXT};
pub use conversation::{ConversationSession, AUTH_REQUIRED_TEXT, NETWORK_ERROR_TEXT};
pub use notify::{Notification, Notifier, Severity, AUTO_DISMISS};
pub use registry::{AssetRegistry, ConfirmDelete};
pub use selection::SelectionSet;
pub use validate::{validate, FileMetadata, ValidationResult, MAX_UPLOAD_BYTES};
pub use workspace::{Command, Workspace};
