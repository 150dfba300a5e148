//! The conversation session — message history plus the send/receive
//! protocol for questions.
//!
//! The session's core invariant: at most one chat request is in flight at a
//! time. A send appends the user's message optimistically before the round
//! trip, and every failure lands on both channels — an assistant-role error
//! message in the history and a notification — so the history itself shows
//! what happened. `sending` is released on every exit path.

use crate::auth::{AuthGuard, SESSION_EXPIRED_TEXT};
use crate::notify::{Notifier, Severity};
use crate::selection::SelectionSet;
use crate::workspace::Command;
use docquery_client::ApiClient;
use docquery_core::{ChatOutcome, Message};
use std::sync::Arc;
use tracing::debug;

/// Wording for a request that never produced an HTTP response. Kept apart
/// from every HTTP-level failure text.
pub const NETWORK_ERROR_TEXT: &str = "Network error. Check your connection and try again.";

/// Wording for a send attempted without a persisted credential.
pub const AUTH_REQUIRED_TEXT: &str = "You are not logged in. Please login again.";

pub struct ConversationSession {
    api: ApiClient,
    guard: Arc<AuthGuard>,
    notifier: Notifier,
    messages: Vec<Message>,
    sending: bool,
}

impl ConversationSession {
    pub fn new(api: ApiClient, guard: Arc<AuthGuard>, notifier: Notifier) -> Self {
        Self {
            api,
            guard,
            notifier,
            messages: Vec::new(),
            sending: false,
        }
    }

    /// The full history, oldest first. Append-only — nothing here is ever
    /// edited or removed.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Ask a question scoped to the given selection.
    pub async fn send(&mut self, question: &str, selection: &SelectionSet) -> Option<Command> {
        let question = question.trim();
        if question.is_empty() {
            self.notifier.show("Type a question first.", Severity::Info);
            return None;
        }
        if self.sending {
            self.notifier.show(
                "Still waiting for the previous answer.",
                Severity::Warning,
            );
            return None;
        }

        // Optimistic echo: the user's message is in the history before any
        // network round trip.
        self.messages.push(Message::user(question));
        self.sending = true;

        let command = self.exchange(question, selection).await;

        self.sending = false;
        command
    }

    async fn exchange(&mut self, question: &str, selection: &SelectionSet) -> Option<Command> {
        let Some(token) = self.guard.token() else {
            self.record_failure(AUTH_REQUIRED_TEXT);
            return self.guard.logout().then_some(Command::RedirectToLogin);
        };

        // An empty selection means "search across all documents": the field
        // is omitted entirely, never sent as an empty list.
        let asset_ids = if selection.is_empty() {
            None
        } else {
            Some(selection.ids())
        };

        let generation = self.guard.generation();
        let outcome = self.api.ask(&token, question, asset_ids).await;

        if self.guard.generation() != generation {
            debug!("Discarding chat response that resolved after logout");
            return None;
        }

        match outcome {
            ChatOutcome::Answered { answer, sources } => {
                self.messages.push(Message::assistant(answer, sources));
                None
            }
            ChatOutcome::Malformed => {
                self.record_failure("Invalid response from server.");
                None
            }
            ChatOutcome::AuthExpired => {
                self.record_failure(SESSION_EXPIRED_TEXT);
                self.guard.logout().then_some(Command::RedirectToLogin)
            }
            ChatOutcome::BadRequest(detail) => {
                self.record_failure(&detail.unwrap_or_else(|| "Invalid request.".into()));
                None
            }
            ChatOutcome::SelectionGone => {
                self.record_failure(
                    "One or more selected files were not found. Refresh and try again.",
                );
                None
            }
            ChatOutcome::ServerFault => {
                self.record_failure("Server error. Please try again later.");
                None
            }
            ChatOutcome::Failed { status } => {
                self.record_failure(&format!("Request failed with status {status}."));
                None
            }
            ChatOutcome::Transport(_) => {
                self.record_failure(NETWORK_ERROR_TEXT);
                None
            }
        }
    }

    /// A failed exchange lands on both channels: an assistant-role message
    /// in the history and a notification. Neither replaces the other.
    fn record_failure(&mut self, text: &str) {
        self.messages.push(Message::assistant(text, Vec::new()));
        self.notifier.show(text, Severity::Error);
    }
}
