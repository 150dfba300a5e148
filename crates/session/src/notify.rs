//! Single-slot transient notifications.
//!
//! At most one notification is live at a time: a new `show` replaces the
//! current one outright, nothing queues behind it. Every `show` re-arms the
//! auto-dismiss timer; each timer is tied to the notification it was armed
//! for by a sequence number, so a stale timer can never dismiss a newer
//! notification.

use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// How long a notification stays up without user action.
pub const AUTO_DISMISS: Duration = Duration::from_secs(6);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
}

#[derive(Default)]
struct Slot {
    current: Option<Notification>,
    /// Bumped on every show/dismiss; each timer remembers the value it was
    /// armed with and only dismisses if it still matches.
    seq: u64,
    timer: Option<JoinHandle<()>>,
}

/// Cloneable handle to the single notification slot.
#[derive(Clone, Default)]
pub struct Notifier {
    slot: Arc<Mutex<Slot>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the live notification and re-arm the dismiss timer.
    pub fn show(&self, text: impl Into<String>, severity: Severity) {
        let mut slot = self.slot.lock().unwrap();
        slot.seq += 1;
        let armed_for = slot.seq;

        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }

        let notification = Notification {
            text: text.into(),
            severity,
        };
        tracing::debug!(text = %notification.text, ?severity, "Showing notification");
        slot.current = Some(notification);

        let shared = Arc::clone(&self.slot);
        slot.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            let mut slot = shared.lock().unwrap();
            if slot.seq == armed_for {
                slot.current = None;
                slot.timer = None;
            }
        }));
    }

    /// Hide the live notification and cancel its pending timer.
    pub fn dismiss(&self) {
        let mut slot = self.slot.lock().unwrap();
        slot.seq += 1;
        if let Some(timer) = slot.timer.take() {
            timer.abort();
        }
        slot.current = None;
    }

    /// The live notification for rendering, if any.
    pub fn current(&self) -> Option<Notification> {
        self.slot.lock().unwrap().current.clone()
    }
}
