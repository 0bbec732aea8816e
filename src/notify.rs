//! Notification boundary: trait abstraction plus the toast queue
//! implementation used by the TUI

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyKind {
    Error,
    Success,
}

/// Sink for fire-and-forget user notifications, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&mut self, kind: NotifyKind, message: &str);
}

/// A single notification with its display deadline
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: NotifyKind,
    pub message: String,
    expires_at: Instant,
}

/// Queue of transient toast messages rendered in the status bar
#[derive(Debug)]
pub struct Toasts {
    queue: VecDeque<Toast>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            lifetime,
        }
    }

    /// Drop toasts whose display time has elapsed
    pub fn prune(&mut self) {
        let now = Instant::now();
        self.queue.retain(|toast| toast.expires_at > now);
    }

    /// The toast to render: the most recently pushed live one
    pub fn current(&self) -> Option<&Toast> {
        self.queue.back()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Notifier for Toasts {
    fn notify(&mut self, kind: NotifyKind, message: &str) {
        match kind {
            NotifyKind::Error => tracing::warn!(toast = message, "notification"),
            NotifyKind::Success => tracing::info!(toast = message, "notification"),
        }
        self.queue.push_back(Toast {
            kind,
            message: message.to_string(),
            expires_at: Instant::now() + self.lifetime,
        });
    }
}
