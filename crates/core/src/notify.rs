use std::sync::Mutex;

use crate::models::notification::Notification;

/// Fire-and-forget sink for user-facing notifications.
///
/// The cart pushes at most one notification per failed operation; what
/// happens to it (toast, log line, nothing) is the sink's business.
/// Implementations must not fail — there is no return channel.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Discards every notification. The default sink.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn notify(&self, _notification: Notification) {}
}

/// Records notifications in order. Used by tests to assert exactly how
/// many were fired, and by UIs that drain messages on their own cadence.
#[derive(Default)]
pub struct BufferSink {
    buffer: Mutex<Vec<Notification>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything notified so far, oldest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Drain the buffer, returning the recorded notifications.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(
            &mut *self
                .buffer
                .lock()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }
}

impl NotificationSink for BufferSink {
    fn notify(&self, notification: Notification) {
        self.buffer
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(notification);
    }
}
