//! Session notifications
//!
//! Notifications only live in memory for the current session and are never
//! written to disk.

use chrono::{DateTime, Local};

/// A message raised during the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub raised_at: DateTime<Local>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            raised_at: Local::now(),
        }
    }
}

/// Newest-first list of notifications for the running session
#[derive(Debug, Clone, Default)]
pub struct NotificationList {
    items: Vec<Notification>,
}

impl NotificationList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a notification so the newest is first
    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
    }

    /// Most recent notification, the one a banner would show
    pub fn latest(&self) -> Option<&Notification> {
        self.items.first()
    }

    pub fn all(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dismiss everything
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
