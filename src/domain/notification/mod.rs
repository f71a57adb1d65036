//! Notification domain — in-game inbox messages.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A user notification.
///
/// Lenient: every missing field decodes to its empty value. `subject` and
/// `content` are flattened from the backend's message-prototype objects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::NotificationWire")]
pub struct Notification {
    pub id: String,
    pub subject: String,
    pub content: String,
    pub date: Option<DateTime<Utc>>,
    pub read_by_receiver: bool,
    pub receiver_id: String,
    pub receiver_username: String,
    pub version: i64,
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.read_by_receiver { "read" } else { "unread" };
        let subject: String = self.subject.chars().take(30).collect();
        write!(f, "{}... ({})", subject, status)
    }
}
