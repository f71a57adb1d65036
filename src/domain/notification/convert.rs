//! Conversions: notification wire types → domain types.

use serde_json::Value;

use super::wire::NotificationWire;
use super::Notification;

/// Text of a message prototype: the `message` field of an object, the string
/// itself, or empty.
fn message_text(value: &Value) -> String {
    match value {
        Value::Object(map) => map
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

impl From<NotificationWire> for Notification {
    fn from(w: NotificationWire) -> Self {
        let receiver = w.receiver.unwrap_or_default();
        Notification {
            id: w.id,
            subject: message_text(&w.subject),
            content: message_text(&w.content),
            date: w.date,
            read_by_receiver: w.read_by_receiver,
            receiver_id: receiver.id,
            receiver_username: receiver.username,
            version: w.version,
        }
    }
}
