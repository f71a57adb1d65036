//! Wire types for notification responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use crate::domain::UserRef;
use crate::shared::serde_util;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationWire {
    #[serde(default)]
    pub id: String,
    /// Either `{"message": ...}` or a plain string.
    #[serde(default)]
    pub subject: Value,
    #[serde(default)]
    pub content: Value,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_by_receiver: bool,
    #[serde(default)]
    pub(crate) receiver: Option<UserRef>,
    #[serde(default)]
    pub version: i64,
}

/// `GET api/v2/notifications/unread/count` response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnreadCount {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub value: Option<u64>,
}
