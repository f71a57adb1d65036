//! Wire types for central bank responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::NamedRef;
use crate::shared::serde_util;

/// Raw banking license. The company is nested as `{"id": ...}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankingLicenseWire {
    pub id: String,
    pub(crate) company: NamedRef,
    #[serde(with = "serde_util::timestamp_ms")]
    pub start_date: DateTime<Utc>,
    pub version: i64,
}
