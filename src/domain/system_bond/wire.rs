//! Wire types for system bond responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::ListingRef;
use crate::shared::serde_util;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemBondWire {
    pub id: String,
    pub name: String,
    pub face_value: f64,
    pub volume: f64,
    pub interest_rate: f64,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub maturity_date: Option<DateTime<Utc>>,
    pub(crate) listing: Option<ListingRef>,
    pub(crate) repurchase_listing: Option<ListingRef>,
    pub version: i64,
}

