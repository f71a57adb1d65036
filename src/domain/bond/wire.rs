//! Wire types for bond responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{ListingRef, NamedRef};
use crate::shared::serde_util;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BondWire {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub(crate) listing: Option<ListingRef>,
    #[serde(default)]
    pub(crate) issuer: Option<NamedRef>,
    #[serde(default)]
    pub face_value: f64,
    #[serde(default)]
    pub interest_rate: f64,
    #[serde(default)]
    pub volume: f64,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub issue_date: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub maturity_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub version: i64,
}
