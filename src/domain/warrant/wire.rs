//! Wire types for warrant responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::{ListingRef, NamedRef};
use crate::shared::serde_util;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarrantWire {
    pub id: String,
    #[serde(rename = "type")]
    pub warrant_type: String,
    pub ratio: f64,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub subscription_period_date: Option<DateTime<Utc>>,
    pub underlying_value: f64,
    pub underlying_cap_value: f64,
    pub(crate) listing: Option<ListingRef>,
    pub(crate) underlying: Option<ListingRef>,
    pub(crate) company: Option<NamedRef>,
    pub version: i64,
}
