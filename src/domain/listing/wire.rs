//! Wire types for listing and price spread responses.

use serde::Deserialize;

use super::{Listing, Price, PriceSpread};
use crate::shared::serde_util;
use chrono::{DateTime, Utc};

/// Raw price spread. The identifier lives either at the top level or under
/// `listing`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSpreadWire {
    #[serde(default)]
    pub listing: Option<Listing>,
    #[serde(default)]
    pub security_identifier: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub ask_price: Option<f64>,
    #[serde(default)]
    pub ask_size: Option<i64>,
    #[serde(default)]
    pub bid_price: Option<f64>,
    #[serde(default)]
    pub bid_size: Option<i64>,
    #[serde(default)]
    pub last_price: Option<Price>,
    #[serde(default)]
    pub spread_abs: Option<f64>,
    #[serde(default)]
    pub spread_percent: Option<f64>,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub date: Option<DateTime<Utc>>,
}

/// `POST api/v2/filter/pricespreads` response.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterResponse {
    pub results: Vec<PriceSpread>,
}
