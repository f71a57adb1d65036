//! Listing domain — tradable securities, prices, bid/ask spreads.

pub mod client;
mod convert;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util;

// ─── Listing ─────────────────────────────────────────────────────────────────

/// A tradable security. Only `securityIdentifier` is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub security_identifier: String,
    #[serde(default)]
    pub name: String,
    /// `STOCK`, `BOND`, `SYSTEMBOND`, `WARRANT`, `INDEX`, ...
    #[serde(rename = "type", default)]
    pub listing_type: String,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub end_date: Option<DateTime<Utc>>,
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.security_identifier)
    }
}

// ─── Price ───────────────────────────────────────────────────────────────────

/// A price observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    #[serde(default)]
    pub value: f64,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub date: Option<DateTime<Utc>>,
}

// ─── PriceSpread ─────────────────────────────────────────────────────────────

/// Current order book top and last price for a security.
///
/// Decodes both the nested form (`listing.securityIdentifier`) returned by
/// `api/pricespreads/{asin}` and the flat form used by filter results. Every
/// quote field is optional since an empty book has no bid or ask.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::PriceSpreadWire")]
pub struct PriceSpread {
    pub security_identifier: String,
    pub name: String,
    pub listing: Option<Listing>,
    pub ask_price: Option<f64>,
    pub ask_size: Option<i64>,
    pub bid_price: Option<f64>,
    pub bid_size: Option<i64>,
    pub last_price: Option<Price>,
    pub spread_abs: Option<f64>,
    pub spread_percent: Option<f64>,
    pub date: Option<DateTime<Utc>>,
}

impl PriceSpread {
    /// Midpoint of bid and ask, when both sides are quoted.
    pub fn mid_price(&self) -> Option<f64> {
        Some((self.ask_price? + self.bid_price?) / 2.0)
    }
}
