//! Order log domain — executed trades between two securities accounts.

pub mod client;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::shared::serde_util;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderLogEntry {
    pub id: String,
    pub security_identifier: String,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub date: Option<DateTime<Utc>>,
    pub number_of_shares: i64,
    pub price: f64,
    pub volume: f64,
    pub buyer_securities_account: String,
    pub buyer_securities_account_name: String,
    pub seller_securities_account: String,
    pub seller_securities_account_name: String,
    pub seller_average_buying_price: f64,
    pub version: i64,
}

impl OrderLogEntry {
    /// Seller's realized profit on this trade.
    pub fn seller_profit(&self) -> f64 {
        (self.price - self.seller_average_buying_price) * self.number_of_shares as f64
    }
}

impl std::fmt::Display for OrderLogEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} @ {:.2} (volume {:.2})",
            self.number_of_shares, self.security_identifier, self.price, self.volume
        )
    }
}
