//! Securities account domain — accounts, portfolios, positions.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::listing::{Listing, Price};
use crate::error::Result;
use crate::session::Session;
use crate::shared::serde_util;

/// A securities account (user or company owned). All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecuritiesAccount {
    pub id: String,
    pub clearing_account_id: String,
    pub private_account: bool,
    pub version: i64,
}

impl SecuritiesAccount {
    /// Fetch this account's portfolio.
    pub fn portfolio(&self, session: &dyn Session) -> Result<Portfolio> {
        client::SecuritiesAccounts { session }.portfolio(&self.id)
    }
}

/// Cash and holdings of a securities account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub securities_account_id: String,
    pub cash: f64,
    pub committed_cash: f64,
    /// `null` on the wire decodes to an empty list.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub positions: Vec<Position>,
}

impl Portfolio {
    /// Cash not reserved by open buy orders.
    pub fn uncommitted_cash(&self) -> f64 {
        self.cash - self.committed_cash
    }
}

/// One holding inside a portfolio. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub security_identifier: String,
    #[serde(rename = "type")]
    pub position_type: String,
    pub listing: Listing,
    pub number_of_shares: i64,
    pub committed_shares: i64,
    pub average_buying_price: f64,
    pub last_buying_price: f64,
    pub current_ask_price: f64,
    pub current_ask_size: i64,
    pub current_bid_price: f64,
    pub current_bid_size: i64,
    pub last_price: Price,
    #[serde(with = "serde_util::timestamp_ms")]
    pub last_price_update: DateTime<Utc>,
    pub volume: f64,
}

impl Position {
    pub fn uncommitted_shares(&self) -> i64 {
        self.number_of_shares - self.committed_shares
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
