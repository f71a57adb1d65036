//! Miner domain — the per-user coin miner.

pub mod client;

use serde::{Deserialize, Serialize};

/// Account owner reference carried by a miner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    pub id: String,
    pub clearing_account_id: String,
    pub private_account: bool,
    pub version: i64,
}

/// The authenticated user's miner. All fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Miner {
    pub id: String,
    pub coins_per_hour: i64,
    pub maximum_capacity: i64,
    pub next_level_coins_per_hour: i64,
    pub next_level_costs: i64,
    pub owner: Owner,
    pub storage: i64,
    pub transferable_coins: i64,
    pub version: i64,
}
