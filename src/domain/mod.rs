//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Domain records decoded from backend JSON
//! - `client.rs` — Sub-client with the HTTP operations for that resource
//! - `wire.rs` — Raw serde structs, where the backend nests fields the record flattens
//! - `convert.rs` — `From` conversions from wire structs to records
//!
//! Sub-clients hold a `&dyn Session`, never another domain's client. Fetching a
//! related entity is always an explicit, fallible method call.

pub mod achievement;
pub mod bond;
pub mod central_bank;
pub mod company;
pub mod highscore;
pub mod historical_data;
pub mod index;
pub mod listing;
pub mod miner;
pub mod notification;
pub mod order;
pub mod order_log;
pub mod securities_account;
pub mod system_bond;
pub mod trade_stats;
pub mod user;
pub mod warrant;

use serde::Deserialize;

/// `{"id", "username"}` reference to a user embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct UserRef {
    pub id: String,
    pub username: String,
    pub gravatar_hash: String,
}

/// `{"securityIdentifier"}` reference to a listing embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct ListingRef {
    pub security_identifier: String,
}

/// `{"id", "name"}` reference to a company or alliance embedded in other records.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct NamedRef {
    pub id: String,
    pub name: String,
    pub security_identifier: String,
}
