//! Index domain — user-built stock indexes.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::listing::client::Listings;
use crate::domain::listing::Listing;
use crate::error::Result;
use crate::session::Session;

/// Constituent of an index.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexMember {
    pub security_identifier: String,
    pub name: String,
    pub weight: Option<f64>,
}

/// Index as it appears in list views.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::CompactIndexWire")]
pub struct CompactIndex {
    pub id: String,
    pub name: String,
    pub security_identifier: String,
    pub members_count: i64,
    pub owner_id: String,
    pub owner_username: String,
    pub version: i64,
}

/// Full index with members. Lenient: `chaining_factor` defaults to `1.0`,
/// other missing fields to their empty values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::IndexWire")]
pub struct Index {
    pub name: String,
    pub base_value: f64,
    pub chaining_factor: f64,
    pub next_chaining_date: Option<DateTime<Utc>>,
    pub members: Vec<IndexMember>,
    pub owner_id: String,
    pub owner_username: String,
    pub security_identifier: String,
}

impl Index {
    pub fn listing(&self, session: &dyn Session) -> Result<Listing> {
        Listings { session }.get(&self.security_identifier)
    }
}

impl std::fmt::Display for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (base value {:.2}, {} members)",
            self.name,
            self.base_value,
            self.members.len()
        )
    }
}

impl From<wire::CompactIndexWire> for CompactIndex {
    fn from(w: wire::CompactIndexWire) -> Self {
        let owner = w.owner.unwrap_or_default();
        CompactIndex {
            id: w.id,
            name: w.name,
            security_identifier: w.listing.unwrap_or_default().security_identifier,
            members_count: w.members_count,
            owner_id: owner.id,
            owner_username: owner.username,
            version: w.version,
        }
    }
}

impl From<wire::IndexWire> for Index {
    fn from(w: wire::IndexWire) -> Self {
        let owner = w.owner.unwrap_or_default();
        Index {
            name: w.name,
            base_value: w.base_value,
            chaining_factor: w.chaining_factor,
            next_chaining_date: w.next_chaining_date,
            members: w.members.unwrap_or_default(),
            owner_id: owner.id,
            owner_username: owner.username,
            security_identifier: w.listing.unwrap_or_default().security_identifier,
        }
    }
}
