//! Wire types for index responses.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::IndexMember;
use crate::domain::{ListingRef, UserRef};
use crate::shared::serde_util;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompactIndexWire {
    pub id: String,
    pub name: String,
    pub(crate) listing: Option<ListingRef>,
    pub members_count: i64,
    pub(crate) owner: Option<UserRef>,
    pub version: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexWire {
    pub name: String,
    pub base_value: f64,
    pub chaining_factor: f64,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub next_chaining_date: Option<DateTime<Utc>>,
    pub members: Option<Vec<IndexMember>>,
    pub(crate) owner: Option<UserRef>,
    pub(crate) listing: Option<ListingRef>,
}

impl Default for IndexWire {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_value: 0.0,
            chaining_factor: 1.0,
            next_chaining_date: None,
            members: None,
            owner: None,
            listing: None,
        }
    }
}
