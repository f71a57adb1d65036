//! Achievement domain — user achievements and coin reward claims.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util;

/// A user achievement. All fields except `end_date` are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub achievement_type: String,
    #[serde(with = "serde_util::timestamp_ms")]
    pub achieved_date: DateTime<Utc>,
    pub claimed: bool,
    pub coin_reward: i64,
    #[serde(default, with = "serde_util::timestamp_ms_opt")]
    pub end_date: Option<DateTime<Utc>>,
    pub version: i64,
}

impl std::fmt::Display for Achievement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}, {} coins{})",
            self.description,
            self.achievement_type,
            self.coin_reward,
            if self.claimed { ", claimed" } else { "" }
        )
    }
}
