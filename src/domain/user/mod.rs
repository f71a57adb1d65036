//! User domain — the player profile and its capabilities.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::serde_util;

/// Account capabilities and premium status. Non-optional fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCapabilities {
    #[serde(default)]
    pub partner_id: Option<String>,
    pub achievement_count: i64,
    pub achievement_total: i64,
    pub last_sponsoring_date: Option<String>,
    #[serde(rename = "level2UserEndDate")]
    pub level_2_user_end_date: Option<String>,
    pub locale: String,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub premium_end_date: Option<DateTime<Utc>>,
    pub sponsored_hours: i64,
    pub team_department: Option<String>,
    pub team_role: String,
    pub team_role_description: Option<String>,
    #[serde(rename = "level2User")]
    pub level_2_user: bool,
    pub partner: bool,
    pub premium: bool,
}

/// A player profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(rename = "emailAddress", default)]
    pub email: Option<String>,
    #[serde(default)]
    pub jwt_token: Option<String>,
    #[serde(default)]
    pub email_subscription_type: Option<String>,
    #[serde(rename = "userCapabilities")]
    pub capabilities: UserCapabilities,
    pub gravatar_hash: String,
    pub ref_id: String,
    #[serde(with = "serde_util::timestamp_ms")]
    pub registration_date: DateTime<Utc>,
    pub version: i64,
    /// `true` when this is the authenticated user's own profile.
    pub my_user: bool,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.username)
    }
}
