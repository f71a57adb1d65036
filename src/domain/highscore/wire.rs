//! Wire types for highscore responses. Every field is optional on the wire.

use serde::Deserialize;

use crate::domain::{NamedRef, UserRef};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryWire {
    pub history_date: Option<i64>,
    pub history_position: Option<i64>,
    pub history_value: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserHighscoreWire {
    pub(crate) user: Option<UserRef>,
    pub value: f64,
    pub date: String,
    #[serde(flatten)]
    pub history: HistoryWire,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompanyHighscoreWire {
    pub(crate) company: Option<NamedRef>,
    pub value: f64,
    pub date: String,
    #[serde(flatten)]
    pub history: HistoryWire,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AllianceHighscoreWire {
    pub(crate) alliance: Option<NamedRef>,
    pub value: f64,
    pub date: String,
}
