//! Highscore domain — user, company and alliance leaderboards.

pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Ranking criterion for user and company leaderboards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HighscoreType {
    #[default]
    Networth,
    BookValue,
    Cash,
    Shares,
    DailyProfit,
    WeeklyProfit,
    MonthlyProfit,
}

impl HighscoreType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Networth => "NETWORTH",
            Self::BookValue => "BOOK_VALUE",
            Self::Cash => "CASH",
            Self::Shares => "SHARES",
            Self::DailyProfit => "DAILY_PROFIT",
            Self::WeeklyProfit => "WEEKLY_PROFIT",
            Self::MonthlyProfit => "MONTHLY_PROFIT",
        }
    }
}

impl std::fmt::Display for HighscoreType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Position snapshot of an earlier ranking, when the backend has one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HighscoreHistory {
    pub date: Option<i64>,
    pub position: Option<i64>,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::UserHighscoreWire")]
pub struct UserHighscoreEntry {
    pub user_id: String,
    pub username: String,
    pub gravatar_hash: String,
    pub value: f64,
    pub date: String,
    pub history: HighscoreHistory,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::CompanyHighscoreWire")]
pub struct CompanyHighscoreEntry {
    pub company_id: String,
    pub company_name: String,
    pub security_identifier: String,
    pub value: f64,
    pub date: String,
    pub history: HighscoreHistory,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::AllianceHighscoreWire")]
pub struct AllianceHighscoreEntry {
    pub alliance_id: String,
    pub alliance_name: String,
    pub value: f64,
    pub date: String,
}

impl From<wire::UserHighscoreWire> for UserHighscoreEntry {
    fn from(w: wire::UserHighscoreWire) -> Self {
        let user = w.user.unwrap_or_default();
        UserHighscoreEntry {
            user_id: user.id,
            username: user.username,
            gravatar_hash: user.gravatar_hash,
            value: w.value,
            date: w.date,
            history: w.history.into(),
        }
    }
}

impl From<wire::CompanyHighscoreWire> for CompanyHighscoreEntry {
    fn from(w: wire::CompanyHighscoreWire) -> Self {
        let company = w.company.unwrap_or_default();
        CompanyHighscoreEntry {
            company_id: company.id,
            company_name: company.name,
            security_identifier: company.security_identifier,
            value: w.value,
            date: w.date,
            history: w.history.into(),
        }
    }
}

impl From<wire::AllianceHighscoreWire> for AllianceHighscoreEntry {
    fn from(w: wire::AllianceHighscoreWire) -> Self {
        let alliance = w.alliance.unwrap_or_default();
        AllianceHighscoreEntry {
            alliance_id: alliance.id,
            alliance_name: alliance.name,
            value: w.value,
            date: w.date,
        }
    }
}

impl From<wire::HistoryWire> for HighscoreHistory {
    fn from(w: wire::HistoryWire) -> Self {
        HighscoreHistory {
            date: w.history_date,
            position: w.history_position,
            value: w.history_value,
        }
    }
}
