//! Trade statistics domain — realized profit and loss of closed positions.

pub mod client;

use serde::Deserialize;

use crate::http::ApiRequest;

/// Aggregated statistics over a set of trades.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TradeSummary {
    pub break_even_trades: i64,
    pub losing_trades: i64,
    pub net_profit_loss: f64,
    pub total_loss: f64,
    pub total_profit: f64,
    pub total_trades: i64,
    /// Fraction in `[0, 1]`.
    pub win_rate: f64,
    pub winning_trades: i64,
}

impl std::fmt::Display for TradeSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} trades, win rate {:.2}%, net P/L {:.2}",
            self.total_trades,
            self.win_rate * 100.0,
            self.net_profit_loss
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trade {
    pub trade_id: String,
    pub security_identifier: String,
    pub listing_name: String,
    pub number_of_shares: i64,
    pub average_buying_price: f64,
    pub sell_price: f64,
    pub profit_loss: f64,
    pub profit_loss_percentage: f64,
    pub date_created: String,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.profit_loss > 0.0
    }
}

/// Optional filters shared by every trade statistics endpoint. Dates are
/// ISO strings, forwarded as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeFilter {
    pub securities_account_id: Option<String>,
    pub security_identifier: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TradeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn securities_account(mut self, id: impl Into<String>) -> Self {
        self.securities_account_id = Some(id.into());
        self
    }

    pub fn security(mut self, security_identifier: impl Into<String>) -> Self {
        self.security_identifier = Some(security_identifier.into());
        self
    }

    pub fn between(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    pub(crate) fn apply(&self, request: ApiRequest) -> ApiRequest {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        request
            .query_opt("securitiesAccountId", non_empty(&self.securities_account_id))
            .query_opt("securityIdentifier", non_empty(&self.security_identifier))
            .query_opt("startDate", non_empty(&self.start_date))
            .query_opt("endDate", non_empty(&self.end_date))
    }
}
