//! Historical data domain — daily company fundamentals and OHLC listing data.

pub mod client;

use serde::Deserialize;

/// One day of a company's fundamentals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistorizedCompanyData {
    pub id: String,
    /// Backend date string, passed through unparsed.
    pub date: String,
    pub book_value: f64,
    pub book_value_per_share: f64,
    pub cash: f64,
    pub cash_flow: f64,
    pub net_cash: f64,
    pub net_cash_per_share: f64,
    pub fair_value_per_share: f64,
    pub free_float_in_percent: f64,
    pub bonds_volume: f64,
    pub central_bank_reserves: f64,
    pub repos_volume: f64,
    pub system_repos_volume: f64,
    pub version: i64,
}

impl std::fmt::Display for HistorizedCompanyData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: book value {:.2}", self.date, self.book_value)
    }
}

/// One OHLC bar of a listing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistorizedListingData {
    pub id: String,
    pub date: String,
    pub open_price: f64,
    pub high_price: f64,
    pub low_price: f64,
    pub close_price: f64,
    pub ask_price: f64,
    pub bid_price: f64,
    pub outstanding_shares: i64,
    pub shares_in_buys: i64,
    pub shares_in_sells: i64,
    pub trade_volume: f64,
    pub version: i64,
}

impl HistorizedListingData {
    /// Close minus open.
    pub fn change(&self) -> f64 {
        self.close_price - self.open_price
    }
}

impl std::fmt::Display for HistorizedListingData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: O {:.2} H {:.2} L {:.2} C {:.2}",
            self.date, self.open_price, self.high_price, self.low_price, self.close_price
        )
    }
}
