//! Order domain — security orders and pre-trade check results.

pub mod client;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::listing::{Listing, PriceSpread};
use crate::shared::serde_util;

// ─── OrderAction ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderAction {
    Buy,
    Sell,
}

impl OrderAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "BUY",
            Self::Sell => "SELL",
        }
    }
}

impl std::fmt::Display for OrderAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── OrderType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    #[default]
    Limit,
    Market,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Limit => "LIMIT",
            Self::Market => "MARKET",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ─── Check results ───────────────────────────────────────────────────────────

/// Localizable message attached to an order check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckMessage {
    pub filled_string: String,
    pub message: String,
    pub substitutions: Vec<String>,
}

/// Server-side validation of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCheckResult {
    pub failed: bool,
    pub ok: bool,
    pub msg: CheckMessage,
    /// Names of the request parameters that caused the failure.
    pub concerning_params: Vec<String>,
}

// ─── Order ───────────────────────────────────────────────────────────────────

/// A security order. Every key must be present; nullable ones may be `null`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub action: OrderAction,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub security_identifier: String,
    pub listing: Listing,
    pub number_of_shares: i64,
    pub price: Option<f64>,
    pub volume: Option<f64>,
    pub committed_cash: f64,
    pub uncommitted_cash: Option<f64>,
    pub uncommitted_shares: i64,
    pub owner: String,
    pub owner_name: String,
    pub private_owner: bool,
    pub counter_party: Option<String>,
    pub counter_party_name: Option<String>,
    pub private_counter_party: Option<bool>,
    #[serde(with = "serde_util::timestamp_ms")]
    pub creation_date: DateTime<Utc>,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub good_after_date: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub good_till_date: Option<DateTime<Utc>>,
    pub execution_price: Option<f64>,
    pub execution_volume: Option<f64>,
    pub hourly_change: Option<f64>,
    #[serde(with = "serde_util::timestamp_ms_opt")]
    pub next_hourly_change_date: Option<DateTime<Utc>>,
    pub check_result: Option<OrderCheckResult>,
    /// Only populated when the backend embeds a spread object.
    #[serde(deserialize_with = "spread_if_object")]
    pub spread: Option<PriceSpread>,
    pub version: Option<i64>,
}

impl std::fmt::Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.action, self.number_of_shares, self.listing.name)?;
        match self.price {
            Some(price) => write!(f, " @ {}", price),
            None => write!(f, " @ market"),
        }
    }
}

fn spread_if_object<'de, D>(deserializer: D) -> Result<Option<PriceSpread>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        v @ Value::Object(_) => serde_json::from_value(v)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

// ─── NewOrder ────────────────────────────────────────────────────────────────

/// Parameters for placing an order. Built with [`NewOrder::buy`] or
/// [`NewOrder::sell`], then refined with the builder methods.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub action: OrderAction,
    pub quantity: i64,
    pub owner_securities_account_id: String,
    pub security_identifier: String,
    pub order_type: OrderType,
    pub price: Option<f64>,
    pub good_after_date: Option<DateTime<Utc>>,
    pub good_till_date: Option<DateTime<Utc>>,
    pub counter_party: Option<String>,
    pub hourly_change: Option<f64>,
    pub check_order_only: bool,
}

impl NewOrder {
    pub fn new(
        action: OrderAction,
        quantity: i64,
        owner_securities_account_id: impl Into<String>,
        security_identifier: impl Into<String>,
    ) -> Self {
        Self {
            action,
            quantity,
            owner_securities_account_id: owner_securities_account_id.into(),
            security_identifier: security_identifier.into(),
            order_type: OrderType::Limit,
            price: None,
            good_after_date: None,
            good_till_date: None,
            counter_party: None,
            hourly_change: None,
            check_order_only: false,
        }
    }

    pub fn buy(quantity: i64, owner: impl Into<String>, security_identifier: impl Into<String>) -> Self {
        Self::new(OrderAction::Buy, quantity, owner, security_identifier)
    }

    pub fn sell(quantity: i64, owner: impl Into<String>, security_identifier: impl Into<String>) -> Self {
        Self::new(OrderAction::Sell, quantity, owner, security_identifier)
    }

    /// Limit price. Required for limit orders.
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn market(mut self) -> Self {
        self.order_type = OrderType::Market;
        self
    }

    pub fn good_after(mut self, date: DateTime<Utc>) -> Self {
        self.good_after_date = Some(date);
        self
    }

    pub fn good_till(mut self, date: DateTime<Utc>) -> Self {
        self.good_till_date = Some(date);
        self
    }

    /// Private order against a specific securities account.
    pub fn counter_party(mut self, securities_account_id: impl Into<String>) -> Self {
        self.counter_party = Some(securities_account_id.into());
        self
    }

    pub fn hourly_change(mut self, change: f64) -> Self {
        self.hourly_change = Some(change);
        self
    }

    /// Only validate the order; nothing is placed.
    pub fn check_only(mut self) -> Self {
        self.check_order_only = true;
        self
    }

    pub(crate) fn form(&self) -> Vec<(String, String)> {
        let mut fields = vec![
            ("action".to_string(), self.action.to_string()),
            ("numberOfShares".to_string(), self.quantity.to_string()),
            ("type".to_string(), self.order_type.to_string()),
            ("owner".to_string(), self.owner_securities_account_id.clone()),
            ("securityIdentifier".to_string(), self.security_identifier.clone()),
            ("checkOrderOnly".to_string(), self.check_order_only.to_string()),
        ];
        let optional = [
            ("price", self.price.map(|p| p.to_string())),
            ("goodAfterDate", self.good_after_date.map(|d| d.timestamp_millis().to_string())),
            ("goodTillDate", self.good_till_date.map(|d| d.timestamp_millis().to_string())),
            ("counterparty", self.counter_party.clone()),
            ("hourlyChange", self.hourly_change.map(|c| c.to_string())),
        ];
        fields.extend(
            optional
                .into_iter()
                .filter_map(|(k, v)| v.map(|v| (k.to_string(), v))),
        );
        fields
    }
}
