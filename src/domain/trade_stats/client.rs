//! Trade statistics sub-client.

use serde_json::Value;

use crate::domain::trade_stats::{Trade, TradeFilter, TradeSummary};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{PageRequest, Paged};

const STATS_ENDPOINT: &str = "api/v2/trades/stats";

pub struct TradeStats<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> TradeStats<'a> {
    pub fn summary(&self, filter: &TradeFilter) -> Result<TradeSummary> {
        self.session
            .request(filter.apply(ApiRequest::get(format!("{STATS_ENDPOINT}/summary"))))?
            .json()
    }

    /// Most profitable trade, `None` when there are no trades.
    pub fn best(&self, filter: &TradeFilter) -> Result<Option<Trade>> {
        self.single("best", filter)
    }

    /// Biggest loss, `None` when there are no trades.
    pub fn worst(&self, filter: &TradeFilter) -> Result<Option<Trade>> {
        self.single("worst", filter)
    }

    pub fn wins(&self, filter: &TradeFilter, page: &PageRequest) -> Result<Vec<Trade>> {
        self.paged("wins", filter, page)
    }

    pub fn losses(&self, filter: &TradeFilter, page: &PageRequest) -> Result<Vec<Trade>> {
        self.paged("losses", filter, page)
    }

    fn single(&self, which: &str, filter: &TradeFilter) -> Result<Option<Trade>> {
        let request = filter.apply(ApiRequest::get(format!("{STATS_ENDPOINT}/{which}")));
        let response = self.session.request(request)?;
        if response.status != 200 {
            return Ok(None);
        }
        match response.json_value() {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) if map.is_empty() => Ok(None),
            Some(Value::Array(items)) if items.is_empty() => Ok(None),
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    fn paged(&self, which: &str, filter: &TradeFilter, page: &PageRequest) -> Result<Vec<Trade>> {
        let request = page.apply(filter.apply(ApiRequest::get(format!("{STATS_ENDPOINT}/{which}"))));
        let items: Paged<Trade> = self.session.request(request)?.json()?;
        Ok(items.into_inner())
    }
}
