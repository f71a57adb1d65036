//! Order logs sub-client.

use crate::domain::order_log::OrderLogEntry;
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{segment, PageRequest, Paged};

const ORDER_LOGS_ENDPOINT: &str = "api/v2/securityorderlogs";

pub struct OrderLogs<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> OrderLogs<'a> {
    /// Trade history, optionally narrowed to one securities account and/or a
    /// search string. Empty filters are not sent.
    pub fn list(
        &self,
        securities_account_id: Option<&str>,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<OrderLogEntry>> {
        let request = ApiRequest::get(ORDER_LOGS_ENDPOINT)
            .query_opt(
                "securitiesAccountId",
                securities_account_id.filter(|s| !s.is_empty()),
            )
            .query_opt("search", search.filter(|s| !s.is_empty()));
        self.fetch(page.apply(request))
    }

    pub fn by_security(
        &self,
        security_identifier: &str,
        page: &PageRequest,
    ) -> Result<Vec<OrderLogEntry>> {
        let endpoint = format!(
            "{}/by-asin/{}",
            ORDER_LOGS_ENDPOINT,
            segment(security_identifier)
        );
        self.fetch(page.apply(ApiRequest::get(endpoint)))
    }

    fn fetch(&self, request: ApiRequest) -> Result<Vec<OrderLogEntry>> {
        let items: Paged<OrderLogEntry> = self.session.request(request)?.json()?;
        Ok(items.into_inner())
    }
}
