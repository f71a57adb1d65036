//! Historical data sub-client.

use serde::de::DeserializeOwned;

use crate::domain::historical_data::{HistorizedCompanyData, HistorizedListingData};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{segment, PageRequest, Paged};

pub struct HistoricalData<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> HistoricalData<'a> {
    /// Company fundamentals history. Pass [`PageRequest::history`] for the
    /// usual page size of 100.
    pub fn company(
        &self,
        security_identifier: &str,
        page: &PageRequest,
    ) -> Result<Vec<HistorizedCompanyData>> {
        self.fetch("api/v2/historizedcompanydata", security_identifier, page)
    }

    /// OHLC history of a listing.
    pub fn listing(
        &self,
        security_identifier: &str,
        page: &PageRequest,
    ) -> Result<Vec<HistorizedListingData>> {
        self.fetch("api/v2/historizedlistingdata", security_identifier, page)
    }

    fn fetch<T: DeserializeOwned>(
        &self,
        base: &str,
        security_identifier: &str,
        page: &PageRequest,
    ) -> Result<Vec<T>> {
        let endpoint = format!("{}/{}", base, segment(security_identifier));
        let items: Paged<T> = self
            .session
            .request(page.apply(ApiRequest::get(endpoint)))?
            .json()?;
        Ok(items.into_inner())
    }
}
