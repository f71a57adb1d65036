//! Listings sub-client — listings, price spreads, filters.

use serde_json::Value;

use crate::domain::listing::wire::FilterResponse;
use crate::domain::listing::{Listing, PriceSpread};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::segment;

/// Sub-client for listing and price operations.
pub struct Listings<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Listings<'a> {
    pub fn get(&self, security_identifier: &str) -> Result<Listing> {
        let endpoint = format!("api/listings/{}", segment(security_identifier));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    pub fn price_spread(&self, security_identifier: &str) -> Result<PriceSpread> {
        let endpoint = format!("api/pricespreads/{}", segment(security_identifier));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    /// Run a price spread filter, either a saved one (`filter_id`) or an ad-hoc
    /// `definition`. A missing definition is sent as `{}`.
    pub fn filter(&self, filter_id: Option<&str>, definition: Option<Value>) -> Result<Vec<PriceSpread>> {
        let request = ApiRequest::post("api/v2/filter/pricespreads")
            .json(definition.unwrap_or_else(|| Value::Object(Default::default())))
            .header("Content-Type", "application/json")
            .query_opt("filterId", filter_id);

        let resp: FilterResponse = self.session.request(request)?.json()?;
        Ok(resp.results)
    }
}
