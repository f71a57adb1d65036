//! Securities accounts sub-client.

use crate::domain::securities_account::{Portfolio, SecuritiesAccount};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::segment;

pub struct SecuritiesAccounts<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> SecuritiesAccounts<'a> {
    pub fn get(&self, securities_account_id: &str) -> Result<SecuritiesAccount> {
        let endpoint = format!(
            "api/v2/securitiesaccountdetails/{}",
            segment(securities_account_id)
        );
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    pub fn portfolio(&self, securities_account_id: &str) -> Result<Portfolio> {
        let endpoint = format!("api/portfolios/{}", segment(securities_account_id));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }
}
