//! Companies sub-client.

use crate::domain::company::Company;
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::segment;

pub struct Companies<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Companies<'a> {
    pub fn get(&self, company_id: &str) -> Result<Company> {
        let endpoint = format!("api/companies/{}", segment(company_id));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    /// Look up a company by the security identifier of its stock.
    pub fn get_by_security(&self, security_identifier: &str) -> Result<Company> {
        let endpoint = format!(
            "api/companies/securityIdentifier/{}",
            segment(security_identifier)
        );
        self.session.request(ApiRequest::get(endpoint))?.json()
    }
}
