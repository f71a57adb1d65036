//! Bonds sub-client.

use crate::domain::bond::Bond;
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::segment;

pub struct Bonds<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Bonds<'a> {
    pub fn get_by_security(&self, security_identifier: &str) -> Result<Bond> {
        let endpoint = format!(
            "api/bonds/securityidentifier/{}",
            segment(security_identifier)
        );
        self.session.request(ApiRequest::get(endpoint))?.json()
    }
}
