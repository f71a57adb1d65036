//! System bonds sub-client — list, fetch, issue, interest rates.

use crate::domain::system_bond::SystemBond;
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{segment, Paged, ValueResponse};

pub struct SystemBonds<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> SystemBonds<'a> {
    pub fn list(&self) -> Result<Vec<SystemBond>> {
        let items: Paged<SystemBond> = self.session.request(ApiRequest::get("api/systembonds"))?.json()?;
        Ok(items.into_inner())
    }

    pub fn get(&self, bond_id: &str) -> Result<SystemBond> {
        let endpoint = format!("api/systembonds/{}", segment(bond_id));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    pub fn get_by_security(&self, security_identifier: &str) -> Result<SystemBond> {
        let endpoint = format!(
            "api/systembonds/securityidentifier/{}",
            segment(security_identifier)
        );
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    /// Issue `number_of_bonds` system bonds for a company.
    pub fn issue(&self, company_id: &str, number_of_bonds: u32) -> Result<SystemBond> {
        let request = ApiRequest::post("api/systembonds")
            .form("companyId", company_id)
            .form("numberOfBonds", number_of_bonds);
        let bond: SystemBond = self.session.request(request)?.json()?;
        tracing::info!(company_id, number_of_bonds, bond = %bond.name, "System bonds issued");
        Ok(bond)
    }

    /// Current main interest rate. `0.0` when the body carries no value.
    pub fn main_interest_rate(&self) -> Result<f64> {
        self.value_of("api/maininterestrate/latest/")
    }

    /// Average interest rate across all bonds. `0.0` when the body carries no value.
    pub fn average_bond_interest_rate(&self) -> Result<f64> {
        self.value_of("api/v2/averagebondinterestrate")
    }

    fn value_of(&self, endpoint: &str) -> Result<f64> {
        let resp: ValueResponse<Option<f64>> = self.session.request(ApiRequest::get(endpoint))?.json()?;
        Ok(resp.value.unwrap_or(0.0))
    }
}
