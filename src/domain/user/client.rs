//! Users sub-client — profile, achievements, salary, company founding.

use crate::domain::achievement::Achievement;
use crate::domain::company::Company;
use crate::domain::securities_account::SecuritiesAccount;
use crate::domain::user::User;
use crate::error::{AlphaTraderError, Result};
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{segment, ValueResponse};

/// Sub-client for user operations.
pub struct Users<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Users<'a> {
    /// The authenticated user's profile.
    pub fn get(&self) -> Result<User> {
        self.session.request(ApiRequest::get("api/user"))?.json()
    }

    pub fn achievements(&self, username: &str) -> Result<Vec<Achievement>> {
        let endpoint = format!("api/v2/userachievements/{}", segment(username));
        let achievements: Vec<Achievement> = self.session.request(ApiRequest::get(endpoint))?.json()?;
        tracing::debug!(username, count = achievements.len(), "Retrieved achievements");
        Ok(achievements)
    }

    /// The user's own securities account. Only available for the
    /// authenticated user (`user.my_user`).
    pub fn securities_account(&self, user: &User) -> Result<SecuritiesAccount> {
        if !user.my_user {
            return Err(AlphaTraderError::ResourceState(
                "Cannot retrieve securities account for other users".to_string(),
            ));
        }
        self.session
            .request(ApiRequest::get("api/v2/my/securitiesaccount"))?
            .json()
    }

    /// Companies the user is CEO of.
    pub fn companies(&self, user_id: &str) -> Result<Vec<Company>> {
        let endpoint = format!("api/companies/ceo/userid/{}", segment(user_id));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    /// Possible daily salary for the user.
    pub fn salary(&self, user_id: &str) -> Result<f64> {
        let endpoint = format!("api/v2/possibledailysalary/{}", segment(user_id));
        let resp: ValueResponse<f64> = self.session.request(ApiRequest::get(endpoint))?.json()?;
        Ok(resp.value)
    }

    /// Collect all pending salary payments. Only the authenticated user can
    /// collect their own salary.
    pub fn retrieve_salary(&self, user: &User) -> Result<()> {
        if !user.my_user {
            return Err(AlphaTraderError::ResourceState(
                "Cannot retrieve salary for other users".to_string(),
            ));
        }
        self.session.request(ApiRequest::put("api/v2/my/salarypayments"))?;
        tracing::info!(username = %user.username, "Salary retrieved");
        Ok(())
    }

    /// Found a company. `custom_number_of_shares` and `custom_asin` are
    /// premium features and omitted when `None`.
    pub fn found_company(
        &self,
        name: &str,
        cash_deposit: f64,
        custom_number_of_shares: Option<i64>,
        custom_asin: Option<&str>,
    ) -> Result<Company> {
        let request = ApiRequest::post("api/companies")
            .form("name", name)
            .form("cashDeposit", cash_deposit)
            .form_opt("customNumberOfShares", custom_number_of_shares)
            .form_opt("customAsin", custom_asin);

        let company: Company = self.session.request(request)?.json()?;
        tracing::info!(company = %company, "Company founded");
        Ok(company)
    }
}
