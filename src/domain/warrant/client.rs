//! Warrants sub-client — list, fetch, create.

use crate::domain::warrant::{Warrant, WarrantType};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{segment, PageRequest, Paged};

const WARRANTS_ENDPOINT: &str = "api/v2/warrants";

pub struct Warrants<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Warrants<'a> {
    /// List warrants, optionally only those on one underlying.
    pub fn list(&self, underlying_asin: Option<&str>, page: &PageRequest) -> Result<Vec<Warrant>> {
        let request = page.apply(
            ApiRequest::get(WARRANTS_ENDPOINT)
                .query_opt("underlyingAsin", underlying_asin.filter(|s| !s.is_empty())),
        );
        let items: Paged<Warrant> = self.session.request(request)?.json()?;
        Ok(items.into_inner())
    }

    pub fn get(&self, warrant_id: &str) -> Result<Warrant> {
        let endpoint = format!("{}/{}", WARRANTS_ENDPOINT, segment(warrant_id));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    /// Issue a warrant. Parameters travel as query parameters.
    pub fn create(
        &self,
        company_id: &str,
        underlying_asin: &str,
        warrant_type: WarrantType,
        cash_deposit: f64,
    ) -> Result<Warrant> {
        let request = ApiRequest::post(WARRANTS_ENDPOINT)
            .query("companyId", company_id)
            .query("underlyingAsin", underlying_asin)
            .query("type", warrant_type)
            .query("cashDeposit", cash_deposit);
        let warrant: Warrant = self.session.request(request)?.json()?;
        tracing::info!(id = %warrant.id, underlying = underlying_asin, "Warrant created");
        Ok(warrant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::company::client::tests::company_json;
    use crate::http::Method;
    use crate::testing::{authenticated_client, json_response};
    use serde_json::json;

    fn warrant_json() -> serde_json::Value {
        json!({
            "id": "w-1",
            "type": "PUT",
            "ratio": 0.1,
            "subscriptionPeriodDate": 1_720_000_000_000i64,
            "underlyingValue": 12.0,
            "underlyingCapValue": 20.0,
            "listing": {"securityIdentifier": "WAR001"},
            "underlying": {"securityIdentifier": "STAD9A0F12"},
            "company": {"id": "c-1", "name": "Argo"},
            "version": 0
        })
    }

    #[test]
    fn test_list_with_underlying_filter() {
        let (client, transport) = authenticated_client(vec![json_response(200, json!({"content": [warrant_json()]}))]);
        let warrants = client.warrants().list(Some("STAD9A0F12"), &PageRequest::default()).unwrap();
        assert!(warrants[0].is_put());
        assert!(!warrants[0].is_call());
        assert_eq!(warrants[0].underlying_security_identifier, "STAD9A0F12");
        assert_eq!(
            transport.last_request().unwrap().query_param("underlyingAsin"),
            Some("STAD9A0F12")
        );
    }

    #[test]
    fn test_create_uses_query_params() {
        let (client, transport) = authenticated_client(vec![json_response(201, warrant_json())]);
        client
            .warrants()
            .create("c-1", "STAD9A0F12", WarrantType::Call, 5000.0)
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Post);
        assert!(sent.body.is_none());
        assert_eq!(sent.query_param("companyId"), Some("c-1"));
        assert_eq!(sent.query_param("type"), Some("CALL"));
        assert_eq!(sent.query_param("cashDeposit"), Some("5000"));
    }

    #[test]
    fn test_company_is_explicit_fetch() {
        let (client, transport) = authenticated_client(vec![
            json_response(200, warrant_json()),
            json_response(200, company_json("c-1")),
        ]);
        let warrant = client.warrants().get("w-1").unwrap();
        assert!(transport.last_request().unwrap().url.ends_with("api/v2/warrants/w-1"));

        let company = warrant.company(&client).unwrap();
        assert_eq!(company.id, "c-1");
        assert!(transport.last_request().unwrap().url.ends_with("api/companies/c-1"));
    }
}
