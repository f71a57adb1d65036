//! Central bank sub-client — reserve deposits and interest rate boosts.

use serde_json::Value;

use crate::client::error_message;
use crate::domain::central_bank::CentralBankReserves;
use crate::error::{AlphaTraderError, ApiError, Result};
use crate::http::{ApiRequest, HttpResponse};
use crate::session::Session;
use crate::shared::segment;

pub struct CentralBank<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> CentralBank<'a> {
    /// Move `amount` of company cash into the reserves.
    ///
    /// On success `reserves.cash_holding` grows by `amount`. A refusal that
    /// mentions insufficient funds maps to
    /// [`AlphaTraderError::InsufficientFunds`].
    pub fn increase(&self, reserves: &mut CentralBankReserves, amount: f64) -> Result<()> {
        let endpoint = "api/centralbankreserves";
        let request = ApiRequest::put(endpoint)
            .query("companyId", &reserves.banking_license.company_id)
            .query("cashAmount", amount)
            .raise_for_status(false);

        let resp = self.session.request(request)?;
        if resp.status != 200 {
            return Err(refusal(&resp, endpoint, |m| m.contains("insufficient")));
        }

        reserves.cash_holding += amount;
        tracing::info!(amount, cash_holding = reserves.cash_holding, "Central bank reserves increased");
        Ok(())
    }

    /// Spend coins to boost the interest rate. Returns the raw response body.
    pub fn boost(&self, reserves: &CentralBankReserves, multiplier: i64) -> Result<Value> {
        let endpoint = format!("api/v2/centralbankreserves/{}", segment(&reserves.id));
        let request = ApiRequest::put(endpoint.as_str())
            .query("increaseInterestRateBoost", true)
            .query("multiplier", multiplier)
            .raise_for_status(false);

        let resp = self.session.request(request)?;
        if resp.status != 200 {
            return Err(refusal(&resp, &endpoint, |m| {
                m.contains("insufficient") || m.contains("coins")
            }));
        }

        tracing::info!(multiplier, "Interest rate boosted");
        resp.json()
    }

    /// Details of the last reserves payment.
    pub fn payment_information(&self) -> Result<Value> {
        self.session
            .request(ApiRequest::get("api/lastcentralbankreservespayment"))?
            .json()
    }
}

/// Classify a refused reserves operation. `is_funds` sees the lowercased message.
fn refusal(resp: &HttpResponse, endpoint: &str, is_funds: impl Fn(&str) -> bool) -> AlphaTraderError {
    let parsed = resp.json_value();
    let message = error_message(resp, parsed.as_ref());
    tracing::warn!(endpoint, status = resp.status, message = %message, "Central bank operation refused");

    if is_funds(&message.to_lowercase()) {
        return AlphaTraderError::InsufficientFunds(message);
    }
    ApiError::new(resp.status, message, parsed, Some(endpoint.to_string())).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::central_bank::DEFAULT_BOOST_MULTIPLIER;
    use crate::http::Method;
    use crate::testing::{authenticated_client, json_response};
    use serde_json::json;

    fn reserves() -> CentralBankReserves {
        serde_json::from_value(json!({
            "id": "cbr-1",
            "bankingLicense": {
                "id": "bl-1",
                "company": {"id": "c-1", "name": "Argo Bank"},
                "startDate": 1_650_000_000_000i64,
                "version": 1
            },
            "cashHolding": 1000.0,
            "coinsForNextBoost": 3,
            "interestRateBoost": 0.01,
            "maxCentralBankLoans": 50000.0,
            "version": 2
        }))
        .unwrap()
    }

    #[test]
    fn test_decode_flattens_company_id() {
        let reserves = reserves();
        assert_eq!(reserves.banking_license.company_id, "c-1");
        assert_eq!(reserves.coins_needed_for_boost(DEFAULT_BOOST_MULTIPLIER), 600);
    }

    #[test]
    fn test_increase_updates_holding() {
        let (client, transport) = authenticated_client(vec![json_response(200, json!({}))]);
        let mut reserves = reserves();

        client.central_bank().increase(&mut reserves, 250.0).unwrap();
        assert_eq!(reserves.cash_holding, 1250.0);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.method, Method::Put);
        assert_eq!(sent.url, "https://api.example.com/api/centralbankreserves");
        assert_eq!(sent.query_param("companyId"), Some("c-1"));
        assert_eq!(sent.query_param("cashAmount"), Some("250"));
    }

    #[test]
    fn test_increase_insufficient_funds() {
        let (client, _) = authenticated_client(vec![json_response(
            400,
            json!({"message": "Insufficient cash on bank account"}),
        )]);
        let mut reserves = reserves();

        let err = client.central_bank().increase(&mut reserves, 1e9).unwrap_err();
        assert!(matches!(err, AlphaTraderError::InsufficientFunds(ref m) if m.contains("Insufficient")));
        assert_eq!(reserves.cash_holding, 1000.0);
    }

    #[test]
    fn test_increase_other_refusal_is_api_error() {
        let (client, _) = authenticated_client(vec![json_response(409, json!({"message": "locked"}))]);
        let err = client.central_bank().increase(&mut reserves(), 1.0).unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.status_code, 409);
        assert_eq!(api.endpoint.as_deref(), Some("api/centralbankreserves"));
    }

    #[test]
    fn test_boost() {
        let (client, transport) = authenticated_client(vec![
            json_response(200, json!({"interestRateBoost": 0.02})),
            json_response(400, json!({"message": "Not enough coins"})),
        ]);
        let reserves = reserves();

        let body = client.central_bank().boost(&reserves, 200).unwrap();
        assert_eq!(body["interestRateBoost"], 0.02);
        let sent = transport.last_request().unwrap();
        assert!(sent.url.ends_with("api/v2/centralbankreserves/cbr-1"));
        assert_eq!(sent.query_param("increaseInterestRateBoost"), Some("true"));
        assert_eq!(sent.query_param("multiplier"), Some("200"));

        let err = client.central_bank().boost(&reserves, 200).unwrap_err();
        assert!(matches!(err, AlphaTraderError::InsufficientFunds(_)));
    }
}
