//! High-level client — `AlphaTraderClient` with nested sub-client accessors.
//!
//! The client owns the session (credentials, token, authenticated flag) and
//! the single authenticated dispatch path, [`AlphaTraderClient::request`].
//! Each domain has its own sub-client in `domain/<name>/client.rs`; this module
//! keeps the builder, the request core and the accessor methods. The login and
//! registration handshakes live in `auth/client.rs`.

use serde_json::Value;

use crate::auth::Credentials;
use crate::domain::achievement::client::Achievements;
use crate::domain::bond::client::Bonds;
use crate::domain::central_bank::client::CentralBank;
use crate::domain::company::client::Companies;
use crate::domain::highscore::client::Highscores;
use crate::domain::historical_data::client::HistoricalData;
use crate::domain::index::client::Indexes;
use crate::domain::listing::client::Listings;
use crate::domain::miner::client::Miners;
use crate::domain::notification::client::Notifications;
use crate::domain::order::client::Orders;
use crate::domain::order_log::client::OrderLogs;
use crate::domain::securities_account::client::SecuritiesAccounts;
use crate::domain::system_bond::client::SystemBonds;
use crate::domain::trade_stats::client::TradeStats;
use crate::domain::user::client::Users;
use crate::domain::warrant::client::Warrants;
use crate::error::{AlphaTraderError, ApiError, Result};
use crate::http::{ApiRequest, Body, HttpRequest, HttpResponse, Transport};
use crate::session::Session;

/// The primary entry point for the Alpha Trader SDK.
///
/// One instance is one logical session against one backend. Mutating
/// operations (`login`, `register_user`) take `&mut self`; everything else
/// borrows the client immutably.
pub struct AlphaTraderClient {
    base_url: String,
    credentials: Credentials,
    /// Bearer token. NEVER logged.
    token: Option<String>,
    authenticated: bool,
    transport: Box<dyn Transport>,
}

impl AlphaTraderClient {
    pub fn builder() -> AlphaTraderClientBuilder {
        AlphaTraderClientBuilder::default()
    }

    /// Create a client with the default transport.
    pub fn new(base_url: &str, credentials: Credentials) -> Result<Self> {
        Self::builder()
            .base_url(base_url)
            .credentials(credentials)
            .build()
    }

    /// Base URL, always ending in exactly one `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Resolve `endpoint` against the base URL with exactly one `/` between them.
    pub fn build_url(&self, endpoint: &str) -> String {
        join_url(&self.base_url, endpoint)
    }

    /// Dispatch an authenticated request.
    ///
    /// Fails with [`AlphaTraderError::NotAuthenticated`] before any network
    /// call when `login()` has not succeeded. Attaches `Authorization: Bearer
    /// <token>`; headers on `request` are merged on top and win on a
    /// (case-insensitive) name collision. With `raise_for_status` set (the
    /// default) a status >= 400 is classified into an error; otherwise the raw
    /// response is returned as-is.
    pub fn request(&self, request: ApiRequest) -> Result<HttpResponse> {
        let token = match (self.authenticated, self.token.as_deref()) {
            (true, Some(token)) => token,
            _ => return Err(AlphaTraderError::NotAuthenticated),
        };

        let ApiRequest {
            method,
            endpoint,
            form,
            json,
            headers: extra_headers,
            query,
            raise_for_status,
        } = request;

        let mut headers = vec![("Authorization".to_string(), format!("Bearer {}", token))];
        for (name, value) in extra_headers {
            headers.retain(|(existing, _)| !existing.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        let body = match (form, json) {
            (Some(fields), _) => Some(Body::Form(fields)),
            (None, Some(value)) => Some(Body::Json(value)),
            (None, None) => None,
        };

        let http_request = HttpRequest {
            method,
            url: self.build_url(&endpoint),
            headers,
            query,
            body,
        };

        let response = self.transport.execute(http_request)?;
        tracing::debug!(
            method = %method,
            endpoint = %endpoint,
            status = response.status,
            "API request completed"
        );

        if raise_for_status {
            error_for_status(&response, &endpoint)?;
        }

        Ok(response)
    }

    /// Dispatch without the auth guard or auth header. Only the login and
    /// registration handshakes go through here.
    pub(crate) fn execute_unauthenticated(
        &self,
        endpoint: &str,
        form: Vec<(String, String)>,
    ) -> Result<HttpResponse> {
        let http_request = HttpRequest {
            method: crate::http::Method::Post,
            url: self.build_url(endpoint),
            headers: Vec::new(),
            query: Vec::new(),
            body: Some(Body::Form(form)),
        };
        let response = self.transport.execute(http_request)?;
        tracing::debug!(endpoint, status = response.status, "Handshake request completed");
        Ok(response)
    }

    pub(crate) fn set_session(&mut self, credentials: Option<Credentials>, token: String) {
        if let Some(credentials) = credentials {
            self.credentials = credentials;
        }
        self.token = Some(token);
        self.authenticated = true;
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn users(&self) -> Users<'_> {
        Users { session: self }
    }

    pub fn achievements(&self) -> Achievements<'_> {
        Achievements { session: self }
    }

    pub fn miner(&self) -> Miners<'_> {
        Miners { session: self }
    }

    pub fn listings(&self) -> Listings<'_> {
        Listings { session: self }
    }

    pub fn securities_accounts(&self) -> SecuritiesAccounts<'_> {
        SecuritiesAccounts { session: self }
    }

    pub fn companies(&self) -> Companies<'_> {
        Companies { session: self }
    }

    pub fn bonds(&self) -> Bonds<'_> {
        Bonds { session: self }
    }

    pub fn orders(&self) -> Orders<'_> {
        Orders { session: self }
    }

    pub fn central_bank(&self) -> CentralBank<'_> {
        CentralBank { session: self }
    }

    pub fn notifications(&self) -> Notifications<'_> {
        Notifications { session: self }
    }

    pub fn system_bonds(&self) -> SystemBonds<'_> {
        SystemBonds { session: self }
    }

    pub fn highscores(&self) -> Highscores<'_> {
        Highscores { session: self }
    }

    pub fn indexes(&self) -> Indexes<'_> {
        Indexes { session: self }
    }

    pub fn warrants(&self) -> Warrants<'_> {
        Warrants { session: self }
    }

    pub fn historical_data(&self) -> HistoricalData<'_> {
        HistoricalData { session: self }
    }

    pub fn order_logs(&self) -> OrderLogs<'_> {
        OrderLogs { session: self }
    }

    pub fn trade_stats(&self) -> TradeStats<'_> {
        TradeStats { session: self }
    }
}

impl Session for AlphaTraderClient {
    fn request(&self, request: ApiRequest) -> Result<HttpResponse> {
        AlphaTraderClient::request(self, request)
    }

    fn login(&mut self) -> Result<String> {
        AlphaTraderClient::login(self)
    }
}

impl std::fmt::Debug for AlphaTraderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaTraderClient")
            .field("base_url", &self.base_url)
            .field("credentials", &self.credentials)
            .field("authenticated", &self.authenticated)
            .finish_non_exhaustive()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Request core helpers
// ═════════════════════════════════════════════════════════════════════════════

/// Normalize a base URL to end in exactly one `/`.
pub(crate) fn normalize_base_url(url: &str) -> String {
    format!("{}/", url.trim_end_matches('/'))
}

/// Join base and endpoint with exactly one separator between them.
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Extract the server's error message: the JSON `message` field if present,
/// else the raw body, else `HTTP <status>`.
pub(crate) fn error_message(response: &HttpResponse, parsed: Option<&Value>) -> String {
    let from_json = parsed
        .and_then(|v| v.get("message"))
        .filter(|m| !m.is_null())
        .map(|m| match m.as_str() {
            Some(s) => s.to_string(),
            None => m.to_string(),
        });

    match from_json {
        Some(message) => message,
        None if !response.body.is_empty() => response.body.clone(),
        None => format!("HTTP {}", response.status),
    }
}

/// Classify a response status into the error taxonomy. Statuses below 400 pass.
pub(crate) fn error_for_status(response: &HttpResponse, endpoint: &str) -> Result<()> {
    if response.status < 400 {
        return Ok(());
    }

    let parsed = response.json_value();
    let message = error_message(response, parsed.as_ref());
    tracing::warn!(
        endpoint,
        status = response.status,
        message = %message,
        "API request failed"
    );

    if response.status == 401 {
        return Err(AlphaTraderError::authentication(message, Some(401)));
    }

    Err(ApiError::new(response.status, message, parsed, Some(endpoint.to_string())).into())
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct AlphaTraderClientBuilder {
    base_url: String,
    credentials: Option<Credentials>,
    transport: Option<Box<dyn Transport>>,
}

impl Default for AlphaTraderClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            credentials: None,
            transport: None,
        }
    }
}

impl AlphaTraderClientBuilder {
    /// Builder preloaded from `ALPHA_TRADER_BASE_URL` (optional),
    /// `ALPHA_TRADER_USERNAME`, `ALPHA_TRADER_PASSWORD` and
    /// `ALPHA_TRADER_PARTNER_ID`.
    pub fn from_env() -> Result<Self> {
        let mut builder = Self::default().credentials(Credentials::from_env()?);
        if let Ok(url) = std::env::var("ALPHA_TRADER_BASE_URL") {
            builder = builder.base_url(&url);
        }
        Ok(builder)
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn build(self) -> Result<AlphaTraderClient> {
        if self.base_url.trim().is_empty() {
            return Err(AlphaTraderError::Configuration(
                "base URL must not be empty".to_string(),
            ));
        }
        let credentials = self.credentials.ok_or_else(|| {
            AlphaTraderError::Configuration("credentials are required".to_string())
        })?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => default_transport()?,
        };

        Ok(AlphaTraderClient {
            base_url: normalize_base_url(self.base_url.trim()),
            credentials,
            token: None,
            authenticated: false,
            transport,
        })
    }
}

#[cfg(feature = "http")]
fn default_transport() -> Result<Box<dyn Transport>> {
    Ok(Box::new(crate::http::ReqwestTransport::new()?))
}

#[cfg(not(feature = "http"))]
fn default_transport() -> Result<Box<dyn Transport>> {
    Err(AlphaTraderError::Configuration(
        "no transport configured and the `http` feature is disabled".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{authenticated_client, client_with, json_response};
    use serde_json::json;

    #[test]
    fn test_join_url_single_separator() {
        let cases = [
            ("https://api.example.com/", "api/test"),
            ("https://api.example.com", "/api/test"),
            ("https://api.example.com/", "/api/test"),
            ("https://api.example.com", "api/test"),
            ("https://api.example.com//", "//api/test"),
        ];
        for (base, endpoint) in cases {
            assert_eq!(
                join_url(base, endpoint),
                "https://api.example.com/api/test",
                "base={base:?} endpoint={endpoint:?}"
            );
        }
    }

    #[test]
    fn test_base_url_normalized_on_build() {
        let (client, _) = client_with(vec![]);
        assert_eq!(client.base_url(), "https://api.example.com/");
        assert_eq!(
            client.build_url("user/token/"),
            "https://api.example.com/user/token/"
        );
    }

    #[test]
    fn test_base_url_path_is_kept() {
        let (client, _) = crate::testing::client_at("https://host/alpha", vec![]);
        assert_eq!(client.build_url("/api/user"), "https://host/alpha/api/user");
    }

    #[test]
    fn test_builder_requires_credentials() {
        let err = AlphaTraderClient::builder()
            .transport(crate::testing::ScriptedTransport::new(vec![]))
            .build()
            .unwrap_err();
        assert!(matches!(err, AlphaTraderError::Configuration(_)));
    }

    #[test]
    fn test_request_before_login_never_hits_transport() {
        let (client, transport) = client_with(vec![json_response(200, json!({}))]);
        let err = client.request(ApiRequest::get("api/user")).unwrap_err();
        assert!(matches!(err, AlphaTraderError::NotAuthenticated));
        assert!(transport.requests().is_empty());
    }

    #[test]
    fn test_request_attaches_bearer_and_resolves_url() {
        let (client, transport) = authenticated_client(vec![json_response(200, json!({"ok": true}))]);
        let resp = client.request(ApiRequest::get("/api/user")).unwrap();
        assert_eq!(resp.status, 200);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, "https://api.example.com/api/user");
        assert_eq!(sent.header("Authorization"), Some("Bearer test-token"));
    }

    #[test]
    fn test_additional_headers_merge_and_override() {
        let (client, transport) = authenticated_client(vec![
            json_response(200, json!({})),
            json_response(200, json!({})),
        ]);

        client
            .request(ApiRequest::post("api/v2/filter/pricespreads").header("Content-Type", "application/json"))
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.header("Content-Type"), Some("application/json"));
        assert_eq!(sent.header("Authorization"), Some("Bearer test-token"));

        client
            .request(ApiRequest::get("api/user").header("authorization", "Bearer other"))
            .unwrap();
        let sent = transport.last_request().unwrap();
        let auth: Vec<_> = sent
            .headers
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("authorization"))
            .collect();
        assert_eq!(auth.len(), 1);
        assert_eq!(auth[0].1, "Bearer other");
    }

    #[test]
    fn test_form_takes_precedence_over_json() {
        let (client, transport) = authenticated_client(vec![json_response(200, json!({}))]);
        client
            .request(
                ApiRequest::post("api/companies")
                    .form("name", "Argo")
                    .json(json!({"ignored": true})),
            )
            .unwrap();
        let sent = transport.last_request().unwrap();
        assert_eq!(sent.form_field("name"), Some("Argo"));
    }

    #[test]
    fn test_status_classification() {
        let (client, _) = authenticated_client(vec![
            json_response(404, json!({"message": "Listing not found"})),
            json_response(400, json!({"message": "bad size"})),
            json_response(403, json!({"message": "not yours"})),
            HttpResponse::new(500, "Internal Server Error"),
            HttpResponse::new(401, ""),
        ]);

        let err = client.request(ApiRequest::get("api/listings/XYZ")).unwrap_err();
        match err {
            AlphaTraderError::Api(e) => {
                assert!(e.is_not_found());
                assert_eq!(e.message, "Listing not found");
                assert_eq!(e.endpoint.as_deref(), Some("api/listings/XYZ"));
                assert!(e.response.is_some());
            }
            other => panic!("expected not found, got {other:?}"),
        }

        let err = client.request(ApiRequest::get("api/x")).unwrap_err();
        assert!(err.as_api().unwrap().is_validation());

        let err = client.request(ApiRequest::get("api/x")).unwrap_err();
        assert!(err.as_api().unwrap().is_permission());

        let err = client.request(ApiRequest::get("api/x")).unwrap_err();
        let api = err.as_api().unwrap();
        assert_eq!(api.status_code, 500);
        assert_eq!(api.message, "Internal Server Error");
        assert!(api.response.is_none());

        let err = client.request(ApiRequest::get("api/x")).unwrap_err();
        assert!(matches!(
            err,
            AlphaTraderError::Authentication { status_code: Some(401), ref message } if message == "HTTP 401"
        ));
    }

    #[test]
    fn test_raise_for_status_false_returns_response() {
        let (client, _) = authenticated_client(vec![json_response(404, json!({"message": "nope"}))]);
        let resp = client
            .request(ApiRequest::get("api/x").raise_for_status(false))
            .unwrap();
        assert_eq!(resp.status, 404);
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        let resp = json_response(409, json!({"error": "conflict"}));
        let parsed = resp.json_value();
        assert_eq!(error_message(&resp, parsed.as_ref()), r#"{"error":"conflict"}"#);
    }

    #[test]
    fn test_debug_hides_secrets() {
        let (client, _) = authenticated_client(vec![]);
        let debug = format!("{client:?}");
        assert!(!debug.contains("test-token"));
        assert!(!debug.contains("testpass"));
    }
}
