//! Integration tests for the request core, driven through the public API with
//! an in-memory transport.
//!
//! Run with:
//! ```bash
//! cargo test --test client_integration
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use alpha_trader::http::{Body, HttpRequest, HttpResponse, Method, Transport};
use alpha_trader::prelude::*;
use alpha_trader::join_url;

const BASE_URL: &str = "https://api.example.com";

#[derive(Clone, Default)]
struct RecordingTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    sent: Arc<Mutex<Vec<HttpRequest>>>,
}

impl RecordingTransport {
    fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            sent: Arc::default(),
        }
    }

    fn sent(&self) -> Vec<HttpRequest> {
        self.sent.lock().unwrap().clone()
    }
}

impl Transport for RecordingTransport {
    fn execute(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        self.sent.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("unexpected request".into()))
    }
}

fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse::new(status, body.to_string())
}

fn client(responses: Vec<HttpResponse>) -> (AlphaTraderClient, RecordingTransport) {
    let transport = RecordingTransport::new(responses);
    let client = AlphaTraderClient::builder()
        .base_url(BASE_URL)
        .credentials(Credentials::new("alice", "hunter2", "partner-7"))
        .transport(transport.clone())
        .build()
        .expect("client should build");
    (client, transport)
}

fn logged_in(mut responses: Vec<HttpResponse>) -> (AlphaTraderClient, RecordingTransport) {
    responses.insert(0, json_response(200, json!({"message": "tok-123"})));
    let (mut client, transport) = client(responses);
    client.login().expect("login should succeed");
    (client, transport)
}

fn expect_api_error(err: AlphaTraderError) -> ApiError {
    match err {
        AlphaTraderError::Api(api) => api,
        other => panic!("expected an API error, got: {other:?}"),
    }
}

// ── URL joining ──────────────────────────────────────────────────────────────

#[test]
fn join_url_has_exactly_one_separator() {
    let expected = "https://api.example.com/api/test";
    for base in ["https://api.example.com", "https://api.example.com/", "https://api.example.com//"] {
        for endpoint in ["api/test", "/api/test", "//api/test"] {
            assert_eq!(join_url(base, endpoint), expected, "{base} + {endpoint}");
        }
    }
}

#[test]
fn requests_hit_joined_url() {
    let transport = RecordingTransport::new(vec![
        json_response(200, json!({"message": "tok"})),
        json_response(200, json!({})),
    ]);
    let mut client = AlphaTraderClient::builder()
        .base_url("https://api.example.com/")
        .credentials(Credentials::new("alice", "hunter2", "partner-7"))
        .transport(transport.clone())
        .build()
        .unwrap();
    client.login().unwrap();
    client.request(ApiRequest::get("/api/test")).unwrap();

    let sent = transport.sent();
    assert_eq!(sent[0].url, "https://api.example.com/user/token/");
    assert_eq!(sent[1].url, "https://api.example.com/api/test");
}

// ── Auth guard ───────────────────────────────────────────────────────────────

#[test]
fn request_before_login_never_touches_transport() {
    let (client, transport) = client(vec![]);
    let err = client.request(ApiRequest::get("api/user")).unwrap_err();
    assert!(matches!(err, AlphaTraderError::NotAuthenticated));
    assert!(transport.sent().is_empty());
}

// ── Login ────────────────────────────────────────────────────────────────────

#[test]
fn login_success_sets_session() {
    let (mut client, transport) = client(vec![json_response(200, json!({"message": "tok-123"}))]);
    assert!(!client.is_authenticated());

    let token = client.login().unwrap();
    assert_eq!(token, "tok-123");
    assert_eq!(client.token(), Some("tok-123"));
    assert!(client.is_authenticated());

    let sent = &transport.sent()[0];
    assert_eq!(sent.method, Method::Post);
    assert!(sent.header("Authorization").is_none());
    assert!(matches!(sent.body, Some(Body::Form(_))));
    assert_eq!(sent.form_field("username"), Some("alice"));
    assert_eq!(sent.form_field("password"), Some("hunter2"));
    assert_eq!(sent.form_field("partnerId"), Some("partner-7"));
}

#[test]
fn login_401_is_authentication_error() {
    let (mut client, _) = client(vec![HttpResponse::new(401, "Unauthorized")]);
    let err = client.login().unwrap_err();
    assert!(matches!(err, AlphaTraderError::Authentication { .. }));
    assert_eq!(err.status_code(), Some(401));
    assert!(!client.is_authenticated());
    assert!(client.token().is_none());
}

#[test]
fn login_without_message_reports_malformed_response() {
    let (mut client, _) = client(vec![json_response(200, json!({"token": "nope"}))]);
    let err = client.login().unwrap_err();
    match &err {
        AlphaTraderError::Authentication { message, .. } => {
            assert!(message.contains("Invalid response from server"), "{message}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!client.is_authenticated());
}

// ── Status classification ────────────────────────────────────────────────────

#[test]
fn status_codes_map_to_error_kinds() {
    let (client, _) = logged_in(vec![
        json_response(404, json!({"message": "Listing not found"})),
        json_response(400, json!({"message": "Bad size"})),
        json_response(403, json!({"message": "Not yours"})),
        HttpResponse::new(500, "Internal Server Error"),
    ]);

    let not_found = expect_api_error(client.request(ApiRequest::get("api/listings/NOPE")).unwrap_err());
    assert!(not_found.is_not_found());
    assert_eq!(not_found.message, "Listing not found");
    assert_eq!(not_found.endpoint.as_deref(), Some("api/listings/NOPE"));

    let validation = expect_api_error(client.request(ApiRequest::get("api/v2/indexes")).unwrap_err());
    assert!(validation.is_validation());
    assert_eq!(validation.response, Some(json!({"message": "Bad size"})));

    let permission = expect_api_error(client.request(ApiRequest::delete("api/securityorders/o-1")).unwrap_err());
    assert!(permission.is_permission());

    let server = expect_api_error(client.request(ApiRequest::get("api/user")).unwrap_err());
    assert_eq!(server.kind, ApiErrorKind::Other);
    assert_eq!(server.status_code, 500);
    assert_eq!(server.message, "Internal Server Error");
    assert!(server.response.is_none());
}

#[test]
fn mid_session_401_is_authentication_error() {
    let (client, _) = logged_in(vec![json_response(401, json!({"message": "Token expired"}))]);
    let err = client.request(ApiRequest::get("api/user")).unwrap_err();
    assert!(matches!(err, AlphaTraderError::Authentication { status_code: Some(401), .. }));
    // No automatic relogin.
    assert!(client.is_authenticated());
}

#[test]
fn raise_for_status_false_returns_raw_response() {
    let (client, _) = logged_in(vec![json_response(404, json!({"message": "gone"}))]);
    let response = client
        .request(ApiRequest::get("api/listings/NOPE").raise_for_status(false))
        .unwrap();
    assert_eq!(response.status, 404);
    assert_eq!(response.json_value(), Some(json!({"message": "gone"})));
}

// ── Headers and bodies ───────────────────────────────────────────────────────

#[test]
fn extra_headers_merge_with_authorization() {
    let (client, transport) = logged_in(vec![json_response(200, json!({})), json_response(200, json!({}))]);

    client
        .request(ApiRequest::get("api/user").header("X-Trace", "abc"))
        .unwrap();
    client
        .request(ApiRequest::get("api/user").header("authorization", "Bearer override"))
        .unwrap();

    let sent = transport.sent();
    assert_eq!(sent[1].header("Authorization"), Some("Bearer tok-123"));
    assert_eq!(sent[1].header("X-Trace"), Some("abc"));

    let auth_headers: Vec<_> = sent[2]
        .headers
        .iter()
        .filter(|(name, _)| name.eq_ignore_ascii_case("authorization"))
        .collect();
    assert_eq!(auth_headers.len(), 1);
    assert_eq!(auth_headers[0].1, "Bearer override");
}

#[test]
fn form_wins_over_json_and_query_is_forwarded() {
    let (client, transport) = logged_in(vec![json_response(201, json!({}))]);
    client
        .request(
            ApiRequest::post("api/companies")
                .form("name", "Argo")
                .json(json!({"ignored": true}))
                .query("page", 1),
        )
        .unwrap();

    let sent = transport.sent().pop().unwrap();
    assert_eq!(sent.form_field("name"), Some("Argo"));
    assert!(!matches!(sent.body, Some(Body::Json(_))));
    assert_eq!(sent.query_param("page"), Some("1"));
}

// ── Taxonomy ─────────────────────────────────────────────────────────────────

#[test]
fn every_error_is_one_base_type() {
    fn base(_: &AlphaTraderError) {}

    let errors: Vec<AlphaTraderError> = vec![
        AlphaTraderError::NotAuthenticated,
        ApiError::not_found("x", None, None).into(),
        ApiError::validation("x", None, None).into(),
        ApiError::permission("x", None, None).into(),
        AlphaTraderError::InsufficientFunds("x".into()),
        AlphaTraderError::ResourceState("x".into()),
        AlphaTraderError::Order {
            message: "x".into(),
            check_result: None,
        },
    ];
    errors.iter().for_each(base);
    assert_eq!(errors.iter().filter(|e| e.as_api().is_some()).count(), 3);
}

// ── Resource accessors ───────────────────────────────────────────────────────

#[test]
fn accessors_funnel_through_request() {
    let (client, transport) = logged_in(vec![json_response(
        200,
        json!({
            "securityIdentifier": "STAD9A0F12",
            "name": "Argo",
            "type": "STOCK",
            "startDate": 1_700_000_000_000i64
        }),
    )]);
    let listing = client.listings().get("STAD9A0F12").unwrap();
    assert_eq!(listing.name, "Argo");

    let sent = transport.sent().pop().unwrap();
    assert_eq!(sent.url, "https://api.example.com/api/listings/STAD9A0F12");
    assert_eq!(sent.header("Authorization"), Some("Bearer tok-123"));
}

#[test]
fn accessors_require_login() {
    let (client, transport) = client(vec![]);
    let err = client.users().get().unwrap_err();
    assert!(matches!(err, AlphaTraderError::NotAuthenticated));
    assert!(transport.sent().is_empty());
}
