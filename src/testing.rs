//! Scripted in-memory transport and client fixtures for unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};

use crate::auth::Credentials;
use crate::client::AlphaTraderClient;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse, Transport};

pub(crate) const TEST_BASE_URL: &str = "https://api.example.com";

/// Replays canned responses in order and records every request it receives.
#[derive(Clone, Default)]
pub(crate) struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<HttpResponse>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new(responses: Vec<HttpResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(responses.into())),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.requests.lock().unwrap().clear();
    }
}

impl Transport for ScriptedTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| TransportError::Other("no scripted response left".to_string()))
    }
}

pub(crate) fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse::new(status, body.to_string())
}

pub(crate) fn client_at(
    base_url: &str,
    responses: Vec<HttpResponse>,
) -> (AlphaTraderClient, ScriptedTransport) {
    let transport = ScriptedTransport::new(responses);
    let client = AlphaTraderClient::builder()
        .base_url(base_url)
        .credentials(Credentials::new("testuser", "testpass", "partner-1"))
        .transport(transport.clone())
        .build()
        .unwrap();
    (client, transport)
}

/// A client that has not logged in yet.
pub(crate) fn client_with(responses: Vec<HttpResponse>) -> (AlphaTraderClient, ScriptedTransport) {
    client_at(TEST_BASE_URL, responses)
}

/// A client logged in with token `test-token`. The login request is not kept
/// in the transport's log.
pub(crate) fn authenticated_client(
    responses: Vec<HttpResponse>,
) -> (AlphaTraderClient, ScriptedTransport) {
    let mut script = vec![json_response(200, json!({"message": "test-token"}))];
    script.extend(responses);
    let (mut client, transport) = client_with(script);
    client.login().unwrap();
    transport.clear();
    (client, transport)
}

pub(crate) fn user_json(username: &str) -> Value {
    json!({
        "id": "user-1",
        "username": username,
        "emailAddress": format!("{username}@example.com"),
        "jwtToken": null,
        "emailSubscriptionType": "ALL",
        "userCapabilities": {
            "partnerId": "partner-1",
            "achievementCount": 3,
            "achievementTotal": 40,
            "lastSponsoringDate": null,
            "level2UserEndDate": null,
            "locale": "en",
            "premiumEndDate": null,
            "sponsoredHours": 0,
            "teamDepartment": null,
            "teamRole": "NONE",
            "teamRoleDescription": null,
            "level2User": false,
            "partner": false,
            "premium": false
        },
        "gravatarHash": "abc123",
        "refId": "ref-1",
        "registrationDate": 1_700_000_000_000i64,
        "version": 2,
        "myUser": true
    })
}
