//! Authentication — credentials, token handshake, user registration.
//!
//! ## Session Model
//!
//! - The client exchanges username, password and partner id for a bearer token
//!   via `POST user/token/` (form-encoded). The token is held in memory only.
//! - Every authenticated request carries `Authorization: Bearer <token>`.
//! - There is no refresh or expiry tracking. A 401 mid-session surfaces as
//!   [`AlphaTraderError::Authentication`](crate::error::AlphaTraderError::Authentication);
//!   call `login()` again to recover.

pub mod client;

use serde::Deserialize;

use crate::error::{AlphaTraderError, Result};

// ============================================================================
// Credentials
// ============================================================================

/// Login credentials for one Alpha Trader account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub partner_id: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        partner_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            partner_id: partner_id.into(),
        }
    }

    /// Read `ALPHA_TRADER_USERNAME`, `ALPHA_TRADER_PASSWORD` and
    /// `ALPHA_TRADER_PARTNER_ID`.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            required_env("ALPHA_TRADER_USERNAME")?,
            required_env("ALPHA_TRADER_PASSWORD")?,
            required_env("ALPHA_TRADER_PARTNER_ID")?,
        ))
    }

    pub(crate) fn token_form(&self) -> Vec<(String, String)> {
        vec![
            ("username".to_string(), self.username.clone()),
            ("password".to_string(), self.password.clone()),
            ("partnerId".to_string(), self.partner_id.clone()),
        ]
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("partner_id", &self.partner_id)
            .finish()
    }
}

fn required_env(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| AlphaTraderError::Configuration(format!("environment variable {name} is not set")))
}

// ============================================================================
// Wire types
// ============================================================================

/// Body of a successful `user/token/` response. The token travels in `message`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TokenResponse {
    pub message: String,
}
