//! Login and registration handshakes on `AlphaTraderClient`.

use crate::auth::{Credentials, TokenResponse};
use crate::client::{error_message, AlphaTraderClient};
use crate::domain::user::User;
use crate::error::{AlphaTraderError, ApiError, Result};

const TOKEN_ENDPOINT: &str = "user/token/";
const REGISTER_ENDPOINT: &str = "user/register";

impl AlphaTraderClient {
    /// Exchange the configured credentials for a bearer token.
    ///
    /// On success the token is stored, the client becomes authenticated and the
    /// token is returned. On any failure the session state is left untouched.
    pub fn login(&mut self) -> Result<String> {
        let token = self.fetch_token(self.credentials())?;
        self.set_session(None, token.clone());
        tracing::info!(username = %self.credentials().username, "Client successfully authenticated");
        Ok(token)
    }

    /// Register a new account, then log in as it.
    ///
    /// The new account shares this client's partner id. Once the follow-up
    /// login succeeds the client adopts the new credentials.
    pub fn register_user(
        &mut self,
        username: &str,
        password: &str,
        email: &str,
        locale: Option<&str>,
    ) -> Result<User> {
        let mut form = vec![
            ("username".to_string(), username.to_string()),
            ("password".to_string(), password.to_string()),
            ("emailAddress".to_string(), email.to_string()),
        ];
        if let Some(locale) = locale {
            form.push(("locale".to_string(), locale.to_string()));
        }

        let response = self.execute_unauthenticated(REGISTER_ENDPOINT, form)?;

        match response.status {
            201 => {}
            400 => {
                let parsed = response.json_value();
                let message = error_message(&response, parsed.as_ref());
                tracing::warn!(username, message = %message, "Registration rejected");
                return Err(ApiError::validation(message, parsed, Some(REGISTER_ENDPOINT.to_string())).into());
            }
            status => {
                tracing::warn!(username, status, "Registration failed");
                return Err(ApiError::new(
                    status,
                    response.body.clone(),
                    response.json_value(),
                    Some(REGISTER_ENDPOINT.to_string()),
                )
                .into());
            }
        }

        tracing::info!(username, "User registered");

        let credentials = Credentials::new(username, password, self.credentials().partner_id.clone());
        let token = self.fetch_token(&credentials)?;
        self.set_session(Some(credentials), token);
        tracing::info!(username, "Client successfully authenticated");

        response.json::<User>()
    }

    fn fetch_token(&self, credentials: &Credentials) -> Result<String> {
        let response = self.execute_unauthenticated(TOKEN_ENDPOINT, credentials.token_form())?;

        match response.status {
            401 => {
                tracing::warn!(username = %credentials.username, "Login rejected: invalid credentials");
                return Err(AlphaTraderError::authentication("Invalid credentials", Some(401)));
            }
            403 => {
                tracing::warn!(username = %credentials.username, "Login rejected: forbidden");
                return Err(AlphaTraderError::authentication(
                    "Access forbidden - check partner ID",
                    Some(403),
                ));
            }
            status if status >= 400 => {
                tracing::warn!(username = %credentials.username, status, "Login failed");
                return Err(AlphaTraderError::authentication(
                    format!("Authentication failed: {}", response.body),
                    Some(status),
                ));
            }
            _ => {}
        }

        let token: TokenResponse = serde_json::from_str(&response.body).map_err(|e| {
            AlphaTraderError::authentication(format!("Invalid response from server: {e}"), None)
        })?;
        Ok(token.message)
    }
}
