//! Unified SDK error types.
//!
//! Every failure surfaces as an [`AlphaTraderError`]. HTTP status failures on
//! authenticated requests are grouped under [`AlphaTraderError::Api`], so
//! matching that one variant catches not-found, validation and permission
//! errors alike.

use serde_json::Value;
use thiserror::Error;

use crate::domain::order::OrderCheckResult;

/// Result alias used throughout the SDK.
pub type Result<T> = std::result::Result<T, AlphaTraderError>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum AlphaTraderError {
    /// Login rejected, malformed login response, or a token rejected mid-session.
    #[error("Authentication error: {message}")]
    Authentication {
        message: String,
        status_code: Option<u16>,
    },

    /// A request was attempted before `login()` succeeded. Never touches the network.
    #[error("Client is not authenticated. Please call login() first.")]
    NotAuthenticated,

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    #[error("Order error: {message}")]
    Order {
        message: String,
        check_result: Option<Box<OrderCheckResult>>,
    },

    /// The operation is not valid for the resource's current state
    /// (claiming a claimed achievement, paying salary for another user, ...).
    #[error("Resource state error: {0}")]
    ResourceState(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl AlphaTraderError {
    pub(crate) fn authentication(message: impl Into<String>, status_code: Option<u16>) -> Self {
        Self::Authentication {
            message: message.into(),
            status_code,
        }
    }

    /// HTTP status carried by the error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Authentication { status_code, .. } => *status_code,
            Self::Api(e) => Some(e.status_code),
            _ => None,
        }
    }

    /// The API error, when this failure came from an HTTP status.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Which HTTP failure an [`ApiError`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// HTTP 400.
    Validation,
    /// HTTP 403.
    Permission,
    /// HTTP 404.
    NotFound,
    /// Any other status >= 400.
    Other,
}

impl ApiErrorKind {
    /// Classify a status code. Callers only pass statuses >= 400 (other than 401).
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::Validation,
            403 => Self::Permission,
            404 => Self::NotFound,
            _ => Self::Other,
        }
    }
}

/// Error response from the API.
#[derive(Error, Debug, Clone)]
#[error("API Error ({status_code}): {message}")]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status_code: u16,
    pub message: String,
    /// Parsed JSON body, when the server sent one.
    pub response: Option<Value>,
    /// Endpoint path that was called.
    pub endpoint: Option<String>,
}

impl ApiError {
    pub fn new(
        status_code: u16,
        message: impl Into<String>,
        response: Option<Value>,
        endpoint: Option<String>,
    ) -> Self {
        Self {
            kind: ApiErrorKind::from_status(status_code),
            status_code,
            message: message.into(),
            response,
            endpoint,
        }
    }

    pub fn not_found(message: impl Into<String>, response: Option<Value>, endpoint: Option<String>) -> Self {
        Self::new(404, message, response, endpoint)
    }

    pub fn validation(message: impl Into<String>, response: Option<Value>, endpoint: Option<String>) -> Self {
        Self::new(400, message, response, endpoint)
    }

    pub fn permission(message: impl Into<String>, response: Option<Value>, endpoint: Option<String>) -> Self {
        Self::new(403, message, response, endpoint)
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ApiErrorKind::NotFound
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ApiErrorKind::Validation
    }

    pub fn is_permission(&self) -> bool {
        self.kind == ApiErrorKind::Permission
    }
}

/// Failures below HTTP semantics: connection, TLS, malformed headers.
#[derive(Error, Debug)]
pub enum TransportError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader { name: String, reason: String },

    #[error("{0}")]
    Other(String),
}
