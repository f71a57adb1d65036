//! The `Session` capability that resource modules depend on.
//!
//! Domain sub-clients and the explicit cross-entity fetches on records take a
//! `&dyn Session` rather than the concrete client, so no domain module needs
//! to know about any other.

use crate::error::Result;
use crate::http::{ApiRequest, HttpResponse};

/// An authenticated session against the Alpha Trader API.
pub trait Session {
    /// Dispatch an authenticated request. See [`AlphaTraderClient::request`].
    ///
    /// [`AlphaTraderClient::request`]: crate::client::AlphaTraderClient::request
    fn request(&self, request: ApiRequest) -> Result<HttpResponse>;

    /// Run the login handshake and return the fresh token.
    fn login(&mut self) -> Result<String>;
}
