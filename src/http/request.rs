//! `ApiRequest` — the argument bundle for `Session::request`.

use serde_json::Value;

use super::transport::Method;

/// An authenticated request relative to the client's base URL.
///
/// Optional values passed through `form_opt`/`query_opt` are dropped when
/// `None`; the backend treats an absent field and a null field the same way.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub(crate) method: Method,
    pub(crate) endpoint: String,
    pub(crate) form: Option<Vec<(String, String)>>,
    pub(crate) json: Option<Value>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) query: Vec<(String, String)>,
    pub(crate) raise_for_status: bool,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            form: None,
            json: None,
            headers: Vec::new(),
            query: Vec::new(),
            raise_for_status: true,
        }
    }

    pub fn get(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Put, endpoint)
    }

    pub fn delete(endpoint: impl Into<String>) -> Self {
        Self::new(Method::Delete, endpoint)
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Add a form-encoded body field.
    pub fn form(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.form
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.to_string()));
        self
    }

    /// Add a form field only when `value` is `Some`.
    pub fn form_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.form(key, v),
            None => self,
        }
    }

    /// Set a JSON body. Ignored on the wire when form fields are also present.
    pub fn json(mut self, body: Value) -> Self {
        self.json = Some(body);
        self
    }

    /// Add a header. Replaces a same-named header set internally by the client.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a query parameter only when `value` is `Some`.
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// When `false`, error statuses are returned as plain responses instead of
    /// being classified into errors.
    pub fn raise_for_status(mut self, raise: bool) -> Self {
        self.raise_for_status = raise;
        self
    }
}
