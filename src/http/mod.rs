//! HTTP layer — request description, transport trait, reqwest executor.

pub mod request;
pub mod transport;

pub use request::ApiRequest;
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Body, HttpRequest, HttpResponse, Method, Transport};
