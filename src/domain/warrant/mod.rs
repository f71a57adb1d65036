//! Warrant domain — call and put derivatives on listed securities.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::company::client::Companies;
use crate::domain::company::Company;
use crate::domain::listing::client::Listings;
use crate::domain::listing::Listing;
use crate::error::Result;
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WarrantType {
    Call,
    Put,
}

impl WarrantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Call => "CALL",
            Self::Put => "PUT",
        }
    }
}

impl std::fmt::Display for WarrantType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A warrant. Lenient: missing fields decode to their empty values, and the
/// raw `type` string is kept so unknown kinds still decode.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::WarrantWire")]
pub struct Warrant {
    pub id: String,
    pub warrant_type: String,
    pub ratio: f64,
    pub subscription_period_date: Option<DateTime<Utc>>,
    pub underlying_value: f64,
    pub underlying_cap_value: f64,
    pub security_identifier: String,
    pub underlying_security_identifier: String,
    pub company_id: String,
    pub company_name: String,
    pub version: i64,
}

impl Warrant {
    pub fn is_call(&self) -> bool {
        self.warrant_type == WarrantType::Call.as_str()
    }

    pub fn is_put(&self) -> bool {
        self.warrant_type == WarrantType::Put.as_str()
    }

    pub fn listing(&self, session: &dyn Session) -> Result<Listing> {
        Listings { session }.get(&self.security_identifier)
    }

    pub fn underlying(&self, session: &dyn Session) -> Result<Listing> {
        Listings { session }.get(&self.underlying_security_identifier)
    }

    /// The issuing company.
    pub fn company(&self, session: &dyn Session) -> Result<Company> {
        Companies { session }.get(&self.company_id)
    }
}

impl From<wire::WarrantWire> for Warrant {
    fn from(w: wire::WarrantWire) -> Self {
        let company = w.company.unwrap_or_default();
        Warrant {
            id: w.id,
            warrant_type: w.warrant_type,
            ratio: w.ratio,
            subscription_period_date: w.subscription_period_date,
            underlying_value: w.underlying_value,
            underlying_cap_value: w.underlying_cap_value,
            security_identifier: w.listing.unwrap_or_default().security_identifier,
            underlying_security_identifier: w.underlying.unwrap_or_default().security_identifier,
            company_id: company.id,
            company_name: company.name,
            version: w.version,
        }
    }
}
