//! Bond domain — company-issued bonds.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A company bond. Missing numeric fields decode to zero, missing dates to `None`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::BondWire")]
pub struct Bond {
    pub id: String,
    pub name: String,
    pub security_identifier: String,
    pub issuer_id: String,
    pub issuer_name: String,
    pub face_value: f64,
    pub interest_rate: f64,
    pub volume: f64,
    pub issue_date: Option<DateTime<Utc>>,
    pub maturity_date: Option<DateTime<Utc>>,
    pub version: i64,
}

impl Bond {
    pub fn is_matured(&self, now: DateTime<Utc>) -> bool {
        self.maturity_date.is_some_and(|d| d <= now)
    }
}

impl From<wire::BondWire> for Bond {
    fn from(w: wire::BondWire) -> Self {
        let listing = w.listing.unwrap_or_default();
        let issuer = w.issuer.unwrap_or_default();
        Bond {
            id: w.id,
            name: w.name,
            security_identifier: listing.security_identifier,
            issuer_id: issuer.id,
            issuer_name: issuer.name,
            face_value: w.face_value,
            interest_rate: w.interest_rate,
            volume: w.volume,
            issue_date: w.issue_date,
            maturity_date: w.maturity_date,
            version: w.version,
        }
    }
}
