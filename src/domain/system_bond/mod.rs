//! System bond domain — bonds bought by the central bank at the main interest rate.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::listing::client::Listings;
use crate::domain::listing::{Listing, PriceSpread};
use crate::error::Result;
use crate::session::Session;

/// A system bond. Lenient: missing fields decode to their empty values.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::SystemBondWire")]
pub struct SystemBond {
    pub id: String,
    pub name: String,
    pub face_value: f64,
    pub volume: f64,
    pub interest_rate: f64,
    pub issue_date: Option<DateTime<Utc>>,
    pub maturity_date: Option<DateTime<Utc>>,
    pub security_identifier: String,
    pub repurchase_security_identifier: String,
    pub version: i64,
}

impl SystemBond {
    pub fn listing(&self, session: &dyn Session) -> Result<Listing> {
        Listings { session }.get(&self.security_identifier)
    }

    pub fn repurchase_listing(&self, session: &dyn Session) -> Result<Listing> {
        Listings { session }.get(&self.repurchase_security_identifier)
    }

    pub fn price_spread(&self, session: &dyn Session) -> Result<PriceSpread> {
        Listings { session }.price_spread(&self.security_identifier)
    }
}

impl std::fmt::Display for SystemBond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (volume {:.2}, interest rate {:.2}%)",
            self.name,
            self.volume,
            self.interest_rate * 100.0
        )
    }
}

impl From<wire::SystemBondWire> for SystemBond {
    fn from(w: wire::SystemBondWire) -> Self {
        SystemBond {
            id: w.id,
            name: w.name,
            face_value: w.face_value,
            volume: w.volume,
            interest_rate: w.interest_rate,
            issue_date: w.issue_date,
            maturity_date: w.maturity_date,
            security_identifier: w.listing.unwrap_or_default().security_identifier,
            repurchase_security_identifier: w.repurchase_listing.unwrap_or_default().security_identifier,
            version: w.version,
        }
    }
}
