//! Central bank domain — reserves held by banking-licensed companies.

pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Multiplier the web UI uses for interest rate boosts.
pub const DEFAULT_BOOST_MULTIPLIER: i64 = 200;

/// A company's license to operate as a bank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "wire::BankingLicenseWire")]
pub struct BankingLicense {
    pub id: String,
    pub company_id: String,
    pub start_date: DateTime<Utc>,
    pub version: i64,
}

/// Central bank reserves of a bank. All fields are required.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CentralBankReserves {
    pub id: String,
    pub banking_license: BankingLicense,
    pub cash_holding: f64,
    pub coins_for_next_boost: i64,
    pub interest_rate_boost: f64,
    pub max_central_bank_loans: f64,
    pub version: i64,
}

impl CentralBankReserves {
    /// Coins an interest rate boost with `multiplier` costs.
    pub fn coins_needed_for_boost(&self, multiplier: i64) -> i64 {
        self.coins_for_next_boost * multiplier
    }
}

impl From<wire::BankingLicenseWire> for BankingLicense {
    fn from(w: wire::BankingLicenseWire) -> Self {
        BankingLicense {
            id: w.id,
            company_id: w.company.id,
            start_date: w.start_date,
            version: w.version,
        }
    }
}
