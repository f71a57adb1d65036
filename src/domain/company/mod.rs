//! Company domain — companies and their bank accounts.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::domain::listing::Listing;
use crate::domain::securities_account::SecuritiesAccount;
use crate::domain::user::User;
use crate::error::Result;
use crate::session::Session;

/// A company's cash account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub id: String,
    #[serde(default)]
    pub cash: f64,
    #[serde(default)]
    pub version: i64,
}

/// A listed company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub security_identifier: String,
    pub securities_account_id: String,
    pub achievement_count: i64,
    pub bank_account: BankAccount,
    pub ceo: User,
    pub listing: Listing,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub version: i64,
}

impl Company {
    /// Fetch the company's securities account.
    pub fn securities_account(&self, session: &dyn Session) -> Result<SecuritiesAccount> {
        crate::domain::securities_account::client::SecuritiesAccounts { session }
            .get(&self.securities_account_id)
    }
}

impl std::fmt::Display for Company {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.security_identifier)
    }
}
