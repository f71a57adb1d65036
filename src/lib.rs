//! # Alpha Trader SDK
//!
//! A blocking Rust client for the Alpha Trader trading-game REST API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared helpers, domain records, error taxonomy
//! 2. **HTTP** — `ApiRequest`, the `Transport` seam, and the reqwest transport
//! 3. **Auth** — Credentials, token login, user registration
//! 4. **High-Level Client** — `AlphaTraderClient` with one sub-client per resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use alpha_trader::prelude::*;
//!
//! let mut client = AlphaTraderClient::builder()
//!     .credentials(Credentials::new("alice", "secret", "partner-id"))
//!     .build()?;
//! client.login()?;
//!
//! let me = client.users().get()?;
//! let spread = client.listings().price_spread("STAD9A0F12")?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Paging, list decoding, path and timestamp helpers used by every domain.
pub mod shared;

/// Domain modules (vertical slices): records, wire types, sub-clients.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Request description and the pluggable transport.
pub mod http;

/// The capability domain sub-clients are written against.
pub mod session;

// ── Layer 3: Auth ────────────────────────────────────────────────────────────

/// Credentials, login, registration.
pub mod auth;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `AlphaTraderClient` — the primary entry point.
pub mod client;

#[cfg(test)]
mod testing;

pub use auth::Credentials;
pub use client::{join_url, AlphaTraderClient, AlphaTraderClientBuilder};
pub use error::{AlphaTraderError, ApiError, ApiErrorKind, Result, TransportError};
pub use session::Session;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Client
    pub use crate::auth::Credentials;
    pub use crate::client::{AlphaTraderClient, AlphaTraderClientBuilder};
    pub use crate::session::Session;

    // Errors
    pub use crate::error::{AlphaTraderError, ApiError, ApiErrorKind, Result, TransportError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP
    pub use crate::http::{ApiRequest, HttpRequest, HttpResponse, Method, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Shared
    pub use crate::shared::PageRequest;

    // Domain types — accounts and users
    pub use crate::domain::achievement::Achievement;
    pub use crate::domain::miner::{Miner, Owner};
    pub use crate::domain::notification::Notification;
    pub use crate::domain::securities_account::{Portfolio, Position, SecuritiesAccount};
    pub use crate::domain::user::{User, UserCapabilities};

    // Domain types — companies and banking
    pub use crate::domain::central_bank::{
        BankingLicense, CentralBankReserves, DEFAULT_BOOST_MULTIPLIER,
    };
    pub use crate::domain::company::{BankAccount, Company};

    // Domain types — securities
    pub use crate::domain::bond::Bond;
    pub use crate::domain::index::{CompactIndex, Index, IndexMember};
    pub use crate::domain::listing::{Listing, Price, PriceSpread};
    pub use crate::domain::system_bond::SystemBond;
    pub use crate::domain::warrant::{Warrant, WarrantType};

    // Domain types — trading
    pub use crate::domain::order::{
        CheckMessage, NewOrder, Order, OrderAction, OrderCheckResult, OrderType,
    };
    pub use crate::domain::order_log::OrderLogEntry;
    pub use crate::domain::trade_stats::{Trade, TradeFilter, TradeSummary};

    // Domain types — rankings and history
    pub use crate::domain::highscore::{
        AllianceHighscoreEntry, CompanyHighscoreEntry, HighscoreHistory, HighscoreType,
        UserHighscoreEntry,
    };
    pub use crate::domain::historical_data::{HistorizedCompanyData, HistorizedListingData};
}
