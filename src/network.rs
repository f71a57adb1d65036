//! Network URL constants for the Alpha Trader SDK.

/// Default REST API base URL for Alpha Trader.
pub const DEFAULT_API_URL: &str = "https://stable.alpha-trader.com";
