//! Smoke tests against a live Alpha Trader backend.
//!
//! All tests are `#[ignore]` because they require network access and a real
//! account. Credentials come from the environment (or a `.env` file):
//! `ALPHA_TRADER_USERNAME`, `ALPHA_TRADER_PASSWORD`, `ALPHA_TRADER_PARTNER_ID`,
//! and optionally `ALPHA_TRADER_BASE_URL`.
//!
//! Run with:
//! ```bash
//! cargo test --test live_api -- --ignored
//! ```

use alpha_trader::prelude::*;

fn live_client() -> AlphaTraderClient {
    dotenvy::dotenv().ok();
    let mut client = AlphaTraderClientBuilder::from_env()
        .expect("ALPHA_TRADER_* variables must be set")
        .build()
        .expect("client should build");
    client.login().expect("login should succeed");
    client
}

#[test]
#[ignore]
fn test_login_and_fetch_me() {
    let client = live_client();
    assert!(client.is_authenticated());

    let me = client.users().get().expect("fetch current user");
    assert!(me.my_user);
    assert!(!me.username.is_empty());
}

#[test]
#[ignore]
fn test_highscores_first_page() {
    let client = live_client();
    let page = PageRequest::new(0, 5);
    let entries = client
        .highscores()
        .users(HighscoreType::Networth, &page)
        .expect("fetch highscores");
    assert!(entries.len() <= 5);
}

#[test]
#[ignore]
fn test_unknown_listing_is_not_found() {
    let client = live_client();
    let err = client
        .listings()
        .get("DOES-NOT-EXIST-0000")
        .expect_err("listing should not exist");
    let api = err.as_api().expect("should be an API error");
    assert!(api.is_not_found() || api.is_validation(), "{api:?}");
}
