//! Miner sub-client — fetch, transfer coins, upgrade.

use serde_json::Value;

use crate::domain::miner::Miner;
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;

/// Sub-client for the authenticated user's miner.
pub struct Miners<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Miners<'a> {
    pub fn get(&self) -> Result<Miner> {
        self.session.request(ApiRequest::get("api/v2/my/miner"))?.json()
    }

    /// Move mined coins to the user's account. Refreshes `miner` and returns
    /// the raw response body.
    pub fn transfer_coins(&self, miner: &mut Miner) -> Result<Value> {
        let body = self.put_and_refresh("api/v2/my/cointransfer", miner)?;
        tracing::info!(transferable_coins = miner.transferable_coins, "Coins transferred");
        Ok(body)
    }

    /// Upgrade the miner to the next level. Refreshes `miner` and returns the
    /// raw response body.
    pub fn upgrade(&self, miner: &mut Miner) -> Result<Value> {
        let body = self.put_and_refresh("api/v2/my/minerupgrade", miner)?;
        tracing::info!(
            coins_per_hour = miner.coins_per_hour,
            next_level_costs = miner.next_level_costs,
            next_level_coins_per_hour = miner.next_level_coins_per_hour,
            "Miner upgraded"
        );
        Ok(body)
    }

    fn put_and_refresh(&self, endpoint: &str, miner: &mut Miner) -> Result<Value> {
        let body: Value = self.session.request(ApiRequest::put(endpoint))?.json()?;
        *miner = serde_json::from_value(body.clone())?;
        Ok(body)
    }
}
