//! Achievements sub-client — claim coin rewards.

use crate::domain::achievement::Achievement;
use crate::error::{AlphaTraderError, Result};
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::segment;

/// Sub-client for achievement operations.
pub struct Achievements<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Achievements<'a> {
    /// Claim the coin reward of an achievement and refresh it from the response.
    ///
    /// Fails with [`AlphaTraderError::ResourceState`] without a network call
    /// when the achievement is already claimed.
    pub fn claim(&self, achievement: &mut Achievement) -> Result<()> {
        if achievement.claimed {
            return Err(AlphaTraderError::ResourceState(format!(
                "Achievement '{}' has already been claimed",
                achievement.description
            )));
        }

        let endpoint = format!("api/v2/my/userachievementclaim/{}", segment(&achievement.id));
        let resp = self.session.request(ApiRequest::put(endpoint))?;
        *achievement = resp.json()?;

        tracing::info!(
            achievement = %achievement.description,
            claimed = achievement.claimed,
            "Achievement claimed"
        );
        Ok(())
    }
}
