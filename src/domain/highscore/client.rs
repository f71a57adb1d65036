//! Highscores sub-client — leaderboards.

use serde::de::DeserializeOwned;

use crate::domain::highscore::{
    AllianceHighscoreEntry, CompanyHighscoreEntry, HighscoreType, UserHighscoreEntry,
};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{PageRequest, Paged};

pub struct Highscores<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Highscores<'a> {
    pub fn users(&self, highscore_type: HighscoreType, page: &PageRequest) -> Result<Vec<UserHighscoreEntry>> {
        self.fetch(
            ApiRequest::get("api/v2/userhighscores").query("highscoreType", highscore_type),
            page,
        )
    }

    pub fn companies(
        &self,
        highscore_type: HighscoreType,
        page: &PageRequest,
    ) -> Result<Vec<CompanyHighscoreEntry>> {
        self.fetch(
            ApiRequest::get("api/v2/companyhighscores").query("highscoreType", highscore_type),
            page,
        )
    }

    pub fn alliances(&self, page: &PageRequest) -> Result<Vec<AllianceHighscoreEntry>> {
        self.fetch(ApiRequest::get("api/v2/alliancehighscores"), page)
    }

    pub fn best_users(&self, page: &PageRequest) -> Result<Vec<UserHighscoreEntry>> {
        self.fetch(ApiRequest::get("api/v2/bestusers"), page)
    }

    pub fn best_companies(&self, page: &PageRequest) -> Result<Vec<CompanyHighscoreEntry>> {
        self.fetch(ApiRequest::get("api/v2/bestcompanies"), page)
    }

    fn fetch<T: DeserializeOwned>(&self, request: ApiRequest, page: &PageRequest) -> Result<Vec<T>> {
        let items: Paged<T> = self.session.request(page.apply(request))?.json()?;
        Ok(items.into_inner())
    }
}
