//! Indexes sub-client.

use crate::domain::index::{CompactIndex, Index};
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{segment, PageRequest, Paged};

pub struct Indexes<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Indexes<'a> {
    pub fn list(&self, page: &PageRequest) -> Result<Vec<CompactIndex>> {
        let items: Paged<CompactIndex> = self
            .session
            .request(page.apply(ApiRequest::get("api/v2/indexes")))?
            .json()?;
        Ok(items.into_inner())
    }

    pub fn get(&self, security_identifier: &str) -> Result<Index> {
        let endpoint = format!("api/v2/index/{}", segment(security_identifier));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }
}
