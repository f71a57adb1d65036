//! Notifications sub-client — list, count, mark read, delete.

use crate::domain::notification::wire::UnreadCount;
use crate::domain::notification::Notification;
use crate::error::Result;
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::{PageRequest, Paged};

const NOTIFICATIONS_ENDPOINT: &str = "api/v2/notifications";

pub struct Notifications<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Notifications<'a> {
    /// List notifications. `is_read` filters by read status when set.
    pub fn list(
        &self,
        is_read: Option<bool>,
        search: Option<&str>,
        page: &PageRequest,
    ) -> Result<Vec<Notification>> {
        let request = page.apply(
            ApiRequest::get(NOTIFICATIONS_ENDPOINT)
                .query_opt("isRead", is_read)
                .query_opt("search", search.filter(|s| !s.is_empty())),
        );
        let items: Paged<Notification> = self.session.request(request)?.json()?;
        Ok(items.into_inner())
    }

    /// Number of unread notifications. Accepts `count` or `value` in the body.
    pub fn unread_count(&self) -> Result<u64> {
        let resp: UnreadCount = self
            .session
            .request(ApiRequest::get("api/v2/notifications/unread/count"))?
            .json()?;
        Ok(resp.count.or(resp.value).unwrap_or(0))
    }

    /// Mark one notification read. Returns `true` on HTTP 200.
    pub fn mark_as_read(&self, notification: &mut Notification) -> Result<bool> {
        let request = ApiRequest::put(NOTIFICATIONS_ENDPOINT)
            .query("isRead", true)
            .query("notificationIds[]", &notification.id);
        let ok = self.session.request(request)?.status == 200;
        if ok {
            notification.read_by_receiver = true;
        }
        Ok(ok)
    }

    /// Mark every notification (matching `search`, if given) read.
    pub fn mark_all_as_read(&self, search: Option<&str>) -> Result<bool> {
        let request = ApiRequest::put(NOTIFICATIONS_ENDPOINT)
            .query("isRead", true)
            .query_opt("search", search.filter(|s| !s.is_empty()));
        Ok(self.session.request(request)?.status == 200)
    }

    pub fn delete(&self, notification_id: &str) -> Result<bool> {
        let request = ApiRequest::delete(NOTIFICATIONS_ENDPOINT).query("notificationIds[]", notification_id);
        Ok(self.session.request(request)?.status == 200)
    }

    /// Delete every notification (matching `search`, if given).
    pub fn delete_all(&self, search: Option<&str>) -> Result<bool> {
        let request = ApiRequest::delete(NOTIFICATIONS_ENDPOINT)
            .query_opt("search", search.filter(|s| !s.is_empty()));
        Ok(self.session.request(request)?.status == 200)
    }
}
