//! Orders sub-client — fetch, place, delete, refresh.

use serde_json::Value;

use crate::client::error_message;
use crate::domain::order::{NewOrder, Order, OrderCheckResult};
use crate::error::{AlphaTraderError, Result};
use crate::http::ApiRequest;
use crate::session::Session;
use crate::shared::segment;

const ORDERS_ENDPOINT: &str = "api/securityorders";

/// Sub-client for order operations.
pub struct Orders<'a> {
    pub(crate) session: &'a dyn Session,
}

impl<'a> Orders<'a> {
    pub fn get(&self, order_id: &str) -> Result<Order> {
        let endpoint = format!("{}/{}", ORDERS_ENDPOINT, segment(order_id));
        self.session.request(ApiRequest::get(endpoint))?.json()
    }

    /// Re-fetch an order to pick up fills and state changes.
    pub fn refresh(&self, order: &Order) -> Result<Order> {
        self.get(&order.id)
    }

    /// Place (or with `check_only`, validate) an order.
    ///
    /// Statuses >= 400 are classified like any other request. A non-error
    /// status other than 200/201 surfaces as [`AlphaTraderError::Order`]
    /// carrying the server's check result when one was returned.
    pub fn create(&self, order: &NewOrder) -> Result<Order> {
        let mut request = ApiRequest::post(ORDERS_ENDPOINT);
        for (key, value) in order.form() {
            request = request.form(key, value);
        }

        let resp = self.session.request(request)?;
        if resp.status != 200 && resp.status != 201 {
            let parsed = resp.json_value();
            let message = error_message(&resp, parsed.as_ref());
            tracing::error!(status = resp.status, message = %message, "Order creation failed");
            return Err(AlphaTraderError::Order {
                message: format!("Order creation failed: {}", message),
                check_result: parsed.as_ref().and_then(check_result_of).map(Box::new),
            });
        }

        let created: Order = resp.json()?;
        tracing::info!(order = %created, id = %created.id, "Order created");
        Ok(created)
    }

    /// Delete an order. Returns `true` when the backend answered 200.
    pub fn delete(&self, order_id: &str) -> Result<bool> {
        let endpoint = format!("{}/{}", ORDERS_ENDPOINT, segment(order_id));
        let resp = self.session.request(ApiRequest::delete(endpoint))?;
        Ok(resp.status == 200)
    }
}

/// Check result from a rejection body: either under `checkResult` or the body itself.
fn check_result_of(body: &Value) -> Option<OrderCheckResult> {
    body.get("checkResult")
        .and_then(|v| serde_json::from_value(v.clone()).ok())
        .or_else(|| serde_json::from_value(body.clone()).ok())
}
