//! Delivery-staff endpoint group: the admin's staff roster and the staff
//! portal's own assigned-order workflow.

use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient, Envelope};
use super::orders::Order;
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(default, rename = "activeOrders")]
    pub active_orders: u32,
}

impl ApiClient {
    /// Staff roster, used by the admin assignment screen.
    pub async fn delivery_staff(&self, token: &str) -> AppResult<Envelope<Vec<StaffMember>>> {
        self.get_json("delivery/staff", Some(token)).await
    }

    /// Orders currently assigned to the authenticated staff member. The
    /// delivery portal polls this.
    pub async fn assigned_orders(&self, token: &str) -> AppResult<Envelope<Vec<Order>>> {
        self.get_json("delivery/orders", Some(token)).await
    }

    pub async fn update_delivery_status(&self, order_id: &str, status: &str, token: &str) -> AppResult<Ack> {
        self.put_json(
            &format!("delivery/orders/{}/status", order_id),
            &serde_json::json!({ "status": status }),
            Some(token),
        )
        .await
    }

    pub async fn set_availability(&self, available: bool, token: &str) -> AppResult<Ack> {
        self.put_json("delivery/availability", &serde_json::json!({ "available": available }), Some(token)).await
    }
}
