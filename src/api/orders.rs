//! Orders endpoint group: customer checkout and history, admin oversight,
//! and the status updates the delivery portal drives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient, Envelope};
use crate::error::AppResult;
use crate::storage::BookingDetails;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
}

/// Flat order record consumed and displayed as-is; the backend owns all
/// status transition rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
    pub status: String,
    pub total: f64,
    #[serde(default, rename = "orderType")]
    pub order_type: Option<String>,
    #[serde(default)]
    pub booking: Option<BookingDetails>,
    #[serde(default, rename = "assignedStaff")]
    pub assigned_staff: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaceOrderRequest {
    pub items: Vec<OrderLine>,
    #[serde(rename = "orderType")]
    pub order_type: String,
    pub booking: BookingDetails,
    #[serde(rename = "paymentMethod")]
    pub payment_method: String,
}

impl ApiClient {
    pub async fn place_order(&self, req: &PlaceOrderRequest, token: &str) -> AppResult<Envelope<Order>> {
        self.post_json("orders", req, Some(token)).await
    }

    pub async fn my_orders(&self, token: &str) -> AppResult<Envelope<Vec<Order>>> {
        self.get_json("orders/my", Some(token)).await
    }

    pub async fn order(&self, order_id: &str, token: &str) -> AppResult<Envelope<Order>> {
        self.get_json(&format!("orders/{}", order_id), Some(token)).await
    }

    pub async fn cancel_order(&self, order_id: &str, token: &str) -> AppResult<Ack> {
        self.put_json(&format!("orders/{}/cancel", order_id), &serde_json::json!({}), Some(token)).await
    }

    /// Current status only; the tracking page polls this.
    pub async fn track_order(&self, order_id: &str, token: &str) -> AppResult<Envelope<Order>> {
        self.get_json(&format!("orders/{}/track", order_id), Some(token)).await
    }

    // Admin surface.

    pub async fn all_orders(&self, token: &str) -> AppResult<Envelope<Vec<Order>>> {
        self.get_json("orders", Some(token)).await
    }

    pub async fn update_order_status(&self, order_id: &str, status: &str, token: &str) -> AppResult<Ack> {
        self.put_json(
            &format!("orders/{}/status", order_id),
            &serde_json::json!({ "status": status }),
            Some(token),
        )
        .await
    }

    pub async fn assign_staff(&self, order_id: &str, staff_id: &str, token: &str) -> AppResult<Ack> {
        self.put_json(
            &format!("orders/{}/assign", order_id),
            &serde_json::json!({ "staffId": staff_id }),
            Some(token),
        )
        .await
    }
}
