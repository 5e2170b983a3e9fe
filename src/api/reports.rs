//! Reporting endpoint group (admin portal).

use serde::{Deserialize, Serialize};

use super::client::{ApiClient, Envelope};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    #[serde(rename = "totalOrders")]
    pub total_orders: u64,
    #[serde(rename = "totalRevenue")]
    pub total_revenue: f64,
    #[serde(default, rename = "ordersByStatus")]
    pub orders_by_status: std::collections::HashMap<String, u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopularItem {
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub name: String,
    #[serde(rename = "orderCount")]
    pub order_count: u64,
}

impl ApiClient {
    pub async fn sales_summary(&self, token: &str) -> AppResult<Envelope<SalesSummary>> {
        self.get_json("reports/sales", Some(token)).await
    }

    pub async fn popular_items(&self, token: &str) -> AppResult<Envelope<Vec<PopularItem>>> {
        self.get_json("reports/popular-items", Some(token)).await
    }
}
