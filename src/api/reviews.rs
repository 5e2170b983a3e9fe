//! Review endpoint group: customers review delivered orders' items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient, Envelope};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    #[serde(rename = "itemId")]
    pub item_id: String,
    pub rating: u8,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, rename = "authorName")]
    pub author_name: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    pub async fn create_review(
        &self,
        item_id: &str,
        rating: u8,
        comment: Option<&str>,
        token: &str,
    ) -> AppResult<Envelope<Review>> {
        self.post_json(
            "reviews",
            &serde_json::json!({ "itemId": item_id, "rating": rating, "comment": comment }),
            Some(token),
        )
        .await
    }

    pub async fn reviews_for_item(&self, item_id: &str) -> AppResult<Envelope<Vec<Review>>> {
        self.get_json(&format!("reviews/item/{}", item_id), None).await
    }

    pub async fn my_reviews(&self, token: &str) -> AppResult<Envelope<Vec<Review>>> {
        self.get_json("reviews/my", Some(token)).await
    }

    pub async fn delete_review(&self, review_id: &str, token: &str) -> AppResult<Ack> {
        self.delete_json(&format!("reviews/{}", review_id), Some(token)).await
    }
}
