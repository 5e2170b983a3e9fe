//! Notifications endpoint group. The unread count is the value the header
//! badge polls for.

use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient, Envelope};
use crate::error::AppResult;
use crate::storage::Notification;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnreadCount {
    pub count: u64,
}

impl ApiClient {
    pub async fn notifications(&self, token: &str) -> AppResult<Envelope<Vec<Notification>>> {
        self.get_json("notifications", Some(token)).await
    }

    pub async fn unread_count(&self, token: &str) -> AppResult<Envelope<UnreadCount>> {
        self.get_json("notifications/unread-count", Some(token)).await
    }

    pub async fn mark_notification_read(&self, notification_id: &str, token: &str) -> AppResult<Ack> {
        self.put_json(&format!("notifications/{}/read", notification_id), &serde_json::json!({}), Some(token)).await
    }

    pub async fn mark_all_notifications_read(&self, token: &str) -> AppResult<Ack> {
        self.put_json("notifications/read-all", &serde_json::json!({}), Some(token)).await
    }
}
