//! Contact-form endpoint group: public submission, admin listing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient, Envelope};
use crate::error::AppResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    pub async fn submit_contact(&self, name: &str, email: &str, message: &str) -> AppResult<Ack> {
        self.post_json(
            "contact",
            &serde_json::json!({ "name": name, "email": email, "message": message }),
            None,
        )
        .await
    }

    pub async fn contact_messages(&self, token: &str) -> AppResult<Envelope<Vec<ContactMessage>>> {
        self.get_json("contact", Some(token)).await
    }
}
