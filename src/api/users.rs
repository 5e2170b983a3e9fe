//! User administration endpoint group (admin portal only).

use super::client::{Ack, ApiClient, Envelope};
use crate::error::AppResult;
use crate::identity::{Principal, Role};

impl ApiClient {
    pub async fn users(&self, token: &str) -> AppResult<Envelope<Vec<Principal>>> {
        self.get_json("users", Some(token)).await
    }

    pub async fn user(&self, user_id: &str, token: &str) -> AppResult<Envelope<Principal>> {
        self.get_json(&format!("users/{}", user_id), Some(token)).await
    }

    pub async fn update_user_role(&self, user_id: &str, role: Role, token: &str) -> AppResult<Ack> {
        self.put_json(&format!("users/{}/role", user_id), &serde_json::json!({ "role": role }), Some(token)).await
    }

    pub async fn delete_user(&self, user_id: &str, token: &str) -> AppResult<Ack> {
        self.delete_json(&format!("users/{}", user_id), Some(token)).await
    }
}
