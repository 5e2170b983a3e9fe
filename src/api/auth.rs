//! Auth endpoint group: login, register, current-user lookup and the
//! password-reset pair.

use serde::{Deserialize, Serialize};

use super::client::{Ack, ApiClient};
use crate::error::AppResult;
use crate::identity::{Principal, Role};

/// Envelope returned by login and register: token and user arrive at the top
/// level, not under `data`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthEnvelope {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<Principal>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    password: &'a str,
    role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForgotPasswordResponse {
    pub success: bool,
    #[serde(default, rename = "resetToken")]
    pub reset_token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeEnvelope {
    #[allow(dead_code)]
    success: bool,
    user: Principal,
}

impl ApiClient {
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthEnvelope> {
        self.post_json("auth/login", &LoginRequest { email, password }, None).await
    }

    pub async fn register(
        &self,
        name: &str,
        email: &str,
        phone: &str,
        password: &str,
        role: Role,
    ) -> AppResult<AuthEnvelope> {
        self.post_json("auth/register", &RegisterRequest { name, email, phone, password, role }, None).await
    }

    /// Fetch the principal the given bearer token belongs to.
    pub async fn me(&self, token: &str) -> AppResult<Principal> {
        let envelope: MeEnvelope = self.get_json("auth/me", Some(token)).await?;
        Ok(envelope.user)
    }

    pub async fn forgot_password(&self, email: &str) -> AppResult<ForgotPasswordResponse> {
        self.post_json("auth/forgot-password", &serde_json::json!({ "email": email }), None).await
    }

    pub async fn reset_password(&self, token: &str, new_password: &str) -> AppResult<Ack> {
        self.post_json(
            "auth/reset-password",
            &serde_json::json!({ "token": token, "newPassword": new_password }),
            None,
        )
        .await
    }
}
