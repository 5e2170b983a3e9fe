use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::storage::{keys, LocalStore};

/// Generic response envelope the backend wraps list/detail payloads in.
/// Returned to callers unchanged; `success == false` with a 2xx status is a
/// backend-level refusal the page decides how to surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

/// Bare acknowledgement envelope for mutations that return no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// Error body shape the backend uses on non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    assets_base: String,
    client: reqwest::Client,
    store: LocalStore,
}

impl ApiClient {
    pub fn new(config: &AppConfig, store: LocalStore) -> Self {
        Self {
            base: config.api_base().trim_end_matches('/').to_string(),
            assets_base: config.assets_base(),
            client: reqwest::Client::new(),
            store,
        }
    }

    /// Resolve the bearer token from persisted storage, trying each portal's
    /// key in fixed precedence order: customer, then admin, then delivery.
    pub fn bearer_token(&self) -> Option<String> {
        for key in [keys::CUSTOMER_TOKEN, keys::ADMIN_TOKEN, keys::DELIVERY_TOKEN] {
            if let Some(token) = self.store.get::<String>(key) {
                return Some(token);
            }
        }
        None
    }

    /// Resolve a relative `/uploads/...` path against the backend origin.
    /// Absolute URLs pass through untouched.
    pub fn absolute_asset_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            return url.to_string();
        }
        if url.starts_with('/') {
            format!("{}{}", self.assets_base, url)
        } else {
            format!("{}/{}", self.assets_base, url)
        }
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        Url::parse(&format!("{}/{}", self.base, path.trim_start_matches('/')))
            .map_err(|e| AppError::internal("bad_url".to_string(), e.to_string()))
    }

    // Shared request path: attach bearer (explicit token wins over the
    // persisted-precedence lookup), send, then decode 2xx bodies into the
    // expected envelope and non-2xx bodies into an AppError.
    pub(crate) async fn request<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> AppResult<T> {
        let url = self.endpoint(path)?;
        let mut headers = HeaderMap::new();
        let bearer = token.map(|t| t.to_string()).or_else(|| self.bearer_token());
        if let Some(t) = bearer {
            let value = HeaderValue::from_str(&format!("Bearer {}", t))
                .map_err(|e| AppError::internal("bad_token".to_string(), e.to_string()))?;
            headers.insert(AUTHORIZATION, value);
        }
        debug!(target: "railbite::api", "{} {}", method, path);
        let mut req = self.client.request(method, url).headers(headers);
        if let Some(b) = body {
            req = req.json(b);
        }
        let resp = req.send().await?;
        let status = resp.status();
        if !status.is_success() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("request failed with HTTP {}", status.as_u16()));
            return Err(AppError::from_status(status.as_u16(), message));
        }
        Ok(resp.json::<T>().await?)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> AppResult<T> {
        self.request::<(), T>(Method::GET, path, None, token).await
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> AppResult<T> {
        self.request(Method::POST, path, Some(body), token).await
    }

    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> AppResult<T> {
        self.request(Method::PUT, path, Some(body), token).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str, token: Option<&str>) -> AppResult<T> {
        self.request::<(), T>(Method::DELETE, path, None, token).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn client_with_store() -> (ApiClient, LocalStore, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let store = LocalStore::open(tmp.path()).unwrap();
        let client = ApiClient::new(&AppConfig::default(), store.clone());
        (client, store, tmp)
    }

    #[test]
    fn token_precedence_customer_first() {
        let (client, store, _tmp) = client_with_store();
        assert_eq!(client.bearer_token(), None);
        store.set(keys::DELIVERY_TOKEN, &"tok-delivery".to_string());
        assert_eq!(client.bearer_token().as_deref(), Some("tok-delivery"));
        store.set(keys::ADMIN_TOKEN, &"tok-admin".to_string());
        assert_eq!(client.bearer_token().as_deref(), Some("tok-admin"));
        store.set(keys::CUSTOMER_TOKEN, &"tok-customer".to_string());
        assert_eq!(client.bearer_token().as_deref(), Some("tok-customer"));
    }

    #[test]
    fn asset_urls_resolve_against_backend_origin() {
        let (client, _store, _tmp) = client_with_store();
        assert_eq!(client.absolute_asset_url("/uploads/thali.jpg"), "http://localhost:5001/uploads/thali.jpg");
        assert_eq!(client.absolute_asset_url("uploads/thali.jpg"), "http://localhost:5001/uploads/thali.jpg");
        assert_eq!(
            client.absolute_asset_url("https://cdn.example.com/thali.jpg"),
            "https://cdn.example.com/thali.jpg"
        );
    }
}
