//! Runtime configuration for the client core.
//!
//! Everything is env-var driven with hard defaults so the library works out
//! of the box against a local backend. The canonical API base is port 5001;
//! `RAILBITE_API_BASE` overrides it.

use serde::{Deserialize, Serialize};

const DEFAULT_API_BASE: &str = "http://localhost:5001/api";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Base URL of the backend REST API, including the `/api` path segment.
    api_base: Option<String>,
}

impl AppConfig {
    /// Build a config from the process environment.
    pub fn from_env() -> Self {
        Self { api_base: std::env::var("RAILBITE_API_BASE").ok() }
    }

    /// Build a config with an explicit base URL (tests, embedding hosts).
    pub fn with_api_base<S: Into<String>>(base: S) -> Self {
        Self { api_base: Some(base.into()) }
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    /// Origin serving uploaded assets, derived by stripping the API path.
    /// Relative `/uploads/...` image paths from the backend are resolved
    /// against this.
    pub fn assets_base(&self) -> String {
        let base = self.api_base();
        match reqwest::Url::parse(base) {
            Ok(url) => {
                let mut origin = format!("{}://{}", url.scheme(), url.host_str().unwrap_or("localhost"));
                if let Some(port) = url.port() {
                    origin.push_str(&format!(":{}", port));
                }
                origin
            }
            Err(_) => base.trim_end_matches("/api").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_is_canonical_port() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_base(), "http://localhost:5001/api");
        assert_eq!(cfg.assets_base(), "http://localhost:5001");
    }

    #[test]
    fn explicit_base_overrides_default() {
        let cfg = AppConfig::with_api_base("https://api.railbite.example/api");
        assert_eq!(cfg.api_base(), "https://api.railbite.example/api");
        assert_eq!(cfg.assets_base(), "https://api.railbite.example");
    }
}
