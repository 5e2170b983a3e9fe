//! Unified application error model.
//! This module provides a common error enum used across the client layers
//! (REST client, session stores, local storage) so callers branch on one
//! kind instead of reading nested fields off raw transport exceptions.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppError {
    UserInput { code: String, message: String },
    Auth { code: String, message: String },
    NotFound { code: String, message: String },
    Network { code: String, message: String },
    Backend { code: String, message: String },
    Storage { code: String, message: String },
    Internal { code: String, message: String },
}

impl AppError {
    pub fn code_str(&self) -> &str {
        match self {
            AppError::UserInput { code, .. }
            | AppError::Auth { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Network { code, .. }
            | AppError::Backend { code, .. }
            | AppError::Storage { code, .. }
            | AppError::Internal { code, .. } => code.as_str(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::UserInput { message, .. }
            | AppError::Auth { message, .. }
            | AppError::NotFound { message, .. }
            | AppError::Network { message, .. }
            | AppError::Backend { message, .. }
            | AppError::Storage { message, .. }
            | AppError::Internal { message, .. } => message.as_str(),
        }
    }

    pub fn user<S: Into<String>>(code: S, msg: S) -> Self { AppError::UserInput { code: code.into(), message: msg.into() } }
    pub fn auth<S: Into<String>>(code: S, msg: S) -> Self { AppError::Auth { code: code.into(), message: msg.into() } }
    pub fn not_found<S: Into<String>>(code: S, msg: S) -> Self { AppError::NotFound { code: code.into(), message: msg.into() } }
    pub fn network<S: Into<String>>(code: S, msg: S) -> Self { AppError::Network { code: code.into(), message: msg.into() } }
    pub fn backend<S: Into<String>>(code: S, msg: S) -> Self { AppError::Backend { code: code.into(), message: msg.into() } }
    pub fn storage<S: Into<String>>(code: S, msg: S) -> Self { AppError::Storage { code: code.into(), message: msg.into() } }
    pub fn internal<S: Into<String>>(code: S, msg: S) -> Self { AppError::Internal { code: code.into(), message: msg.into() } }

    /// True for failures a poll loop should swallow and retry on the next tick.
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Network { .. } | AppError::Backend { .. })
    }

    /// Map a backend HTTP status plus message into the matching kind.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            400 | 422 => AppError::UserInput { code: "bad_request".into(), message },
            401 | 403 => AppError::Auth { code: "unauthorized".into(), message },
            404 => AppError::NotFound { code: "not_found".into(), message },
            500..=599 => AppError::Backend { code: format!("http_{}", status), message },
            _ => AppError::Backend { code: format!("http_{}", status), message },
        }
    }
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code_str(), self.message())
    }
}

impl std::error::Error for AppError {}

pub type AppResult<T> = Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return AppError::Network { code: "timeout".into(), message: err.to_string() };
        }
        if err.is_connect() {
            return AppError::Network { code: "connect_failed".into(), message: err.to_string() };
        }
        AppError::Network { code: "request_failed".into(), message: err.to_string() }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Backend { code: "bad_envelope".into(), message: err.to_string() }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage { code: "io_error".into(), message: err.to_string() }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal { code: "internal_error".into(), message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping() {
        assert!(matches!(AppError::from_status(400, "x".into()), AppError::UserInput { .. }));
        assert!(matches!(AppError::from_status(401, "x".into()), AppError::Auth { .. }));
        assert!(matches!(AppError::from_status(403, "x".into()), AppError::Auth { .. }));
        assert!(matches!(AppError::from_status(404, "x".into()), AppError::NotFound { .. }));
        assert!(matches!(AppError::from_status(503, "x".into()), AppError::Backend { .. }));
    }

    #[test]
    fn transient_kinds() {
        assert!(AppError::network("connect_failed", "down").is_transient());
        assert!(AppError::from_status(500, "boom".into()).is_transient());
        assert!(!AppError::auth("unauthorized", "no").is_transient());
        assert!(!AppError::user("bad_input", "oops").is_transient());
    }

    #[test]
    fn display_includes_code_and_message() {
        let e = AppError::auth("unauthorized", "token rejected");
        assert_eq!(e.to_string(), "unauthorized: token rejected");
        assert_eq!(e.code_str(), "unauthorized");
        assert_eq!(e.message(), "token rejected");
    }
}
