//! Client configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, Result};

/// Default back-office API location.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Default transport timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`ApiClient`](crate::ApiClient).
///
/// # Default
///
/// `http://localhost:8080`, 30 second timeout, no bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Root URL the resource paths are appended to.
    pub base_url: String,
    /// Transport timeout for a single request.
    pub timeout_secs: u64,
    /// Session token sent as `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,
    /// `User-Agent` header value.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            bearer_token: None,
            user_agent: concat!("airdesk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ApiConfig {
    /// Config pointing at `base_url` with every other setting defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Check the settings before a client is built from them.
    pub fn validate(&self) -> Result<()> {
        let url = reqwest::Url::parse(&self.base_url).map_err(|e| ApiError::InvalidConfig {
            field: "base_url".to_string(),
            detail: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig {
                field: "base_url".to_string(),
                detail: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::InvalidConfig {
                field: "timeout_secs".to_string(),
                detail: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for `/{resource}` paths.
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
