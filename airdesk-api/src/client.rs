//! REST client shared by every resource service

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::http_client::HttpUtils;
use crate::utils::log_sanitizer::sanitize_body;

/// Thin wrapper around a `reqwest::Client` bound to one back-office API.
///
/// Attaches the bearer token (when configured) to every request and maps
/// every outcome to [`Result<T, ApiError>`](crate::Result). One method call is
/// one HTTP request.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("authenticated", &self.bearer_token.is_some())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Build a client from validated settings.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ApiError::InvalidConfig {
                field: "http_client".to_string(),
                detail: e.to_string(),
            })?;

        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path such as `/flights?page=0`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let builder = self.http.request(method, url);
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    fn to_body<B>(resource: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        serde_json::to_value(body).map_err(|e| ApiError::SerializationError {
            resource: resource.to_string(),
            detail: e.to_string(),
        })
    }

    /// Send one request and return the 2xx body text.
    async fn send(
        &self,
        resource: &str,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<String> {
        let url = self.url(path);
        let mut builder = self.request(method.clone(), &url);
        if let Some(body) = body {
            log::debug!("[{resource}] Request Body: {}", sanitize_body(&body));
            builder = builder.json(&body);
        }

        let (status, text) =
            HttpUtils::execute_request(builder, resource, method.as_str(), &url).await?;
        HttpUtils::ensure_success(status, text, resource)
    }

    /// `GET` a path and parse the JSON body.
    pub async fn get_json<T>(&self, resource: &str, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = self.send(resource, Method::GET, path, None).await?;
        HttpUtils::parse_json(&text, resource)
    }

    /// `POST` a JSON body; the answer may be a JSON document or empty.
    pub async fn post_json<B, T>(&self, resource: &str, path: &str, body: &B) -> Result<Option<T>>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::to_body(resource, body)?;
        let text = self.send(resource, Method::POST, path, Some(body)).await?;
        HttpUtils::parse_optional_json(&text, resource)
    }

    /// Send a JSON body with `method` and ignore whatever the server answers on 2xx.
    pub async fn send_json<B>(&self, resource: &str, method: Method, path: &str, body: &B) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let body = Self::to_body(resource, body)?;
        self.send(resource, method, path, Some(body)).await?;
        Ok(())
    }

    /// `DELETE` a path.
    pub async fn delete(&self, resource: &str, path: &str) -> Result<()> {
        self.send(resource, Method::DELETE, path, None).await?;
        Ok(())
    }
}
