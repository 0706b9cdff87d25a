//! Generic HTTP helpers
//!
//! Shared request/response handling for every resource service.
//! `ApiClient` builds the `RequestBuilder`; this module sends it, logs it and
//! turns the response into either a body or an [`ApiError`].
//!
//! No retries: each service call is exactly one network request and its
//! failure is handed back unchanged.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::ApiError;
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub struct HttpUtils;

impl HttpUtils {
    /// Performs an HTTP request and returns the status code and response text
    ///
    /// # Arguments
    /// * `request_builder` - configured request (URL, headers, body)
    /// * `resource` - resource collection name (for logging and errors)
    /// * `method_name` - request method name (for logging)
    /// * `url` - full URL (for logging)
    ///
    /// # Returns
    /// * `Ok((status_code, response_text))` for any HTTP answer, 2xx or not
    /// * `Err(ApiError::Timeout | ApiError::NetworkError)` when no answer arrived
    pub async fn execute_request(
        request_builder: RequestBuilder,
        resource: &str,
        method_name: &str,
        url: &str,
    ) -> Result<(u16, String), ApiError> {
        log::debug!("[{resource}] {method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            } else {
                ApiError::NetworkError {
                    resource: resource.to_string(),
                    detail: e.to_string(),
                }
            }
        })?;

        let status_code = response.status().as_u16();
        log::debug!("[{resource}] Response Status: {status_code}");

        let response_text = response.text().await.map_err(|e| ApiError::NetworkError {
            resource: resource.to_string(),
            detail: format!("Failed to read response body: {e}"),
        })?;

        log::debug!(
            "[{resource}] Response Body: {}",
            truncate_for_log(&response_text)
        );

        Ok((status_code, response_text))
    }

    /// Map a non-2xx answer to [`ApiError::HttpStatus`], passing 2xx bodies through.
    pub fn ensure_success(
        status_code: u16,
        response_text: String,
        resource: &str,
    ) -> Result<String, ApiError> {
        if (200..300).contains(&status_code) {
            return Ok(response_text);
        }

        let err = ApiError::HttpStatus {
            resource: resource.to_string(),
            status: status_code,
            body: (!response_text.trim().is_empty()).then(|| truncate_for_log(&response_text)),
        };
        if err.is_expected() {
            log::warn!("[{resource}] Request rejected: {err}");
        } else {
            log::error!("[{resource}] Request failed: {err}");
        }
        Err(err)
    }

    /// Parse JSON response
    ///
    /// # Returns
    /// * `Ok(T)` - successfully parsed
    /// * `Err(ApiError::ParseError)` - parsing failed
    pub fn parse_json<T>(response_text: &str, resource: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("[{resource}] JSON parse failed: {e}");
            log::error!(
                "[{resource}] Raw response: {}",
                truncate_for_log(response_text)
            );
            ApiError::ParseError {
                resource: resource.to_string(),
                detail: e.to_string(),
            }
        })
    }

    /// Parse a JSON response that the server may legitimately leave empty.
    ///
    /// An empty or whitespace-only body yields `Ok(None)`.
    pub fn parse_optional_json<T>(response_text: &str, resource: &str) -> Result<Option<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        if response_text.trim().is_empty() {
            return Ok(None);
        }
        Self::parse_json(response_text, resource).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Foo {
        x: i32,
    }

    // ---- ensure_success ----

    #[test]
    fn success_passes_body_through() {
        let body = HttpUtils::ensure_success(201, "{}".to_string(), "flights");
        assert_eq!(body, Ok("{}".to_string()));
    }

    #[test]
    fn client_error_maps_to_http_status() {
        let result = HttpUtils::ensure_success(404, "not here".to_string(), "users");
        assert_eq!(
            result,
            Err(ApiError::HttpStatus {
                resource: "users".into(),
                status: 404,
                body: Some("not here".into()),
            })
        );
    }

    #[test]
    fn server_error_without_body() {
        let result = HttpUtils::ensure_success(500, "  ".to_string(), "users");
        assert!(
            matches!(&result, Err(ApiError::HttpStatus { status: 500, body: None, .. })),
            "unexpected result: {result:?}"
        );
    }

    #[test]
    fn redirect_is_not_success() {
        let result = HttpUtils::ensure_success(302, String::new(), "flights");
        assert!(result.is_err());
    }

    // ---- parse_json ----

    #[test]
    fn parse_json_valid() {
        let result: Result<Foo, ApiError> = HttpUtils::parse_json(r#"{"x":42}"#, "test");
        assert!(
            matches!(&result, Ok(Foo { x: 42 })),
            "unexpected parse result: {result:?}"
        );
    }

    #[test]
    fn parse_json_invalid() {
        let result: Result<Foo, ApiError> = HttpUtils::parse_json("not json", "test");
        assert!(
            matches!(&result, Err(ApiError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }

    // ---- parse_optional_json ----

    #[test]
    fn optional_empty_body_is_none() {
        let result: Result<Option<Foo>, ApiError> = HttpUtils::parse_optional_json("", "test");
        assert_eq!(result, Ok(None));
    }

    #[test]
    fn optional_body_is_parsed() {
        let result: Result<Option<Foo>, ApiError> =
            HttpUtils::parse_optional_json(r#"{"x":7}"#, "test");
        assert_eq!(result, Ok(Some(Foo { x: 7 })));
    }
}
