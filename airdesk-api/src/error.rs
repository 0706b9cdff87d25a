use serde::{Deserialize, Serialize};

/// Unified error type for every REST call made by the resource services.
///
/// Each variant carries the `resource` collection that produced it (`flights`,
/// `users`, ...) plus variant-specific context. Variants are serializable so a
/// front end can forward them as structured data.
///
/// Transport failures ([`NetworkError`](Self::NetworkError),
/// [`Timeout`](Self::Timeout)) and server rejections
/// ([`HttpStatus`](Self::HttpStatus)) are reported as-is. Nothing in this crate
/// retries or reinterprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection refused, etc.).
    NetworkError {
        /// Resource collection the request targeted.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    Timeout {
        /// Resource collection the request targeted.
        resource: String,
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx status.
    HttpStatus {
        /// Resource collection the request targeted.
        resource: String,
        /// HTTP status code.
        status: u16,
        /// Response body, if the server sent one.
        body: Option<String>,
    },

    /// Failed to parse the server's response.
    ParseError {
        /// Resource collection the request targeted.
        resource: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// Failed to serialize a request body.
    SerializationError {
        /// Resource collection the request targeted.
        resource: String,
        /// Details about the serialization failure.
        detail: String,
    },

    /// The client configuration is unusable (bad base URL, zero timeout, ...).
    InvalidConfig {
        /// Name of the offending setting.
        field: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl ApiError {
    /// Whether the failure is the server rejecting the request (4xx), used for log levels.
    ///
    /// Returns `true` when `warn` is appropriate, `false` for `error`.
    /// **Update this method whenever a variant is added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::HttpStatus { status, .. } if (400..500).contains(status))
    }

    /// HTTP status code, when the server answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { resource, detail } => {
                write!(f, "[{resource}] Network error: {detail}")
            }
            Self::Timeout { resource, detail } => {
                write!(f, "[{resource}] Request timeout: {detail}")
            }
            Self::HttpStatus {
                resource,
                status,
                body,
            } => match body {
                Some(body) if !body.is_empty() => {
                    write!(f, "[{resource}] HTTP {status}: {body}")
                }
                _ => write!(f, "[{resource}] HTTP {status}"),
            },
            Self::ParseError { resource, detail } => {
                write!(f, "[{resource}] Parse error: {detail}")
            }
            Self::SerializationError { resource, detail } => {
                write!(f, "[{resource}] Serialization error: {detail}")
            }
            Self::InvalidConfig { field, detail } => {
                write!(f, "Invalid configuration '{field}': {detail}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
