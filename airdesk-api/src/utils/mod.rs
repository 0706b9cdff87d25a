//! Utility modules.

/// Log sanitization utilities to keep passwords and large payloads out of logs.
pub mod log_sanitizer;
