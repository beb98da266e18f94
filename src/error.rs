//! Unified error types for the balance engine
//!
//! All errors flow through this module for consistent handling
//! and serializable reporting to embedding hosts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Main error type for all balance-engine operations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<String>,
}

impl BalanceError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    // Convenience constructors
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, msg)
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Configuration, msg)
    }

    pub fn network_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::NetworkError, msg)
    }

    pub fn decode_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::DecodeError, msg)
    }

    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::RateLimited, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, msg)
    }
}

impl fmt::Display for BalanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for BalanceError {}

/// Error codes for categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    // Input errors
    InvalidInput,
    InvalidAddress,
    Configuration,

    // Network errors
    NetworkError,
    RateLimited,
    Timeout,

    // Payload errors
    DecodeError,
    JsonError,

    // Internal
    Internal,
}

/// Result type alias for balance-engine operations
pub type BalanceResult<T> = Result<T, BalanceError>;

// Conversions from common error types

impl From<serde_json::Error> for BalanceError {
    fn from(e: serde_json::Error) -> Self {
        BalanceError::new(ErrorCode::JsonError, e.to_string())
    }
}

impl From<url::ParseError> for BalanceError {
    fn from(e: url::ParseError) -> Self {
        BalanceError::new(ErrorCode::Configuration, e.to_string())
    }
}

impl From<reqwest::Error> for BalanceError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            BalanceError::new(ErrorCode::Timeout, "Request timed out")
        } else if e.is_connect() {
            BalanceError::new(ErrorCode::NetworkError, "Connection failed")
        } else {
            BalanceError::new(ErrorCode::NetworkError, e.to_string())
        }
    }
}

impl From<crate::api::DecodeError> for BalanceError {
    fn from(e: crate::api::DecodeError) -> Self {
        BalanceError::new(ErrorCode::DecodeError, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = BalanceError::network_error("Service unreachable")
            .with_details("status 503");

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("network_error"));
        assert!(json.contains("Service unreachable"));
    }

    #[test]
    fn test_display_includes_details() {
        let err = BalanceError::configuration("Invalid base URL").with_details("not-a-url");
        let rendered = err.to_string();
        assert!(rendered.contains("Configuration"));
        assert!(rendered.contains("not-a-url"));
    }
}
