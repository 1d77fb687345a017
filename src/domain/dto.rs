//! Output envelopes for machine-readable output.

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Standard response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Response code (0 = success, non-zero = error).
    pub code: i32,

    /// Human-readable message.
    pub message: String,

    /// Response data (null on error).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a success response.
    pub fn success(data: T) -> Self {
        Self {
            code: ErrorCode::OK.as_i32(),
            message: "success".to_string(),
            data: Some(data),
        }
    }
}

/// A batch of generated tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Generated tokens, in generation order.
    pub tokens: Vec<String>,
}

impl TokenResponse {
    /// Create a new token response.
    #[must_use]
    pub const fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }
}
