//! Error handling module.
//!
//! Every failure is raised before any character is sampled, so a caller never
//! observes a partial token.

pub mod codes;

use serde_json::{Value, json};

pub use codes::ErrorCode;

use crate::domain::SeedKind;

/// Token generation error type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    /// An option value, or a combination of options, is not supported.
    #[error("Invalid Parameters: {parameter}. {message}")]
    InvalidParameter {
        /// Name of the offending option.
        parameter: &'static str,
        /// Human-readable reason.
        message: String,
    },

    /// Friendly and custom exclusions left nothing to sample from.
    #[error("No characters left to sample from the {seed_kind} seeds after applying exclusions")]
    EmptyUniverse {
        /// Seed kind whose universe was emptied.
        seed_kind: SeedKind,
    },

    /// Batch size out of range.
    #[error("Invalid count: {0}")]
    InvalidCount(String),
}

impl TokenError {
    /// Shorthand for [`TokenError::InvalidParameter`].
    pub fn invalid_parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            message: message.into(),
        }
    }

    /// Name of the option this error blames, if any.
    #[must_use]
    pub const fn parameter(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { parameter, .. } => Some(*parameter),
            Self::EmptyUniverse { .. } => Some("mask"),
            Self::InvalidCount(_) => Some("count"),
        }
    }

    /// Get the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidParameter { .. } => ErrorCode::INVALID_PARAM,
            Self::EmptyUniverse { .. } => ErrorCode::EMPTY_UNIVERSE,
            Self::InvalidCount(_) => ErrorCode::INVALID_COUNT,
        }
    }

    /// Render the error as a `{code, message, data}` envelope.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let code = self.error_code().as_i32();
        let message = self.to_string();

        tracing::error!(error_code = code, message = %message, "Token generation failed");

        json!({
            "code": code,
            "message": message,
            "data": null
        })
    }
}

/// Result type alias using `TokenError`.
pub type Result<T> = std::result::Result<T, TokenError>;
