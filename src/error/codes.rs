//! Error code constants.
//!
//! `0` is success; validation errors use the 3xxx range.

/// Numeric error code carried in JSON envelopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Success (used by response envelopes).
    pub const OK: Self = Self(0);

    // ===== Validation Errors (3xxx) =====

    /// Invalid batch size.
    pub const INVALID_COUNT: Self = Self(3001);

    /// Invalid option value or combination.
    pub const INVALID_PARAM: Self = Self(3003);

    /// Exclusions removed every candidate character.
    pub const EMPTY_UNIVERSE: Self = Self(3004);

    /// Get the error code as an i32.
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}
