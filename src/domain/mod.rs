//! Domain models for token generation.
//!
//! This module contains the option types callers fill in, the closed seed
//! classification, the validated request, and output envelopes.

pub mod dto;
pub mod options;
pub mod request;
pub mod seed;

pub use dto::{ApiResponse, TokenResponse};
pub use options::{Casing, DEFAULT_TOKEN_SIZE, TokenOptions};
pub use request::GenerationRequest;
pub use seed::{SeedKind, SeedValue};
