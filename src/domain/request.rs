//! Resolved generation request.

use super::options::{Casing, TokenOptions};
use super::seed::SeedKind;
use crate::error::Result;
use crate::service::validator;

/// Validated, option-consistent configuration for one generation call.
///
/// Only constructible through [`GenerationRequest::try_from_options`], so
/// holding one means the option combination has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    seed_kind: SeedKind,
    casing: Option<Casing>,
    friendly: bool,
    mask: Option<String>,
}

impl GenerationRequest {
    /// Classify the seed and validate the options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TokenError::InvalidParameter`] naming the offending
    /// option when the combination is not supported.
    pub fn try_from_options(options: &TokenOptions) -> Result<Self> {
        let request = Self {
            length: options.effective_length(),
            seed_kind: SeedKind::resolve(options.seed.as_ref()),
            casing: options.casing,
            friendly: options.friendly.unwrap_or(false),
            mask: options.mask.clone(),
        };
        validator::validate(&request)?;
        Ok(request)
    }

    /// Number of characters to produce.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Classified seed.
    #[must_use]
    pub const fn seed_kind(&self) -> &SeedKind {
        &self.seed_kind
    }

    /// Requested casing, `None` when unspecified.
    #[must_use]
    pub const fn casing(&self) -> Option<Casing> {
        self.casing
    }

    /// Whether the friendly mask applies.
    #[must_use]
    pub const fn friendly(&self) -> bool {
        self.friendly
    }

    /// Additional excluded characters.
    #[must_use]
    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }
}
