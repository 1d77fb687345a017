//! Caller-facing generation options.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::seed::SeedValue;
use crate::error::TokenError;

/// Token length used when none is given.
pub const DEFAULT_TOKEN_SIZE: usize = 16;

/// Case transform applied to a generated token.
///
/// An unspecified casing is `Option::<Casing>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Casing {
    /// Both cases, as drawn from the universe.
    #[serde(alias = "m")]
    Mixed,
    /// Uppercase the whole token.
    #[serde(alias = "u")]
    Upper,
    /// Lowercase the whole token.
    #[serde(alias = "l")]
    Lower,
}

impl std::fmt::Display for Casing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mixed => write!(f, "mixed"),
            Self::Upper => write!(f, "upper"),
            Self::Lower => write!(f, "lower"),
        }
    }
}

impl FromStr for Casing {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "m" | "mixed" => Ok(Self::Mixed),
            "u" | "upper" => Ok(Self::Upper),
            "l" | "lower" => Ok(Self::Lower),
            other => Err(TokenError::invalid_parameter(
                "casing",
                format!("Unknown casing '{other}', expected one of upper, lower, mixed."),
            )),
        }
    }
}

/// Options for a single generation call.
///
/// Every field is optional; see [`DEFAULT_TOKEN_SIZE`] for the default
/// length. An absent seed selects mixed-case letters and digits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenOptions {
    /// Number of characters to produce.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Character source selector.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<SeedValue>,

    /// Case transform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub casing: Option<Casing>,

    /// Exclude visually ambiguous characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friendly: Option<bool>,

    /// Additional characters to exclude.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
}

impl TokenOptions {
    /// Empty options (all defaults).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the token length.
    #[must_use]
    pub fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Set the seed.
    #[must_use]
    pub fn seed(mut self, seed: impl Into<SeedValue>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Set the casing.
    #[must_use]
    pub fn casing(mut self, casing: Casing) -> Self {
        self.casing = Some(casing);
        self
    }

    /// Set the friendly flag.
    #[must_use]
    pub fn friendly(mut self, friendly: bool) -> Self {
        self.friendly = Some(friendly);
        self
    }

    /// Set the exclusion mask.
    #[must_use]
    pub fn mask(mut self, mask: impl Into<String>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Effective length.
    #[must_use]
    pub fn effective_length(&self) -> usize {
        self.length.unwrap_or(DEFAULT_TOKEN_SIZE)
    }

    /// Fill every unset field from `defaults`.
    #[must_use]
    pub fn or(self, defaults: &Self) -> Self {
        Self {
            length: self.length.or(defaults.length),
            seed: self.seed.or_else(|| defaults.seed.clone()),
            casing: self.casing.or(defaults.casing),
            friendly: self.friendly.or(defaults.friendly),
            mask: self.mask.or_else(|| defaults.mask.clone()),
        }
    }
}
