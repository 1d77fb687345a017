//! Seed types.
//!
//! A seed selects which characters are eligible for sampling. Callers pass a
//! raw [`SeedValue`] (a numeric code, a mnemonic, or a literal character
//! string); it is classified exactly once into a closed [`SeedKind`].

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Raw seed as supplied by a caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeedValue {
    /// Numeric code such as `16` or `2`.
    Code(i64),
    /// Mnemonic such as `"hex"`, or a literal set of characters.
    Text(String),
}

impl From<i64> for SeedValue {
    fn from(code: i64) -> Self {
        Self::Code(code)
    }
}

impl From<i32> for SeedValue {
    fn from(code: i32) -> Self {
        Self::Code(i64::from(code))
    }
}

impl From<&str> for SeedValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SeedValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Parses command line input: only the recognized numeric codes become
/// [`SeedValue::Code`], so a digits-only custom seed stays literal.
impl FromStr for SeedValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(code @ (1 | 2 | 8 | 10 | 16)) => Ok(Self::Code(code)),
            _ => Ok(Self::Text(s.to_string())),
        }
    }
}

/// Classified seed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SeedKind {
    /// Digits `0-9`.
    Decimal,
    /// Digits `0-7`.
    Octal,
    /// Digits `0-1`.
    Binary,
    /// `a-f` and `0-9`.
    Hexadecimal,
    /// Letters only.
    AlphabetOnly,
    /// Caller-provided characters, taken verbatim.
    Custom(String),
    /// Letters and digits (no seed given).
    DefaultMixed,
}

impl SeedKind {
    /// Classify a raw seed.
    ///
    /// Unrecognized numeric codes and empty strings fall back to
    /// [`SeedKind::DefaultMixed`], the same as an absent seed.
    #[must_use]
    pub fn resolve(seed: Option<&SeedValue>) -> Self {
        match seed {
            Some(SeedValue::Code(code)) => match code {
                10 | 1 => Self::Decimal,
                8 => Self::Octal,
                2 => Self::Binary,
                16 => Self::Hexadecimal,
                _ => Self::DefaultMixed,
            },
            Some(SeedValue::Text(text)) => match text.as_str() {
                "n" | "number" => Self::Decimal,
                "o" | "oct" | "octal" => Self::Octal,
                "b" | "binary" => Self::Binary,
                "h" | "hex" | "hexadecimal" => Self::Hexadecimal,
                "a" | "alphabet" | "l" | "letter" => Self::AlphabetOnly,
                "" => Self::DefaultMixed,
                custom => Self::Custom(custom.to_string()),
            },
            None => Self::DefaultMixed,
        }
    }

    /// Base for kinds sampled as plain integers.
    #[must_use]
    pub const fn radix(&self) -> Option<u8> {
        match self {
            Self::Decimal => Some(10),
            Self::Octal => Some(8),
            Self::Binary => Some(2),
            _ => None,
        }
    }

    /// Stable label, used in messages and metric labels.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Decimal => "decimal",
            Self::Octal => "octal",
            Self::Binary => "binary",
            Self::Hexadecimal => "hexadecimal",
            Self::AlphabetOnly => "alphabet",
            Self::Custom(_) => "custom",
            Self::DefaultMixed => "default",
        }
    }
}

impl std::fmt::Display for SeedKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
