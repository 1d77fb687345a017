//! Character-source resolution.
//!
//! Maps a classified seed and casing onto the characters eligible for
//! sampling, before any exclusions are applied.

use crate::domain::{Casing, SeedKind};

const NUM_SEEDS: &str = "0123456789";
const HEX_SEEDS: &str = "abcdef0123456789";
const ALPHABET_SEEDS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Characters available for sampling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Universe {
    /// Digits `0..base`, drawn as integers.
    Radix(u8),
    /// Explicit characters, drawn by position. Duplicates weigh by multiplicity.
    Chars(Vec<char>),
}

impl Universe {
    /// Build the unfiltered universe for a seed kind.
    #[must_use]
    pub(crate) fn resolve(kind: &SeedKind, casing: Option<Casing>) -> Self {
        if let Some(base) = kind.radix() {
            return Self::Radix(base);
        }

        let chars = match kind {
            SeedKind::Hexadecimal => HEX_SEEDS.chars().collect(),
            SeedKind::AlphabetOnly => alphabet(casing),
            SeedKind::Custom(seed) => seed.chars().collect(),
            _ => {
                let mut chars = alphabet(casing);
                chars.extend(NUM_SEEDS.chars());
                chars
            }
        };
        Self::Chars(chars)
    }

    /// Number of sampling positions.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Radix(base) => usize::from(*base),
            Self::Chars(chars) => chars.len(),
        }
    }

    /// Whether nothing can be sampled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Materialize as explicit characters.
    #[must_use]
    pub fn to_chars(&self) -> Vec<char> {
        match self {
            Self::Radix(base) => NUM_SEEDS.chars().take(usize::from(*base)).collect(),
            Self::Chars(chars) => chars.clone(),
        }
    }
}

/// Lowercase letters, plus uppercase unless a single case was requested.
fn alphabet(casing: Option<Casing>) -> Vec<char> {
    let mut chars: Vec<char> = ALPHABET_SEEDS.chars().collect();
    if matches!(casing, None | Some(Casing::Mixed)) {
        chars.extend(ALPHABET_SEEDS.chars().map(|c| c.to_ascii_uppercase()));
    }
    chars
}
