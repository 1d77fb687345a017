//! Character exclusion.
//!
//! Removal is plain set difference, so mask characters never need escaping
//! and repeating a character in a mask has no extra effect. Exclusions apply
//! to hexadecimal and digit universes too; masking every digit of a binary
//! seed yields [`TokenError::EmptyUniverse`].

use std::collections::HashSet;

use crate::domain::GenerationRequest;
use crate::error::{Result, TokenError};
use crate::service::universe::Universe;

/// Visually ambiguous characters removed by the friendly option.
pub const FRIENDLY_MASK: &str = "1Ili0OoQDCcG96UuVvEFMN8B";

/// Set of characters to remove from a universe.
#[derive(Debug, Clone, Default)]
pub struct ExclusionSet {
    excluded: HashSet<char>,
}

impl ExclusionSet {
    /// Build the exclusions for a friendly flag and an optional mask.
    #[must_use]
    pub fn new(friendly: bool, mask: Option<&str>) -> Self {
        let mut excluded = HashSet::new();
        if friendly {
            excluded.extend(FRIENDLY_MASK.chars());
        }
        if let Some(mask) = mask {
            excluded.extend(mask.chars());
        }
        Self { excluded }
    }

    /// Whether `c` is excluded.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.excluded.contains(&c)
    }

    /// Whether nothing is excluded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// Remove excluded characters from `universe`.
    ///
    /// A digit universe stays a [`Universe::Radix`] unless one of its digits
    /// is excluded.
    #[must_use]
    pub(crate) fn apply(&self, universe: Universe) -> Universe {
        if self.is_empty() {
            return universe;
        }
        let untouched = matches!(&universe, Universe::Radix(_))
            && !universe.to_chars().iter().any(|&c| self.contains(c));
        if untouched {
            return universe;
        }
        let kept = universe
            .to_chars()
            .into_iter()
            .filter(|&c| !self.contains(c))
            .collect();
        Universe::Chars(kept)
    }
}

/// Apply the request's friendly and mask exclusions to `universe`.
///
/// # Errors
///
/// Returns [`TokenError::EmptyUniverse`] when no character survives.
pub(crate) fn filter(request: &GenerationRequest, universe: Universe) -> Result<Universe> {
    let exclusions = ExclusionSet::new(request.friendly(), request.mask());
    let filtered = exclusions.apply(universe);

    if filtered.is_empty() {
        tracing::warn!(seed_kind = %request.seed_kind(), "Exclusions removed every character");
        metrics::counter!("random_token_rejected_total", "reason" => "empty_universe")
            .increment(1);
        return Err(TokenError::EmptyUniverse {
            seed_kind: request.seed_kind().clone(),
        });
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SeedKind, TokenOptions};

    fn filtered(options: &TokenOptions) -> Result<Vec<char>> {
        let request = GenerationRequest::try_from_options(options)?;
        let universe = Universe::resolve(request.seed_kind(), request.casing());
        filter(&request, universe).map(|u| u.to_chars())
    }

    #[test]
    fn test_friendly_removes_ambiguous_glyphs() {
        let chars = filtered(&TokenOptions::new().friendly(true)).unwrap();
        assert!(chars.iter().all(|c| !FRIENDLY_MASK.contains(*c)));
        assert_eq!(chars.len(), 62 - FRIENDLY_MASK.len());
    }

    #[test]
    fn test_mask_removes_every_occurrence() {
        let chars = filtered(&TokenOptions::new().seed("aabbc").mask("a")).unwrap();
        assert_eq!(chars, vec!['b', 'b', 'c']);
    }

    #[test]
    fn test_mask_with_pattern_metacharacters() {
        let chars = filtered(&TokenOptions::new().seed("a]^-\\b").mask("]^-\\")).unwrap();
        assert_eq!(chars, vec!['a', 'b']);
    }

    #[test]
    fn test_repeated_mask_characters_have_no_extra_effect() {
        let once = filtered(&TokenOptions::new().seed("abc").mask("a")).unwrap();
        let many = filtered(&TokenOptions::new().seed("abc").mask("aaaa")).unwrap();
        assert_eq!(once, many);
    }

    #[test]
    fn test_empty_mask_keeps_radix() {
        let exclusions = ExclusionSet::new(false, Some(""));
        assert_eq!(exclusions.apply(Universe::Radix(2)), Universe::Radix(2));
    }

    #[test]
    fn test_mask_outside_digits_keeps_radix() {
        let exclusions = ExclusionSet::new(false, Some("89"));
        assert_eq!(exclusions.apply(Universe::Radix(8)), Universe::Radix(8));
    }

    #[test]
    fn test_mask_on_digits_materializes() {
        let exclusions = ExclusionSet::new(false, Some("0"));
        assert_eq!(
            exclusions.apply(Universe::Radix(2)),
            Universe::Chars(vec!['1'])
        );
    }

    #[test]
    fn test_fully_masked_universe_is_an_error() {
        let err = filtered(&TokenOptions::new().seed("abc").mask("cba")).unwrap_err();
        assert_eq!(
            err,
            TokenError::EmptyUniverse {
                seed_kind: SeedKind::Custom("abc".to_string())
            }
        );
        assert_eq!(err.parameter(), Some("mask"));
    }
}
