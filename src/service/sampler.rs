//! Uniform character sampling.

use rand::Rng;

use crate::domain::Casing;
use crate::service::universe::Universe;

/// Draw `length` characters independently and uniformly from `universe`.
///
/// `universe` must be non-empty unless `length` is zero.
pub(crate) fn sample<R: Rng + ?Sized>(rng: &mut R, universe: &Universe, length: usize) -> String {
    debug_assert!(length == 0 || !universe.is_empty());

    match universe {
        Universe::Radix(base) => (0..length)
            .map(|_| char::from(b'0' + rng.random_range(0..*base)))
            .collect(),
        Universe::Chars(chars) => (0..length)
            .map(|_| chars[rng.random_range(0..chars.len())])
            .collect(),
    }
}

/// Apply the final case transform.
///
/// Only ASCII letters change, so the character count is preserved.
#[must_use]
pub fn apply_casing(token: String, casing: Option<Casing>) -> String {
    match casing {
        Some(Casing::Upper) => token.to_ascii_uppercase(),
        Some(Casing::Lower) => token.to_ascii_lowercase(),
        Some(Casing::Mixed) | None => token,
    }
}
