//! Token generation pipeline.
//!
//! Validation, universe resolution, exclusion filtering, then sampling and
//! casing. Every call is independent; the only state is the random source.

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::domain::{GenerationRequest, TokenOptions};
use crate::error::{Result, TokenError};
use crate::service::filter::filter;
use crate::service::sampler::{apply_casing, sample};
use crate::service::universe::Universe;

/// Largest batch accepted by [`TokenGenerator::generate_many`].
pub const MAX_BATCH_COUNT: u32 = 1000;

/// Token generator over a pseudo-random source.
///
/// The default source is the thread-local generator from [`rand::rng`].
/// Use [`TokenGenerator::with_rng`] with a seeded generator for
/// reproducible output.
#[derive(Debug, Clone)]
pub struct TokenGenerator<R = ThreadRng> {
    rng: R,
}

impl TokenGenerator<ThreadRng> {
    /// Create a generator backed by the thread-local random source.
    #[must_use]
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for TokenGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> TokenGenerator<R> {
    /// Create a generator backed by `rng`.
    pub const fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Generate one token.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidParameter`] for unsupported option
    /// combinations and [`TokenError::EmptyUniverse`] when the exclusions
    /// leave nothing to sample.
    #[doc(alias = "gen")]
    pub fn generate(&mut self, options: &TokenOptions) -> Result<String> {
        let (request, universe) = prepare(options)?;
        Ok(self.draw(&request, &universe))
    }

    /// Generate one token, excluding ambiguous characters unless the caller
    /// set `friendly` explicitly.
    ///
    /// # Errors
    ///
    /// Same as [`TokenGenerator::generate`]. A seed that does not support the
    /// friendly mask is rejected with a `friendly` parameter error.
    #[doc(alias = "genf")]
    pub fn generate_friendly(&mut self, options: &TokenOptions) -> Result<String> {
        self.generate(&friendly_by_default(options))
    }

    /// Generate `count` tokens with the same options.
    ///
    /// Options are validated once, so either every token is produced or none.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::InvalidCount`] unless `count` is within
    /// `1..=MAX_BATCH_COUNT`, otherwise the same errors as
    /// [`TokenGenerator::generate`].
    pub fn generate_many(&mut self, options: &TokenOptions, count: u32) -> Result<Vec<String>> {
        validate_count(count)?;
        let (request, universe) = prepare(options)?;
        Ok((0..count).map(|_| self.draw(&request, &universe)).collect())
    }

    fn draw(&mut self, request: &GenerationRequest, universe: &Universe) -> String {
        let token = sample(&mut self.rng, universe, request.length());
        metrics::counter!(
            "random_token_generated_total",
            "seed_kind" => request.seed_kind().as_str()
        )
        .increment(1);
        apply_casing(token, request.casing())
    }
}

/// `options` with `friendly` forced on unless already set.
#[must_use]
pub fn friendly_by_default(options: &TokenOptions) -> TokenOptions {
    let mut options = options.clone();
    options.friendly.get_or_insert(true);
    options
}

/// Check a batch size.
///
/// # Errors
///
/// Returns [`TokenError::InvalidCount`] when out of range.
pub fn validate_count(count: u32) -> Result<()> {
    if count == 0 {
        return Err(TokenError::InvalidCount(
            "count must be at least 1".to_string(),
        ));
    }
    if count > MAX_BATCH_COUNT {
        return Err(TokenError::InvalidCount(format!(
            "count cannot exceed {MAX_BATCH_COUNT}"
        )));
    }
    Ok(())
}

fn prepare(options: &TokenOptions) -> Result<(GenerationRequest, Universe)> {
    let request = GenerationRequest::try_from_options(options)?;
    let universe = Universe::resolve(request.seed_kind(), request.casing());
    let universe = filter(&request, universe)?;

    debug!(
        seed_kind = %request.seed_kind(),
        length = request.length(),
        universe_size = universe.len(),
        "Resolved token universe"
    );

    Ok((request, universe))
}
