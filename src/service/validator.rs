//! Option combination checks.
//!
//! Runs before any universe is built. Neither `mask` nor `length` can make a
//! request invalid.

use crate::domain::{Casing, GenerationRequest, SeedKind};
use crate::error::{Result, TokenError};

/// Reject option combinations that the resolved seed kind does not support.
///
/// # Errors
///
/// Returns [`TokenError::InvalidParameter`] naming `casing` or `friendly`.
pub fn validate(request: &GenerationRequest) -> Result<()> {
    let kind = request.seed_kind();

    if kind.radix().is_some() && request.casing().is_some() {
        return Err(reject(
            "casing",
            format!("The casing is not supported with {kind} seeds."),
        ));
    }

    if matches!(kind, SeedKind::Hexadecimal | SeedKind::Custom(_))
        && request.casing() == Some(Casing::Mixed)
    {
        return Err(reject(
            "casing",
            format!("The mixed casing is not supported with {kind} seeds."),
        ));
    }

    if !matches!(kind, SeedKind::AlphabetOnly | SeedKind::DefaultMixed) && request.friendly() {
        return Err(reject(
            "friendly",
            "The friendly mask is supported with alphabet or default seeds (no seed is given) only.",
        ));
    }

    Ok(())
}

fn reject(parameter: &'static str, message: impl Into<String>) -> TokenError {
    let err = TokenError::invalid_parameter(parameter, message);
    tracing::warn!(parameter, error = %err, "Rejected token options");
    metrics::counter!("random_token_rejected_total", "reason" => "invalid_parameter")
        .increment(1);
    err
}
