//! # Random Token
//!
//! A configurable random token generator for identifiers, short codes and
//! test fixtures. Randomness comes from a non-cryptographic pseudo-random
//! source; do not use the output as a secret.
//!
//! - **Seeds**: digits, octal, binary, hexadecimal, letters, or any literal
//!   character set
//! - **Casing**: upper, lower or mixed output
//! - **Exclusions**: a friendly mask of visually ambiguous characters plus
//!   caller-supplied masks
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │  Validator   │ → │   Universe   │ → │  Exclusion   │ → │   Sampler    │
//! │ (fail fast)  │   │   resolver   │   │    filter    │   │  + casing    │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Exclusions
//!
//! The friendly set and the caller mask apply to every seed kind, including
//! hexadecimal and digit seeds. A mask that covers the whole character set
//! is rejected rather than ignored:
//!
//! ```
//! use random_token::{TokenError, TokenOptions, generate};
//!
//! let result = generate(&TokenOptions::new().seed("binary").mask("01"));
//! assert!(matches!(result, Err(TokenError::EmptyUniverse { .. })));
//! ```
//!
//! ## Example
//!
//! ```
//! use random_token::{TokenOptions, generate};
//!
//! let token = generate(&TokenOptions::new().seed("binary").length(8)).unwrap();
//! assert_eq!(token.len(), 8);
//! assert!(token.chars().all(|c| c == '0' || c == '1'));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use clap::Parser;
use tracing::debug;

pub use crate::domain::{Casing, DEFAULT_TOKEN_SIZE, SeedKind, SeedValue, TokenOptions};
pub use crate::error::{Result, TokenError};
pub use crate::service::{FRIENDLY_MASK, TokenGenerator};

use crate::cli::{Cli, execute};
use crate::config::AppConfig;

/// Generate a token with the thread-local random source.
///
/// # Errors
///
/// Returns [`TokenError::InvalidParameter`] for unsupported option
/// combinations and [`TokenError::EmptyUniverse`] when exclusions leave
/// nothing to sample.
#[doc(alias = "gen")]
pub fn generate(options: &TokenOptions) -> Result<String> {
    TokenGenerator::new().generate(options)
}

/// Generate a friendly token, excluding [`FRIENDLY_MASK`] unless the caller
/// set `friendly` explicitly.
///
/// # Errors
///
/// Same as [`generate`]; seeds other than the letter seeds are rejected with
/// a `friendly` parameter error.
#[doc(alias = "genf")]
pub fn generate_friendly(options: &TokenOptions) -> Result<String> {
    TokenGenerator::new().generate_friendly(options)
}

/// Run the command line tool.
///
/// This function:
/// 1. Loads `.env`, command line flags and configuration
/// 2. Initializes logging
/// 3. Generates tokens and writes them to stdout
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the options are
/// rejected, or stdout cannot be written.
pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.profile.as_deref())?;

    init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting random-token");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&cli, &config, &mut out)
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
