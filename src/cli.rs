//! Command line surface.

use std::io::Write;
use std::str::FromStr;

use clap::Parser;

use crate::config::{AppConfig, OutputFormat};
use crate::domain::{ApiResponse, Casing, SeedValue, TokenOptions, TokenResponse};
use crate::error::TokenError;
use crate::service::TokenGenerator;
use crate::service::generator::friendly_by_default;

/// Generate random tokens from a configurable character set.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "random-token", version)]
pub struct Cli {
    /// Token length (default 16)
    #[arg(short = 'n', long)]
    pub length: Option<usize>,

    /// Seed: n|number|10|1, o|oct|octal|8, b|binary|2, h|hex|hexadecimal|16,
    /// a|alphabet|l|letter, or a literal set of characters
    #[arg(short, long, allow_hyphen_values = true, value_parser = SeedValue::from_str)]
    pub seed: Option<SeedValue>,

    /// Casing: u|upper, l|lower, m|mixed
    #[arg(short, long)]
    pub casing: Option<Casing>,

    /// Exclude visually ambiguous characters
    #[arg(short, long, overrides_with = "no_friendly")]
    pub friendly: bool,

    /// Keep visually ambiguous characters (overrides --genf and config)
    #[arg(long, overrides_with = "friendly")]
    pub no_friendly: bool,

    /// Characters to exclude
    #[arg(short, long, allow_hyphen_values = true)]
    pub mask: Option<String>,

    /// Friendly by default unless --no-friendly is given
    #[arg(long)]
    pub genf: bool,

    /// Number of tokens to generate
    #[arg(short = 'k', long)]
    pub count: Option<u32>,

    /// Output format
    #[arg(short = 'o', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration profile (loads config/<profile>.toml)
    #[arg(long, env = "RANDOM_TOKEN_PROFILE")]
    pub profile: Option<String>,
}

impl Cli {
    /// Options given on the command line, with unset fields taken from
    /// `defaults`.
    #[must_use]
    pub fn token_options(&self, defaults: &TokenOptions) -> TokenOptions {
        let friendly = if self.friendly {
            Some(true)
        } else if self.no_friendly {
            Some(false)
        } else {
            None
        };

        let options = TokenOptions {
            length: self.length,
            seed: self.seed.clone(),
            casing: self.casing,
            friendly,
            mask: self.mask.clone(),
        }
        .or(defaults);

        if self.genf {
            friendly_by_default(&options)
        } else {
            options
        }
    }
}

/// Generate tokens for `cli` and write them to `out`.
///
/// # Errors
///
/// Returns an error if the options are rejected or `out` cannot be written.
/// With JSON output the error envelope is written to `out` first.
pub fn execute<W: Write>(cli: &Cli, config: &AppConfig, out: &mut W) -> anyhow::Result<()> {
    let options = cli.token_options(&config.token);
    let count = cli.count.unwrap_or(config.output.count);
    let format = cli.format.unwrap_or(config.output.format);

    tracing::debug!(?options, count, ?format, "Generating tokens");

    let result = TokenGenerator::new().generate_many(&options, count);
    write_result(result, format, out)
}

fn write_result<W: Write>(
    result: Result<Vec<String>, TokenError>,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    match (result, format) {
        (Ok(tokens), OutputFormat::Text) => {
            for token in tokens {
                writeln!(out, "{token}")?;
            }
        }
        (Ok(tokens), OutputFormat::Json) => {
            let body = ApiResponse::success(TokenResponse::new(tokens));
            serde_json::to_writer(&mut *out, &body)?;
            writeln!(out)?;
        }
        (Err(err), OutputFormat::Json) => {
            serde_json::to_writer(&mut *out, &err.to_json())?;
            writeln!(out)?;
            return Err(err.into());
        }
        (Err(err), OutputFormat::Text) => return Err(err.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("random-token").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_numeric_seed_is_a_code() {
        let cli = parse(&["--seed", "16"]);
        assert_eq!(cli.seed, Some(SeedValue::Code(16)));
        let cli = parse(&["-s", "2"]);
        assert_eq!(cli.seed, Some(SeedValue::Code(2)));
    }

    #[test]
    fn test_digits_only_custom_seed_stays_literal() {
        let cli = parse(&["--seed", "13579"]);
        assert_eq!(cli.seed, Some(SeedValue::from("13579")));
    }

    #[test]
    fn test_casing_short_spelling() {
        let cli = parse(&["-c", "u"]);
        assert_eq!(cli.casing, Some(Casing::Upper));
    }

    #[test]
    fn test_unknown_casing_is_rejected() {
        assert!(Cli::try_parse_from(["random-token", "--casing", "loud"]).is_err());
    }

    #[test]
    fn test_flags_override_defaults() {
        let defaults = TokenOptions::new().length(32).seed("hex");
        let options = parse(&["-n", "8"]).token_options(&defaults);
        assert_eq!(options.length, Some(8));
        assert_eq!(options.seed, Some(SeedValue::from("hex")));
    }

    #[test]
    fn test_friendly_flags() {
        let defaults = TokenOptions::new().friendly(true);
        assert_eq!(parse(&[]).token_options(&defaults).friendly, Some(true));
        assert_eq!(
            parse(&["--no-friendly"]).token_options(&defaults).friendly,
            Some(false)
        );
        assert_eq!(
            parse(&["--friendly", "--no-friendly"])
                .token_options(&TokenOptions::new())
                .friendly,
            Some(false)
        );
    }

    #[test]
    fn test_genf_defaults_friendly_on() {
        let options = parse(&["--genf"]).token_options(&TokenOptions::new());
        assert_eq!(options.friendly, Some(true));

        let options = parse(&["--genf", "--no-friendly"]).token_options(&TokenOptions::new());
        assert_eq!(options.friendly, Some(false));
    }

    #[test]
    fn test_json_error_envelope_is_written() {
        let mut out = Vec::new();
        let err = TokenError::invalid_parameter("casing", "bad");
        assert!(write_result(Err(err), OutputFormat::Json, &mut out).is_err());

        let body: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(body["code"], 3003);
    }
}
