//! Random Token command line entry point.
//!
//! Loads configuration, parses flags and prints the generated tokens.

use random_token::run;

fn main() -> anyhow::Result<()> {
    run()
}
