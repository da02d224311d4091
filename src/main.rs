// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `pihex`: print hexadecimal digits of π and the values derived from them.
//!
//! ```bash
//! # Default report for the first 100 digits
//! pihex
//!
//! # First 32 digits, compact summary only
//! pihex -n 32 --legal
//!
//! # Symbol table, with engine counters and debug logging on stderr
//! RUST_LOG=pi_hex=debug pihex --design --stats
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pi_hex::engine::config::MATRIX_DIGITS;
use pi_hex::engine::{EngineConfig, PiEngine, DEFAULT_CAPACITY, VIOLATION_SCALE_FACTOR};
use pi_hex::report;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Compute hexadecimal digits of π with the BBP formula.
#[derive(Parser, Debug)]
#[command(name = "pihex", version, about, long_about = None)]
struct Cli {
    /// Number of digits to compute
    #[arg(
        short = 'n',
        long = "digits",
        env = "PIHEX_DIGITS",
        default_value_t = DEFAULT_CAPACITY,
        value_parser = parse_digit_count
    )]
    digits: usize,

    /// Print the compact claim summary instead of the full report
    #[arg(short, long, conflicts_with = "design")]
    legal: bool,

    /// Print the digit symbol table instead of the full report
    #[arg(short, long)]
    design: bool,

    /// Multiplier applied to digits 0-2 for the magnitude vector
    #[arg(long, env = "PIHEX_SCALE_FACTOR", default_value_t = VIOLATION_SCALE_FACTOR)]
    scale_factor: f64,

    /// Print engine counters to stderr when done
    #[arg(long)]
    stats: bool,
}

fn parse_digit_count(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("digit count must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    // The matrix always needs nine digits, even when fewer are displayed.
    let config =
        EngineConfig::new(cli.digits.max(MATRIX_DIGITS)).with_scale_factor(cli.scale_factor);
    let mut engine = PiEngine::new(config).context("failed to create digit engine")?;
    info!(digits = cli.digits, capacity = config.capacity, "computing digits");

    let output = if cli.legal {
        report::claim_summary(&mut engine)
    } else if cli.design {
        report::design_table(&mut engine, cli.digits)
    } else {
        report::standard_report(&mut engine, cli.digits)
    }
    .context("failed to render report")?;
    print!("{}", output);

    if cli.stats {
        for (counter, value) in engine.statistics().iter() {
            eprintln!("[stats] {}: {}", counter, value);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["pihex"]).unwrap();
        assert_eq!(cli.digits, 100);
        assert!(!cli.legal);
        assert!(!cli.design);
        assert_eq!(cli.scale_factor, 14.4);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from(["pihex", "-n", "20", "-l"]).unwrap();
        assert_eq!(cli.digits, 20);
        assert!(cli.legal);
    }

    #[test]
    fn test_cli_rejects_zero_digits() {
        assert!(Cli::try_parse_from(["pihex", "--digits", "0"]).is_err());
    }

    #[test]
    fn test_cli_legal_conflicts_with_design() {
        assert!(Cli::try_parse_from(["pihex", "--legal", "--design"]).is_err());
    }
}
