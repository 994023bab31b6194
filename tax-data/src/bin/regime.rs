use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;
use tax_core::TaxEngine;
use tax_core::calculations::format_amount;
use tax_data::RegimeLoader;

/// Validate a tax regime and print its band schedule.
///
/// Without arguments the built-in NTA 2025 regime is checked. A regime file
/// supplies every statutory value; a band CSV replaces only the band table.
/// The band CSV file should have the following columns:
/// - limit: The upper cumulative income limit (empty for the top band)
/// - rate: The marginal tax rate as a decimal (e.g., 0.15)
#[derive(Parser, Debug)]
#[command(name = "tax-regime")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a TOML regime file
    #[arg(short, long)]
    regime: Option<PathBuf>,

    /// Path to a CSV band table overriding the regime's bands
    #[arg(short, long)]
    bands: Option<PathBuf>,

    /// Print the progressive tax due on this chargeable income
    #[arg(short, long)]
    income: Option<Decimal>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = RegimeLoader::resolve(args.regime.as_deref(), args.bands.as_deref())
        .context("Failed to load tax regime")?;
    let engine = TaxEngine::new(config).context("Tax regime is invalid")?;
    let config = engine.config();

    println!(
        "{} (tax year {}, effective {})",
        config.name, config.tax_year, config.effective_date
    );
    println!(
        "Minimum wage exemption: {}{}",
        config.currency_symbol,
        format_amount(config.minimum_wage)
    );
    println!();

    for band in engine.band_schedule().bands {
        println!(
            "{:<32} {:>6}   base tax {}{}",
            band.range,
            band.rate_display,
            config.currency_symbol,
            format_amount(band.base_tax)
        );
    }

    if let Some(income) = args.income {
        println!();
        println!(
            "Tax on {}{}: {}{}",
            config.currency_symbol,
            format_amount(income),
            config.currency_symbol,
            engine.progressive_tax(income)
        );
    }

    Ok(())
}
