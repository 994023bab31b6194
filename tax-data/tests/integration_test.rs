//! Integration tests for regime loading against the bundled fixtures.

use std::path::PathBuf;

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{RegimeConfig, TaxBand, TaxEngine};
use tax_data::{RegimeLoader, RegimeLoaderError, TaxBandLoader};

const TEST_CSV_2025: &str = include_str!("../test-data/nta_2025_bands.csv");
const TEST_TOML_2025: &str = include_str!("../test-data/nta_2025.toml");

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test-data")
        .join(name)
}

#[test]
fn test_band_csv_matches_built_in_regime() {
    let bands = TaxBandLoader::load(TEST_CSV_2025.as_bytes()).expect("Failed to load bands");

    assert_eq!(bands, RegimeConfig::nta_2025().bands);
}

#[test]
fn test_regime_toml_matches_built_in_regime() {
    let config = RegimeLoader::from_toml_str(TEST_TOML_2025).expect("Failed to load regime");

    assert_eq!(config, RegimeConfig::nta_2025());
}

#[test]
fn test_regime_file_and_band_file_resolve_together() {
    let config = RegimeLoader::resolve(
        Some(&fixture("flat_2026.toml")),
        Some(&fixture("nta_2025_bands.csv")),
    )
    .expect("Failed to resolve regime");

    assert_eq!(config.name, "Flat 2026");
    assert_eq!(config.vat_rate, dec!(0.10));
    assert_eq!(config.bands, RegimeConfig::nta_2025().bands);
}

#[test]
fn test_partial_regime_file_drives_the_engine() {
    let config =
        RegimeLoader::from_file(&fixture("flat_2026.toml")).expect("Failed to load regime");

    assert_eq!(config.bands, vec![TaxBand::unbounded(dec!(0.12))]);
    assert_eq!(config.minimum_wage, dec!(1000000));
    // Untouched keys fall back to NTA 2025.
    assert_eq!(config.severance_exemption, dec!(50000000));

    let engine = TaxEngine::new(config).expect("Regime should be valid");
    assert_eq!(engine.progressive_tax(dec!(2000000)), dec!(240000));
}

#[test]
fn test_engine_from_loaded_regime_computes_reference_example() {
    let engine = TaxEngine::new(
        RegimeLoader::from_file(&fixture("nta_2025.toml")).expect("Failed to load regime"),
    )
    .expect("Regime should be valid");

    assert_eq!(engine.progressive_tax(dec!(4426000)), dec!(586680));
}

#[test]
fn test_missing_band_file_is_an_io_error() {
    let result = RegimeLoader::resolve(None, Some(&fixture("missing.csv")));

    assert!(matches!(result, Err(RegimeLoaderError::Io { .. })));
}
