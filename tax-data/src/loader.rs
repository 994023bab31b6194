use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{ConfigError, RegimeConfig, TaxBand, validate_bands};
use thiserror::Error;

/// Errors that can occur when loading regime configuration.
#[derive(Debug, Error)]
pub enum RegimeLoaderError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("TOML parse error: {0}")]
    Toml(String),

    #[error("Invalid regime: {0}")]
    Invalid(#[from] ConfigError),
}

impl From<csv::Error> for RegimeLoaderError {
    fn from(err: csv::Error) -> Self {
        RegimeLoaderError::CsvParse(err.to_string())
    }
}

impl From<toml::de::Error> for RegimeLoaderError {
    fn from(err: toml::de::Error) -> Self {
        RegimeLoaderError::Toml(err.to_string())
    }
}

/// A single record from a tax band CSV file.
///
/// The CSV has two columns:
/// - `limit`: The upper cumulative income limit (empty for the unbounded top band)
/// - `rate`: The marginal tax rate as a decimal (e.g., 0.15 for 15%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TaxBandRecord {
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub limit: Option<Decimal>,
    #[serde(deserialize_with = "deserialize_decimal")]
    pub rate: Decimal,
}

impl From<&TaxBandRecord> for TaxBand {
    fn from(record: &TaxBandRecord) -> Self {
        TaxBand {
            limit: record.limit,
            rate: record.rate,
        }
    }
}

fn deserialize_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.trim()
        .parse::<Decimal>()
        .map_err(serde::de::Error::custom)
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for progressive band tables stored as CSV.
pub struct TaxBandLoader;

impl TaxBandLoader {
    /// Parse band records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or a
    /// string slice. Records are returned in file order and are not validated.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TaxBandRecord>, RegimeLoaderError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TaxBandRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Parse a band table and check its ordering invariants.
    pub fn load<R: Read>(reader: R) -> Result<Vec<TaxBand>, RegimeLoaderError> {
        let bands: Vec<TaxBand> = Self::parse(reader)?.iter().map(TaxBand::from).collect();
        validate_bands(&bands)?;
        Ok(bands)
    }

    /// Load and validate a band table from a CSV file.
    pub fn load_file(path: &Path) -> Result<Vec<TaxBand>, RegimeLoaderError> {
        let file = fs::File::open(path).map_err(|source| RegimeLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(file)
    }
}

/// Loader for complete regime definitions stored as TOML.
///
/// Every key is optional and falls back to the NTA 2025 value, so a file for
/// a new tax year only needs to state what changed. Amounts and rates may be
/// written as TOML numbers or as strings.
pub struct RegimeLoader;

impl RegimeLoader {
    /// Parse and validate a regime from TOML text.
    pub fn from_toml_str(text: &str) -> Result<RegimeConfig, RegimeLoaderError> {
        let config: RegimeConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a regime from a TOML file.
    pub fn from_file(path: &Path) -> Result<RegimeConfig, RegimeLoaderError> {
        let text = fs::read_to_string(path).map_err(|source| RegimeLoaderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Build the effective regime from optional sources.
    ///
    /// Starts from the regime file when given, otherwise from NTA 2025, then
    /// replaces its band table with the CSV table when given. The result is
    /// validated as a whole.
    pub fn resolve(
        regime_file: Option<&Path>,
        bands_file: Option<&Path>,
    ) -> Result<RegimeConfig, RegimeLoaderError> {
        let mut config = match regime_file {
            Some(path) => Self::from_file(path)?,
            None => RegimeConfig::nta_2025(),
        };

        if let Some(path) = bands_file {
            config.bands = TaxBandLoader::load_file(path)?;
        }

        config.validate()?;
        Ok(config)
    }
}
