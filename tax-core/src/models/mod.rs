mod regime_config;
mod tax_band;

pub use regime_config::{ConfigError, RegimeConfig, validate_bands};
pub use tax_band::TaxBand;
