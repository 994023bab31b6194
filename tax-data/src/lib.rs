//! Loading of tax regime configuration from CSV band tables and TOML regime
//! files.

mod loader;

pub use loader::{RegimeLoader, RegimeLoaderError, TaxBandLoader, TaxBandRecord};
