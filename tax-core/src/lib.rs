//! Personal income tax, VAT and rent relief calculations for progressive
//! band regimes such as the Nigeria Tax Act 2025.
//!
//! All calculators are pure functions over an immutable [`RegimeConfig`].
//! [`TaxEngine`] bundles a validated configuration with the calculators and
//! accepts loosely-typed field maps as received over the wire.

pub mod calculations;
pub mod engine;
pub mod models;

pub use calculations::{CalculationError, FieldMap};
pub use engine::TaxEngine;
pub use models::*;
