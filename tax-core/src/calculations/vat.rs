//! Value-added tax conversions at the standard rate.
//!
//! Two directions are supported:
//!
//! - `net`: the amount excludes VAT. VAT = amount × rate, gross = amount + VAT.
//! - `gross`: the amount includes VAT. Net = amount ÷ (1 + rate), VAT = amount − net.
//!
//! Any other direction is rejected with
//! [`CalculationError::UnsupportedVatMode`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::calculations::{VatMode, calculate_vat};
//!
//! let result = calculate_vat(dec!(1075), VatMode::Gross, dec!(0.075));
//!
//! assert_eq!(result.net_amount, dec!(1000.00));
//! assert_eq!(result.vat_amount, dec!(75.00));
//! ```

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::CalculationError;
use crate::calculations::common::{as_percent, round_half_up};

/// Direction of a VAT conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VatMode {
    /// The amount excludes VAT.
    #[default]
    Net,
    /// The amount includes VAT.
    Gross,
}

impl VatMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Net => "net",
            Self::Gross => "gross",
        }
    }
}

impl fmt::Display for VatMode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VatMode {
    type Err = CalculationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "net" => Ok(Self::Net),
            "gross" => Ok(Self::Gross),
            _ => Err(CalculationError::UnsupportedVatMode(format!("\"{s}\""))),
        }
    }
}

/// Label describing which way a conversion went.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VatConversion {
    NetToGross,
    GrossToNet,
}

/// Result of a VAT conversion. Amounts are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatResult {
    #[serde(rename = "type")]
    pub conversion: VatConversion,
    pub net_amount: Decimal,
    pub vat_amount: Decimal,
    pub gross_amount: Decimal,
    /// VAT rate as a percentage.
    pub vat_rate: Decimal,
}

/// Converts `amount` between VAT-exclusive and VAT-inclusive figures.
pub fn calculate_vat(
    amount: Decimal,
    mode: VatMode,
    rate: Decimal,
) -> VatResult {
    match mode {
        VatMode::Net => {
            let net_amount = round_half_up(amount);
            let vat_amount = round_half_up(amount * rate);
            VatResult {
                conversion: VatConversion::NetToGross,
                net_amount,
                vat_amount,
                gross_amount: net_amount + vat_amount,
                vat_rate: as_percent(rate),
            }
        }
        VatMode::Gross => {
            let gross_amount = round_half_up(amount);
            let net_amount = round_half_up(amount / (Decimal::ONE + rate));
            VatResult {
                conversion: VatConversion::GrossToNet,
                net_amount,
                vat_amount: gross_amount - net_amount,
                gross_amount,
                vat_rate: as_percent(rate),
            }
        }
    }
}
