//! The tax engine: a validated regime configuration plus the calculators.
//!
//! A [`TaxEngine`] can only be built from a configuration that passes
//! [`RegimeConfig::validate`], so a malformed band table is caught once at
//! startup and never per call. The engine holds no other state; it is safe
//! to share between any number of concurrent callers.

use rust_decimal::Decimal;
use serde_json::Value;

use crate::calculations::{
    BandSchedule, CalculationError, FieldMap, PitInput, PitOutcome, PitWorksheet,
    RentReliefResult, VatMode, VatResult, coerce_amount, format_bands, progressive_tax,
};
use crate::{ConfigError, RegimeConfig};

/// Stateless calculator over an immutable regime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxEngine {
    config: RegimeConfig,
}

impl TaxEngine {
    /// Validates `config` and builds an engine around it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the band table or any statutory rate is invalid.
    pub fn new(config: RegimeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine for the built-in NTA 2025 regime.
    pub fn nta_2025() -> Self {
        Self {
            config: RegimeConfig::nta_2025(),
        }
    }

    pub fn config(&self) -> &RegimeConfig {
        &self.config
    }

    /// Progressive tax on `income` under this regime's band table.
    pub fn progressive_tax(
        &self,
        income: Decimal,
    ) -> Decimal {
        progressive_tax(income, &self.config.bands)
    }

    /// Runs the PIT calculation on already-typed input.
    pub fn assess_pit(
        &self,
        input: &PitInput,
    ) -> PitOutcome {
        PitWorksheet::new(&self.config).calculate(input)
    }

    /// Coerces `fields` and runs the PIT calculation.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidAmount`] if a declared field is not numeric.
    pub fn calculate_pit(
        &self,
        fields: &FieldMap,
    ) -> Result<PitOutcome, CalculationError> {
        let input = PitInput::from_fields(fields)?;
        Ok(self.assess_pit(&input))
    }

    /// Reads `amount` and `type` from `fields` and converts at the regime's VAT rate.
    ///
    /// A missing or null `type` means `net`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError`] if `amount` is not numeric or `type` is
    /// not a recognised direction.
    pub fn calculate_vat(
        &self,
        fields: &FieldMap,
    ) -> Result<VatResult, CalculationError> {
        let amount = coerce_amount(fields, "amount")?;
        let mode = match fields.get("type") {
            None | Some(Value::Null) => VatMode::default(),
            Some(Value::String(text)) => text.parse()?,
            Some(other) => return Err(CalculationError::UnsupportedVatMode(other.to_string())),
        };

        Ok(crate::calculations::calculate_vat(
            amount,
            mode,
            self.config.vat_rate,
        ))
    }

    /// Reads `rent_paid` from `fields` and computes the relief.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidAmount`] if `rent_paid` is not numeric.
    pub fn calculate_rent_relief(
        &self,
        fields: &FieldMap,
    ) -> Result<RentReliefResult, CalculationError> {
        let rent_paid = coerce_amount(fields, "rent_paid")?;
        Ok(crate::calculations::calculate_rent_relief(
            rent_paid,
            &self.config,
        ))
    }

    /// The band table rendered for display.
    pub fn band_schedule(&self) -> BandSchedule {
        format_bands(
            &self.config.bands,
            self.config.minimum_wage,
            &self.config.currency_symbol,
        )
    }
}

impl Default for TaxEngine {
    fn default() -> Self {
        Self::nta_2025()
    }
}
