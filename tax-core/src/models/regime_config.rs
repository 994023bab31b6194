//! Statutory parameters for one tax regime.
//!
//! A [`RegimeConfig`] is loaded once at startup and never mutated. Everything
//! that changes when tax law changes (the band table, the minimum-wage
//! threshold, flat rates, caps and exemptions) lives here rather than in the
//! calculators.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::TaxBand;

/// Errors raised when a regime configuration is structurally invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The band table is empty.
    #[error("tax band table is empty")]
    NoBands,

    /// A bounded band has a limit of zero or less.
    #[error("band {index} has a non-positive limit {limit}")]
    NonPositiveLimit { index: usize, limit: Decimal },

    /// Band limits must be strictly increasing.
    #[error("band {index} limit {limit} does not exceed the previous limit {previous}")]
    LimitNotIncreasing {
        index: usize,
        limit: Decimal,
        previous: Decimal,
    },

    /// Only the final band may be unbounded.
    #[error("band {index} is unbounded but is not the last band")]
    UnboundedBandNotLast { index: usize },

    /// The final band must be unbounded.
    #[error("the last tax band must be unbounded")]
    MissingUnboundedBand,

    /// A band's marginal rate is outside [0, 1].
    #[error("band {index} rate must be between 0 and 1, got {rate}")]
    BandRateOutOfRange { index: usize, rate: Decimal },

    /// A flat statutory rate is outside [0, 1].
    #[error("{name} must be between 0 and 1, got {rate}")]
    RateOutOfRange { name: &'static str, rate: Decimal },

    /// A threshold, cap or exemption is negative.
    #[error("{name} must be non-negative, got {amount}")]
    NegativeAmount { name: &'static str, amount: Decimal },
}

/// Statutory parameters for PIT, VAT and rent-relief calculations.
///
/// Every field falls back to the NTA 2025 value when absent from a
/// deserialized document, so a regime file only needs to state what differs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegimeConfig {
    /// Short regime label reported alongside PIT results (e.g. "NTA 2025").
    pub name: String,

    /// Tax year label reported by the band schedule.
    pub tax_year: String,

    /// Human-readable effective date of the regime.
    pub effective_date: String,

    /// Year in which the regime takes effect, reported by the health check.
    pub effective_year: String,

    /// Symbol used when rendering band ranges.
    pub currency_symbol: String,

    /// Total gross income at or below this amount is exempt from PIT.
    pub minimum_wage: Decimal,

    /// Progressive band table, ordered by increasing limit.
    pub bands: Vec<TaxBand>,

    /// Pension contribution on basic + housing + transport.
    pub pension_rate: Decimal,

    /// National Health Insurance Scheme contribution on basic salary.
    pub nhis_rate: Decimal,

    /// National Housing Fund contribution on basic salary.
    pub nhf_rate: Decimal,

    /// Share of annual rent allowed as relief.
    pub rent_relief_rate: Decimal,

    /// Maximum rent relief regardless of rent paid.
    pub rent_relief_cap: Decimal,

    /// Marginal rate assumed when illustrating the saving from rent relief.
    ///
    /// This is an approximation, not the caller's actual band.
    pub rent_relief_saving_rate: Decimal,

    /// Portion of a severance payment that is tax free.
    pub severance_exemption: Decimal,

    /// Standard VAT rate.
    pub vat_rate: Decimal,
}

impl RegimeConfig {
    /// The Nigeria Tax Act 2025 regime, effective January 1, 2026.
    pub fn nta_2025() -> Self {
        Self {
            name: "NTA 2025".to_string(),
            tax_year: "2025".to_string(),
            effective_date: "January 1, 2026".to_string(),
            effective_year: "2026".to_string(),
            currency_symbol: "₦".to_string(),
            minimum_wage: Decimal::from(70_000 * 12),
            bands: vec![
                TaxBand::bounded(Decimal::from(800_000), Decimal::ZERO),
                TaxBand::bounded(Decimal::from(3_000_000), Decimal::new(15, 2)),
                TaxBand::bounded(Decimal::from(12_000_000), Decimal::new(18, 2)),
                TaxBand::bounded(Decimal::from(25_000_000), Decimal::new(21, 2)),
                TaxBand::bounded(Decimal::from(50_000_000), Decimal::new(23, 2)),
                TaxBand::unbounded(Decimal::new(25, 2)),
            ],
            pension_rate: Decimal::new(8, 2),
            nhis_rate: Decimal::new(5, 2),
            nhf_rate: Decimal::new(25, 3),
            rent_relief_rate: Decimal::new(20, 2),
            rent_relief_cap: Decimal::from(500_000),
            rent_relief_saving_rate: Decimal::new(20, 2),
            severance_exemption: Decimal::from(50_000_000),
            vat_rate: Decimal::new(75, 3),
        }
    }

    /// Validates the band table and every flat rate and threshold.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found, checking the band table first.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bands(&self.bands)?;

        for (name, rate) in [
            ("pension_rate", self.pension_rate),
            ("nhis_rate", self.nhis_rate),
            ("nhf_rate", self.nhf_rate),
            ("rent_relief_rate", self.rent_relief_rate),
            ("rent_relief_saving_rate", self.rent_relief_saving_rate),
            ("vat_rate", self.vat_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(ConfigError::RateOutOfRange { name, rate });
            }
        }

        for (name, amount) in [
            ("minimum_wage", self.minimum_wage),
            ("rent_relief_cap", self.rent_relief_cap),
            ("severance_exemption", self.severance_exemption),
        ] {
            if amount < Decimal::ZERO {
                return Err(ConfigError::NegativeAmount { name, amount });
            }
        }

        Ok(())
    }
}

impl Default for RegimeConfig {
    fn default() -> Self {
        Self::nta_2025()
    }
}

/// Checks the ordering invariants of a band table.
///
/// Limits must be positive and strictly increasing, every rate must lie in
/// [0, 1], and exactly one band, the last, must be unbounded.
pub fn validate_bands(bands: &[TaxBand]) -> Result<(), ConfigError> {
    let Some(last) = bands.len().checked_sub(1) else {
        return Err(ConfigError::NoBands);
    };

    let mut previous: Option<Decimal> = None;
    for (index, band) in bands.iter().enumerate() {
        if band.rate < Decimal::ZERO || band.rate > Decimal::ONE {
            return Err(ConfigError::BandRateOutOfRange {
                index,
                rate: band.rate,
            });
        }

        let Some(limit) = band.limit else {
            if index != last {
                return Err(ConfigError::UnboundedBandNotLast { index });
            }
            continue;
        };

        if limit <= Decimal::ZERO {
            return Err(ConfigError::NonPositiveLimit { index, limit });
        }
        if let Some(previous) = previous {
            if limit <= previous {
                return Err(ConfigError::LimitNotIncreasing {
                    index,
                    limit,
                    previous,
                });
            }
        }
        previous = Some(limit);
    }

    if !bands[last].is_unbounded() {
        return Err(ConfigError::MissingUnboundedBand);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn nta_2025_is_valid() {
        assert_eq!(RegimeConfig::nta_2025().validate(), Ok(()));
    }

    #[test]
    fn nta_2025_values() {
        let config = RegimeConfig::nta_2025();

        assert_eq!(config.minimum_wage, dec!(840000));
        assert_eq!(config.bands.len(), 6);
        assert_eq!(config.bands[1], TaxBand::bounded(dec!(3000000), dec!(0.15)));
        assert_eq!(config.bands[5], TaxBand::unbounded(dec!(0.25)));
        assert_eq!(config.nhf_rate, dec!(0.025));
        assert_eq!(config.vat_rate, dec!(0.075));
        assert_eq!(config.severance_exemption, dec!(50000000));
        assert_eq!(config.tax_year, "2025");
        assert_eq!(config.effective_year, "2026");
    }

    #[test]
    fn empty_table_is_rejected() {
        assert_eq!(validate_bands(&[]), Err(ConfigError::NoBands));
    }

    #[test]
    fn single_unbounded_band_is_valid() {
        assert_eq!(validate_bands(&[TaxBand::unbounded(dec!(0.10))]), Ok(()));
    }

    #[test]
    fn unbounded_band_must_be_last() {
        let bands = vec![
            TaxBand::unbounded(dec!(0.10)),
            TaxBand::bounded(dec!(1000), dec!(0.20)),
            TaxBand::unbounded(dec!(0.30)),
        ];

        assert_eq!(
            validate_bands(&bands),
            Err(ConfigError::UnboundedBandNotLast { index: 0 })
        );
    }

    #[test]
    fn missing_unbounded_band_is_rejected() {
        let bands = vec![
            TaxBand::bounded(dec!(1000), dec!(0.10)),
            TaxBand::bounded(dec!(2000), dec!(0.20)),
        ];

        assert_eq!(validate_bands(&bands), Err(ConfigError::MissingUnboundedBand));
    }

    #[test]
    fn limits_must_strictly_increase() {
        let bands = vec![
            TaxBand::bounded(dec!(2000), dec!(0.10)),
            TaxBand::bounded(dec!(2000), dec!(0.20)),
            TaxBand::unbounded(dec!(0.30)),
        ];

        assert_eq!(
            validate_bands(&bands),
            Err(ConfigError::LimitNotIncreasing {
                index: 1,
                limit: dec!(2000),
                previous: dec!(2000),
            })
        );
    }

    #[test]
    fn non_positive_limit_is_rejected() {
        let bands = vec![TaxBand::bounded(dec!(0), dec!(0.10)), TaxBand::unbounded(dec!(0.2))];

        assert_eq!(
            validate_bands(&bands),
            Err(ConfigError::NonPositiveLimit {
                index: 0,
                limit: dec!(0),
            })
        );
    }

    #[test]
    fn band_rate_above_one_is_rejected() {
        let bands = vec![TaxBand::bounded(dec!(1000), dec!(1.5)), TaxBand::unbounded(dec!(0.2))];

        assert_eq!(
            validate_bands(&bands),
            Err(ConfigError::BandRateOutOfRange {
                index: 0,
                rate: dec!(1.5),
            })
        );
    }

    #[test]
    fn flat_rate_out_of_range_is_rejected() {
        let config = RegimeConfig {
            vat_rate: dec!(-0.075),
            ..RegimeConfig::nta_2025()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "vat_rate",
                rate: dec!(-0.075),
            })
        );
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let config = RegimeConfig {
            severance_exemption: dec!(-1),
            ..RegimeConfig::nta_2025()
        };

        assert_eq!(
            config.validate(),
            Err(ConfigError::NegativeAmount {
                name: "severance_exemption",
                amount: dec!(-1),
            })
        );
    }
}
