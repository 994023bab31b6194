//! Rent relief calculations.
//!
//! Relief is a fixed share of annual rent, capped at a statutory maximum:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Calculated relief: rent paid × relief rate (20%) |
//! | 2    | Actual relief: smaller of step 1 or the cap (₦500,000), never below 0 |
//! | 3    | Illustrative tax saving: actual relief × saving rate (20%) |
//!
//! The saving in step 3 assumes a single marginal rate and is an
//! approximation, not the caller's exact tax effect.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::RegimeConfig;
//! use tax_core::calculations::calculate_rent_relief;
//!
//! let result = calculate_rent_relief(dec!(3000000), &RegimeConfig::nta_2025());
//!
//! assert_eq!(result.calculated_relief, dec!(600000.00));
//! assert_eq!(result.actual_relief, dec!(500000.00));
//! assert!(result.capped);
//! assert_eq!(result.tax_saving, dec!(100000.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RegimeConfig;
use crate::calculations::common::{as_percent, min, non_negative, round_half_up};

/// Result of a standalone rent relief calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentReliefResult {
    /// Annual rent as supplied.
    pub rent_paid: Decimal,

    /// Rent × relief rate, before the cap.
    pub calculated_relief: Decimal,

    /// Relief actually allowed after the cap.
    pub actual_relief: Decimal,

    /// The statutory cap.
    pub max_limit: Decimal,

    /// Relief rate as a percentage.
    pub percentage: Decimal,

    /// Illustrative tax saving at the configured saving rate.
    pub tax_saving: Decimal,

    /// Whether the cap reduced the relief.
    pub capped: bool,
}

/// Calculated and allowed relief for a rent amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Relief {
    pub calculated: Decimal,
    pub applied: Decimal,
    pub capped: bool,
}

impl Relief {
    pub(crate) fn for_rent(
        rent_paid: Decimal,
        config: &RegimeConfig,
    ) -> Self {
        let calculated = rent_paid * config.rent_relief_rate;
        Self {
            calculated,
            applied: non_negative(min(calculated, config.rent_relief_cap)),
            capped: calculated > config.rent_relief_cap,
        }
    }
}

/// Computes rent relief for `rent_paid` under `config`.
pub fn calculate_rent_relief(
    rent_paid: Decimal,
    config: &RegimeConfig,
) -> RentReliefResult {
    let relief = Relief::for_rent(rent_paid, config);

    RentReliefResult {
        rent_paid,
        calculated_relief: round_half_up(relief.calculated),
        actual_relief: round_half_up(relief.applied),
        max_limit: config.rent_relief_cap,
        percentage: as_percent(config.rent_relief_rate),
        tax_saving: round_half_up(relief.applied * config.rent_relief_saving_rate),
        capped: relief.capped,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn relief_below_the_cap_is_twenty_percent() {
        let result = calculate_rent_relief(dec!(1000000), &RegimeConfig::nta_2025());

        assert_eq!(
            result,
            RentReliefResult {
                rent_paid: dec!(1000000),
                calculated_relief: dec!(200000),
                actual_relief: dec!(200000),
                max_limit: dec!(500000),
                percentage: dec!(20),
                tax_saving: dec!(40000),
                capped: false,
            }
        );
    }

    #[test]
    fn relief_exactly_at_the_cap_is_not_capped() {
        let result = calculate_rent_relief(dec!(2500000), &RegimeConfig::nta_2025());

        assert_eq!(result.actual_relief, dec!(500000));
        assert!(!result.capped);
    }

    #[test]
    fn relief_above_the_cap_is_limited() {
        let result = calculate_rent_relief(dec!(3000000), &RegimeConfig::nta_2025());

        assert_eq!(result.calculated_relief, dec!(600000));
        assert_eq!(result.actual_relief, dec!(500000));
        assert!(result.capped);
    }

    #[test]
    fn negative_rent_yields_no_relief() {
        let result = calculate_rent_relief(dec!(-100000), &RegimeConfig::nta_2025());

        assert_eq!(result.calculated_relief, dec!(-20000));
        assert_eq!(result.actual_relief, Decimal::ZERO);
        assert_eq!(result.tax_saving, Decimal::ZERO);
    }

    #[test]
    fn cap_follows_the_configuration() {
        let config = RegimeConfig {
            rent_relief_cap: dec!(750000),
            ..RegimeConfig::nta_2025()
        };

        let result = calculate_rent_relief(dec!(5000000), &config);

        assert_eq!(result.actual_relief, dec!(750000));
        assert_eq!(result.max_limit, dec!(750000));
    }
}
