//! Progressive tax over a band table.
//!
//! Each band taxes the slice of income between the previous band's limit and
//! its own limit at its marginal rate. The unbounded final band taxes
//! whatever remains.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::RegimeConfig;
//! use tax_core::calculations::progressive_tax;
//!
//! let bands = RegimeConfig::nta_2025().bands;
//!
//! // 800,000 × 0% + 2,200,000 × 15% + 1,426,000 × 18%
//! assert_eq!(progressive_tax(dec!(4426000), &bands), dec!(586680.00));
//! ```

use rust_decimal::Decimal;

use crate::TaxBand;
use crate::calculations::common::{min, round_half_up};

/// Computes the tax due on `income`, rounded to two decimal places.
///
/// Income of zero or less yields exactly zero. The band table is expected to
/// satisfy [`crate::validate_bands`]; if the final band is bounded, income
/// above it goes untaxed.
pub fn progressive_tax(
    income: Decimal,
    bands: &[TaxBand],
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for band in bands {
        if income <= previous_limit {
            break;
        }

        let upper = match band.limit {
            Some(limit) => min(income, limit),
            None => income,
        };

        tax += (upper - previous_limit) * band.rate;
        previous_limit = upper;
    }

    round_half_up(tax)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::RegimeConfig;

    fn nta_bands() -> Vec<TaxBand> {
        RegimeConfig::nta_2025().bands
    }

    #[test]
    fn zero_and_negative_income_pay_nothing() {
        let bands = nta_bands();

        assert_eq!(progressive_tax(Decimal::ZERO, &bands), Decimal::ZERO);
        assert_eq!(progressive_tax(dec!(-1000000), &bands), Decimal::ZERO);
    }

    #[test]
    fn income_inside_the_zero_rate_band_pays_nothing() {
        assert_eq!(progressive_tax(dec!(750000), &nta_bands()), dec!(0));
    }

    #[test]
    fn boundaries_equal_the_sum_of_full_lower_bands() {
        let bands = nta_bands();

        assert_eq!(progressive_tax(dec!(800000), &bands), dec!(0));
        assert_eq!(progressive_tax(dec!(3000000), &bands), dec!(330000));
        assert_eq!(progressive_tax(dec!(12000000), &bands), dec!(1950000));
        assert_eq!(progressive_tax(dec!(25000000), &bands), dec!(4680000));
        assert_eq!(progressive_tax(dec!(50000000), &bands), dec!(10430000));
    }

    #[test]
    fn marginal_rate_just_above_each_boundary_matches_the_band() {
        let bands = nta_bands();
        let limits = [
            dec!(800000),
            dec!(3000000),
            dec!(12000000),
            dec!(25000000),
            dec!(50000000),
        ];

        for (index, limit) in limits.into_iter().enumerate() {
            let step = dec!(100);
            let marginal =
                progressive_tax(limit + step, &bands) - progressive_tax(limit, &bands);
            assert_eq!(marginal, step * bands[index + 1].rate, "above {limit}");
        }
    }

    #[test]
    fn top_band_taxes_the_remainder() {
        // 10,430,000 + 10,000,000 × 25%
        assert_eq!(progressive_tax(dec!(60000000), &nta_bands()), dec!(12930000));
    }

    #[test]
    fn tax_is_non_decreasing_in_income() {
        let bands = nta_bands();
        let mut previous = Decimal::ZERO;
        let mut income = Decimal::ZERO;

        while income <= dec!(60000000) {
            let tax = progressive_tax(income, &bands);
            assert!(tax >= previous, "tax fell at income {income}");
            previous = tax;
            income += dec!(250000);
        }
    }

    #[test]
    fn result_is_rounded_to_two_places() {
        let bands = vec![TaxBand::unbounded(dec!(0.075))];

        assert_eq!(progressive_tax(dec!(100.33), &bands), dec!(7.52));
    }

    #[test]
    fn non_monotonic_rates_are_applied_as_given() {
        let bands = vec![
            TaxBand::bounded(dec!(1000), dec!(0.30)),
            TaxBand::unbounded(dec!(0.10)),
        ];

        assert_eq!(progressive_tax(dec!(2000), &bands), dec!(400));
    }
}
