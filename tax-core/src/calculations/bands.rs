//! Human-readable rendering of a band table.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::TaxBand;
use crate::calculations::common::as_percent;
use crate::calculations::progressive::progressive_tax;

/// Width of a band: a finite amount, or unlimited for the top band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandWidth {
    Amount(Decimal),
    Unlimited,
}

impl Serialize for BandWidth {
    fn serialize<S: Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match self {
            Self::Amount(amount) => Serialize::serialize(amount, serializer),
            Self::Unlimited => serializer.serialize_str("Unlimited"),
        }
    }
}

/// One band rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedBand {
    /// e.g. "₦800,000 - ₦3,000,000" or "Above ₦50,000,000".
    pub range: String,
    pub amount_in_band: BandWidth,
    /// Marginal rate as a percentage.
    pub rate: Decimal,
    /// e.g. "15%".
    pub rate_display: String,
    /// Tax already due on all lower bands at this band's lower bound.
    pub base_tax: Decimal,
}

/// A rendered band table together with the exemption threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BandSchedule {
    pub minimum_wage: Decimal,
    pub bands: Vec<FormattedBand>,
}

/// Renders `bands` as an ordered list of labelled ranges.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::RegimeConfig;
/// use tax_core::calculations::format_bands;
///
/// let config = RegimeConfig::nta_2025();
/// let schedule = format_bands(&config.bands, config.minimum_wage, "₦");
///
/// assert_eq!(schedule.bands[1].range, "₦800,000 - ₦3,000,000");
/// assert_eq!(schedule.bands[2].base_tax, dec!(330000));
/// assert_eq!(schedule.bands[5].range, "Above ₦50,000,000");
/// ```
pub fn format_bands(
    bands: &[TaxBand],
    minimum_wage: Decimal,
    currency: &str,
) -> BandSchedule {
    let mut previous_limit = Decimal::ZERO;
    let mut formatted = Vec::with_capacity(bands.len());

    for band in bands {
        let lower = format_amount(previous_limit);
        let (range, amount_in_band) = match band.limit {
            Some(limit) => (
                format!("{currency}{lower} - {currency}{}", format_amount(limit)),
                BandWidth::Amount(limit - previous_limit),
            ),
            None => (format!("Above {currency}{lower}"), BandWidth::Unlimited),
        };

        let rate = as_percent(band.rate);
        formatted.push(FormattedBand {
            range,
            amount_in_band,
            rate,
            rate_display: format!("{rate}%"),
            base_tax: progressive_tax(previous_limit, bands),
        });

        if let Some(limit) = band.limit {
            previous_limit = limit;
        }
    }

    BandSchedule {
        minimum_wage,
        bands: formatted,
    }
}

/// Formats a whole-currency amount with `,` thousands separators.
pub fn format_amount(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    let digits = rounded.abs().trunc().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;
    use crate::RegimeConfig;

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(0)), "0");
        assert_eq!(format_amount(dec!(999)), "999");
        assert_eq!(format_amount(dec!(1000)), "1,000");
        assert_eq!(format_amount(dec!(800000)), "800,000");
        assert_eq!(format_amount(dec!(50000000)), "50,000,000");
        assert_eq!(format_amount(dec!(1234567.5)), "1,234,568");
        assert_eq!(format_amount(dec!(-2500)), "-2,500");
    }

    #[test]
    fn nta_schedule_renders_every_band() {
        let config = RegimeConfig::nta_2025();
        let schedule = format_bands(&config.bands, config.minimum_wage, "₦");

        let ranges: Vec<_> = schedule.bands.iter().map(|b| b.range.as_str()).collect();
        assert_eq!(
            ranges,
            vec![
                "₦0 - ₦800,000",
                "₦800,000 - ₦3,000,000",
                "₦3,000,000 - ₦12,000,000",
                "₦12,000,000 - ₦25,000,000",
                "₦25,000,000 - ₦50,000,000",
                "Above ₦50,000,000",
            ]
        );

        let displays: Vec<_> = schedule.bands.iter().map(|b| b.rate_display.as_str()).collect();
        assert_eq!(displays, vec!["0%", "15%", "18%", "21%", "23%", "25%"]);

        let base: Vec<_> = schedule.bands.iter().map(|b| b.base_tax).collect();
        assert_eq!(
            base,
            vec![
                dec!(0),
                dec!(0),
                dec!(330000),
                dec!(1950000),
                dec!(4680000),
                dec!(10430000),
            ]
        );
        assert_eq!(schedule.minimum_wage, dec!(840000));
    }

    #[test]
    fn band_widths_are_differences_between_limits() {
        let config = RegimeConfig::nta_2025();
        let schedule = format_bands(&config.bands, config.minimum_wage, "₦");

        assert_eq!(schedule.bands[0].amount_in_band, BandWidth::Amount(dec!(800000)));
        assert_eq!(schedule.bands[2].amount_in_band, BandWidth::Amount(dec!(9000000)));
        assert_eq!(schedule.bands[5].amount_in_band, BandWidth::Unlimited);
    }

    #[test]
    fn unlimited_width_serializes_as_text() {
        let config = RegimeConfig::nta_2025();
        let schedule = format_bands(&config.bands, config.minimum_wage, "₦");

        let json = serde_json::to_value(&schedule).unwrap();

        assert_eq!(json["bands"][5]["amount_in_band"], json!("Unlimited"));
        assert_eq!(json["bands"][1]["amount_in_band"], json!(2200000.0));
        assert_eq!(json["bands"][1]["rate"], json!(15.0));
    }

    #[test]
    fn fractional_rates_keep_their_precision() {
        let bands = vec![TaxBand::bounded(dec!(1000), dec!(0.075)), TaxBand::unbounded(dec!(0.1))];

        let schedule = format_bands(&bands, dec!(0), "$");

        assert_eq!(schedule.bands[0].rate_display, "7.5%");
        assert_eq!(schedule.bands[1].range, "Above $1,000");
    }
}
