//! Coercion of loosely-typed request fields into decimal amounts.
//!
//! Callers hand the calculators a flat JSON object. Each declared field is
//! read independently:
//!
//! | JSON value            | Result                                   |
//! |-----------------------|------------------------------------------|
//! | absent or `null`      | `0`                                      |
//! | number                | its exact decimal value                  |
//! | string                | trimmed, `,` separators removed, parsed  |
//! | empty string          | `0`                                      |
//! | bool / array / object | [`CalculationError::InvalidAmount`]      |
//!
//! Amounts larger in magnitude than [`MAX_AMOUNT`] are rejected with
//! [`CalculationError::AmountOutOfRange`], which keeps every downstream sum
//! and product well inside `Decimal`'s range. Fields the calculators do not
//! declare are ignored.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

/// Flat mapping of named input fields as received from a caller.
pub type FieldMap = serde_json::Map<String, Value>;

/// Largest accepted magnitude for a single amount (10^15).
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0); // 1_000_000_000_000_000

/// Errors that can occur while preparing calculator input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalculationError {
    /// A declared field could not be interpreted as a number.
    #[error("field '{field}' is not a valid amount: {value}")]
    InvalidAmount { field: String, value: String },

    /// The VAT conversion direction is neither `net` nor `gross`.
    #[error("unsupported VAT calculation type {0}; expected \"net\" or \"gross\"")]
    UnsupportedVatMode(String),

    /// A declared field is numeric but larger in magnitude than [`MAX_AMOUNT`].
    #[error("field '{field}' is out of range: {value}")]
    AmountOutOfRange { field: String, value: String },
}

/// Reads `field` from `fields` as a decimal amount.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidAmount`] if the value is present but
/// cannot be interpreted as a number, and
/// [`CalculationError::AmountOutOfRange`] if it exceeds [`MAX_AMOUNT`].
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use serde_json::json;
/// use tax_core::calculations::coerce_amount;
///
/// let body = json!({ "rent_paid": "1,000,000", "paye_deducted": 200000 });
/// let fields = body.as_object().unwrap();
///
/// assert_eq!(coerce_amount(fields, "rent_paid").unwrap(), dec!(1000000));
/// assert_eq!(coerce_amount(fields, "paye_deducted").unwrap(), dec!(200000));
/// assert_eq!(coerce_amount(fields, "life_insurance").unwrap(), dec!(0));
/// ```
pub fn coerce_amount(
    fields: &FieldMap,
    field: &str,
) -> Result<Decimal, CalculationError> {
    let invalid = |value: &Value| CalculationError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
    };

    let (value, amount) = match fields.get(field) {
        None | Some(Value::Null) => return Ok(Decimal::ZERO),
        Some(value @ Value::Number(number)) => (
            value,
            parse_decimal(&number.to_string()).ok_or_else(|| invalid(value))?,
        ),
        Some(value @ Value::String(text)) => {
            let normalized = text.trim().replace(',', "");
            if normalized.is_empty() {
                return Ok(Decimal::ZERO);
            }
            (
                value,
                parse_decimal(&normalized).ok_or_else(|| invalid(value))?,
            )
        }
        Some(value) => return Err(invalid(value)),
    };

    if amount.abs() > MAX_AMOUNT {
        return Err(CalculationError::AmountOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    Ok(amount)
}

/// Parses plain or scientific decimal notation.
fn parse_decimal(text: &str) -> Option<Decimal> {
    Decimal::from_str(text)
        .or_else(|_| Decimal::from_scientific(text))
        .ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use serde_json::json;

    use super::*;

    fn fields(value: Value) -> FieldMap {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn absent_and_null_fields_are_zero() {
        let fields = fields(json!({ "gross_income": null }));

        assert_eq!(coerce_amount(&fields, "gross_income"), Ok(Decimal::ZERO));
        assert_eq!(coerce_amount(&fields, "basic_salary"), Ok(Decimal::ZERO));
    }

    #[test]
    fn integer_and_float_numbers_are_exact() {
        let fields = fields(json!({ "a": 5000000, "b": 1234.56, "c": -250 }));

        assert_eq!(coerce_amount(&fields, "a"), Ok(dec!(5000000)));
        assert_eq!(coerce_amount(&fields, "b"), Ok(dec!(1234.56)));
        assert_eq!(coerce_amount(&fields, "c"), Ok(dec!(-250)));
    }

    #[test]
    fn large_floats_in_exponent_form_are_accepted() {
        let fields = fields(json!({ "severance_pay": 6e7 }));

        assert_eq!(coerce_amount(&fields, "severance_pay"), Ok(dec!(60000000)));
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let fields = fields(json!({ "a": " 2,500,000.50 ", "b": "", "c": "1.5e3" }));

        assert_eq!(coerce_amount(&fields, "a"), Ok(dec!(2500000.50)));
        assert_eq!(coerce_amount(&fields, "b"), Ok(Decimal::ZERO));
        assert_eq!(coerce_amount(&fields, "c"), Ok(dec!(1500)));
    }

    #[test]
    fn non_numeric_string_is_rejected() {
        let fields = fields(json!({ "rent_paid": "a lot" }));

        assert_eq!(
            coerce_amount(&fields, "rent_paid"),
            Err(CalculationError::InvalidAmount {
                field: "rent_paid".to_string(),
                value: "\"a lot\"".to_string(),
            })
        );
    }

    #[test]
    fn booleans_and_containers_are_rejected() {
        let fields = fields(json!({ "a": true, "b": [1, 2], "c": { "n": 1 } }));

        for field in ["a", "b", "c"] {
            assert!(
                matches!(
                    coerce_amount(&fields, field),
                    Err(CalculationError::InvalidAmount { .. })
                ),
                "expected {field} to be rejected"
            );
        }
    }

    #[test]
    fn amount_at_the_limit_is_accepted() {
        let fields = fields(json!({ "gross_income": "1,000,000,000,000,000", "paye_deducted": -1e15 }));

        assert_eq!(coerce_amount(&fields, "gross_income"), Ok(MAX_AMOUNT));
        assert_eq!(coerce_amount(&fields, "paye_deducted"), Ok(-MAX_AMOUNT));
    }

    #[test]
    fn amounts_beyond_the_limit_are_rejected() {
        let huge = "50000000000000000000000000000";
        let fields = fields(json!({ "gross_income": huge, "rent_paid": -1e16 }));

        assert_eq!(
            coerce_amount(&fields, "gross_income"),
            Err(CalculationError::AmountOutOfRange {
                field: "gross_income".to_string(),
                value: format!("\"{huge}\""),
            })
        );
        assert!(matches!(
            coerce_amount(&fields, "rent_paid"),
            Err(CalculationError::AmountOutOfRange { .. })
        ));
    }
}
