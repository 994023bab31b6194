//! Personal income tax under a progressive band regime.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Pension: 8% × (basic + housing + transport) |
//! | 2    | NHIS: 5% × basic |
//! | 3    | NHF: 2.5% × basic |
//! | 4    | Rent relief: smaller of 20% × rent or ₦500,000 |
//! | 5    | Total gross income: gross income + crypto gains + capital gains |
//! | 6    | Exempt if step 5 is at or below the minimum wage (stop here) |
//! | 7    | Total deductions: steps 1–4 + life insurance + mortgage interest |
//! | 8    | Chargeable income: step 5 − step 7, minimum 0 |
//! | 9    | Regular tax: progressive tax on step 8 |
//! | 10   | Severance tax: progressive tax on severance above ₦50,000,000 |
//! | 11   | Tax payable: step 9 + step 10 |
//! | 12   | Settle against PAYE already deducted: refund, additional or balanced |
//! | 13   | Effective rate: step 11 ÷ step 5 × 100 |
//!
//! `gross_income` is already net of the itemized salary components: basic,
//! housing and transport only feed the deduction formulas, never the income
//! totals. Rates, caps and thresholds come from [`RegimeConfig`].
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::RegimeConfig;
//! use tax_core::calculations::{PitInput, PitWorksheet, SettlementType};
//!
//! let config = RegimeConfig::nta_2025();
//! let input = PitInput {
//!     gross_income: dec!(5000000),
//!     basic_salary: dec!(2000000),
//!     housing_allowance: dec!(500000),
//!     transport_allowance: dec!(300000),
//!     rent_paid: dec!(1000000),
//!     paye_deducted: dec!(200000),
//!     ..PitInput::default()
//! };
//!
//! let outcome = PitWorksheet::new(&config).calculate(&input);
//! let assessment = outcome.assessment().unwrap();
//!
//! assert_eq!(assessment.total_deductions, dec!(574000));
//! assert_eq!(assessment.chargeable_income, dec!(4426000));
//! assert_eq!(assessment.tax_payable, dec!(586680));
//! assert_eq!(assessment.additional_tax, dec!(386680));
//! assert_eq!(assessment.result_type, SettlementType::Additional);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::RegimeConfig;
use crate::calculations::common::{as_percent, max, non_negative, round_half_up};
use crate::calculations::input::{CalculationError, FieldMap, coerce_amount};
use crate::calculations::progressive::progressive_tax;
use crate::calculations::rent_relief::Relief;

/// Message returned with a minimum-wage exemption.
pub const EXEMPT_MESSAGE: &str = "Tax exempt - Minimum wage earner";

/// Declared PIT input fields. Every field defaults to zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PitInput {
    /// Annual income net of the itemized salary components.
    pub gross_income: Decimal,
    pub basic_salary: Decimal,
    pub housing_allowance: Decimal,
    pub transport_allowance: Decimal,
    /// Annual rent paid, the base for rent relief.
    pub rent_paid: Decimal,
    pub life_insurance: Decimal,
    pub mortgage_interest: Decimal,
    /// Tax already withheld by the employer.
    pub paye_deducted: Decimal,
    pub crypto_gains: Decimal,
    pub capital_gains: Decimal,
    pub severance_pay: Decimal,
}

impl PitInput {
    /// Builds the input from a flat field map, coercing each declared field.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidAmount`] naming the first field that
    /// is present but not numeric.
    pub fn from_fields(fields: &FieldMap) -> Result<Self, CalculationError> {
        Ok(Self {
            gross_income: coerce_amount(fields, "gross_income")?,
            basic_salary: coerce_amount(fields, "basic_salary")?,
            housing_allowance: coerce_amount(fields, "housing_allowance")?,
            transport_allowance: coerce_amount(fields, "transport_allowance")?,
            rent_paid: coerce_amount(fields, "rent_paid")?,
            life_insurance: coerce_amount(fields, "life_insurance")?,
            mortgage_interest: coerce_amount(fields, "mortgage_interest")?,
            paye_deducted: coerce_amount(fields, "paye_deducted")?,
            crypto_gains: coerce_amount(fields, "crypto_gains")?,
            capital_gains: coerce_amount(fields, "capital_gains")?,
            severance_pay: coerce_amount(fields, "severance_pay")?,
        })
    }
}

/// How the computed liability settles against PAYE already deducted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementType {
    /// More PAYE was withheld than is owed.
    Refund,
    /// More is owed than was withheld.
    Additional,
    /// PAYE exactly covers the liability.
    Balanced,
}

/// Result for a taxpayer at or below the minimum wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitExemption {
    pub exempt: bool,
    pub minimum_wage: Decimal,
    /// Total gross income (salary + crypto + capital gains).
    pub gross_income: Decimal,
    pub message: String,
}

/// Deductions applied before progressive tax. Amounts rounded to 2 places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionsBreakdown {
    pub pension: Decimal,
    pub nhis: Decimal,
    pub nhf: Decimal,
    pub rent_relief: Decimal,
    pub life_insurance: Decimal,
    pub mortgage_interest: Decimal,
}

/// Income sources that make up the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeBreakdown {
    pub salary: Decimal,
    pub crypto_gains: Decimal,
    pub capital_gains: Decimal,
    pub severance_pay: Decimal,
}

/// How severance pay was taxed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceBreakdown {
    pub severance_pay: Decimal,
    pub exemption: Decimal,
    pub taxable: Decimal,
    pub tax: Decimal,
}

/// How rent relief was derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentReliefBreakdown {
    pub rent_paid: Decimal,
    pub calculated: Decimal,
    pub applied: Decimal,
    pub capped: bool,
}

/// Full PIT assessment for a taxpayer above the minimum wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitAssessment {
    pub exempt: bool,
    pub total_gross_income: Decimal,
    pub total_deductions: Decimal,
    pub chargeable_income: Decimal,

    /// Tax on chargeable income.
    pub regular_tax: Decimal,

    /// Tax on severance pay above the exemption.
    pub severance_tax: Decimal,

    /// Regular tax plus severance tax.
    pub tax_payable: Decimal,

    pub paye_deducted: Decimal,
    pub refund_amount: Decimal,
    pub additional_tax: Decimal,
    pub result_type: SettlementType,

    /// Tax payable as a percentage of total gross income.
    pub effective_rate: Decimal,

    pub rent_relief_capped: bool,
    pub deductions_breakdown: DeductionsBreakdown,
    pub income_breakdown: IncomeBreakdown,
    pub severance_breakdown: SeveranceBreakdown,
    pub rent_relief_breakdown: RentReliefBreakdown,
}

/// Outcome of a PIT calculation.
///
/// Serializes as either the exemption or the assessment object; both carry
/// an `exempt` flag so callers can tell them apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PitOutcome {
    Exempt(PitExemption),
    Assessed(PitAssessment),
}

impl PitOutcome {
    pub fn is_exempt(&self) -> bool {
        matches!(self, Self::Exempt(_))
    }

    pub fn assessment(&self) -> Option<&PitAssessment> {
        match self {
            Self::Assessed(assessment) => Some(assessment),
            Self::Exempt(_) => None,
        }
    }

    pub fn exemption(&self) -> Option<&PitExemption> {
        match self {
            Self::Exempt(exemption) => Some(exemption),
            Self::Assessed(_) => None,
        }
    }
}

/// Statutory deductions derived from salary components and rent.
#[derive(Debug, Clone, Copy)]
struct DerivedDeductions {
    pension: Decimal,
    nhis: Decimal,
    nhf: Decimal,
    rent: Relief,
}

/// Refund/additional split against PAYE.
#[derive(Debug, Clone, Copy)]
struct Settlement {
    refund_amount: Decimal,
    additional_tax: Decimal,
    result_type: SettlementType,
}

/// Calculator for personal income tax.
///
/// Borrows the regime configuration and computes each step of the
/// assessment, culminating in tax payable and its settlement against PAYE.
#[derive(Debug, Clone)]
pub struct PitWorksheet<'a> {
    config: &'a RegimeConfig,
}

impl<'a> PitWorksheet<'a> {
    pub fn new(config: &'a RegimeConfig) -> Self {
        Self { config }
    }

    /// Runs the full calculation for `input`.
    pub fn calculate(
        &self,
        input: &PitInput,
    ) -> PitOutcome {
        let deductions = self.derived_deductions(input);
        let total_gross_income = self.total_gross_income(input);

        if total_gross_income <= self.config.minimum_wage {
            return PitOutcome::Exempt(PitExemption {
                exempt: true,
                minimum_wage: self.config.minimum_wage,
                gross_income: total_gross_income,
                message: EXEMPT_MESSAGE.to_string(),
            });
        }

        let total_deductions = self.total_deductions(&deductions, input);
        let chargeable_income = self.chargeable_income(total_gross_income, total_deductions);

        let regular_tax = progressive_tax(chargeable_income, &self.config.bands);
        let (taxable_severance, severance_tax) = self.severance_tax(input.severance_pay);
        let tax_payable = regular_tax + severance_tax;

        let settlement = self.settle(tax_payable, input.paye_deducted);
        let effective_rate = self.effective_rate(tax_payable, total_gross_income);

        PitOutcome::Assessed(PitAssessment {
            exempt: false,
            total_gross_income,
            total_deductions: round_half_up(total_deductions),
            chargeable_income: round_half_up(chargeable_income),
            regular_tax,
            severance_tax,
            tax_payable,
            paye_deducted: input.paye_deducted,
            refund_amount: settlement.refund_amount,
            additional_tax: settlement.additional_tax,
            result_type: settlement.result_type,
            effective_rate,
            rent_relief_capped: deductions.rent.capped,
            deductions_breakdown: DeductionsBreakdown {
                pension: round_half_up(deductions.pension),
                nhis: round_half_up(deductions.nhis),
                nhf: round_half_up(deductions.nhf),
                rent_relief: round_half_up(deductions.rent.applied),
                life_insurance: input.life_insurance,
                mortgage_interest: input.mortgage_interest,
            },
            income_breakdown: IncomeBreakdown {
                salary: input.gross_income,
                crypto_gains: input.crypto_gains,
                capital_gains: input.capital_gains,
                severance_pay: input.severance_pay,
            },
            severance_breakdown: SeveranceBreakdown {
                severance_pay: input.severance_pay,
                exemption: self.config.severance_exemption,
                taxable: taxable_severance,
                tax: severance_tax,
            },
            rent_relief_breakdown: RentReliefBreakdown {
                rent_paid: input.rent_paid,
                calculated: round_half_up(deductions.rent.calculated),
                applied: round_half_up(deductions.rent.applied),
                capped: deductions.rent.capped,
            },
        })
    }

    /// Pension, NHIS, NHF and rent relief, each clamped at zero.
    fn derived_deductions(
        &self,
        input: &PitInput,
    ) -> DerivedDeductions {
        let pensionable =
            input.basic_salary + input.housing_allowance + input.transport_allowance;

        DerivedDeductions {
            pension: non_negative(pensionable * self.config.pension_rate),
            nhis: non_negative(input.basic_salary * self.config.nhis_rate),
            nhf: non_negative(input.basic_salary * self.config.nhf_rate),
            rent: Relief::for_rent(input.rent_paid, self.config),
        }
    }

    fn total_gross_income(
        &self,
        input: &PitInput,
    ) -> Decimal {
        input.gross_income + input.crypto_gains + input.capital_gains
    }

    /// Derived deductions plus life insurance and mortgage interest as declared.
    fn total_deductions(
        &self,
        deductions: &DerivedDeductions,
        input: &PitInput,
    ) -> Decimal {
        deductions.pension
            + deductions.nhis
            + deductions.nhf
            + deductions.rent.applied
            + input.life_insurance
            + input.mortgage_interest
    }

    fn chargeable_income(
        &self,
        total_gross_income: Decimal,
        total_deductions: Decimal,
    ) -> Decimal {
        max(total_gross_income - total_deductions, Decimal::ZERO)
    }

    /// Returns the taxable portion of severance pay and the tax on it.
    fn severance_tax(
        &self,
        severance_pay: Decimal,
    ) -> (Decimal, Decimal) {
        if severance_pay <= Decimal::ZERO {
            return (Decimal::ZERO, Decimal::ZERO);
        }

        let taxable = non_negative(severance_pay - self.config.severance_exemption);
        (taxable, progressive_tax(taxable, &self.config.bands))
    }

    fn settle(
        &self,
        tax_payable: Decimal,
        paye_deducted: Decimal,
    ) -> Settlement {
        if paye_deducted > tax_payable {
            return Settlement {
                refund_amount: paye_deducted - tax_payable,
                additional_tax: Decimal::ZERO,
                result_type: SettlementType::Refund,
            };
        }

        let additional_tax = tax_payable - paye_deducted;
        Settlement {
            refund_amount: Decimal::ZERO,
            additional_tax,
            result_type: if additional_tax > Decimal::ZERO {
                SettlementType::Additional
            } else {
                SettlementType::Balanced
            },
        }
    }

    fn effective_rate(
        &self,
        tax_payable: Decimal,
        total_gross_income: Decimal,
    ) -> Decimal {
        if total_gross_income.is_zero() {
            return Decimal::ZERO;
        }
        round_half_up(as_percent(tax_payable / total_gross_income))
    }
}

/// Coerces `fields` and runs the PIT calculation under `config`.
///
/// # Errors
///
/// Returns [`CalculationError::InvalidAmount`] if any declared field is not
/// numeric. No partial result is produced.
pub fn calculate_pit(
    fields: &FieldMap,
    config: &RegimeConfig,
) -> Result<PitOutcome, CalculationError> {
    let input = PitInput::from_fields(fields)?;
    Ok(PitWorksheet::new(config).calculate(&input))
}
