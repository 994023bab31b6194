//! Tax calculation modules.
//!
//! This module provides the calculation logic for personal income tax,
//! VAT and rent relief, plus the progressive band routine they share.

pub mod bands;
pub mod common;
pub mod input;
pub mod pit;
pub mod progressive;
pub mod rent_relief;
pub mod vat;

pub use bands::{BandSchedule, BandWidth, FormattedBand, format_amount, format_bands};
pub use input::{CalculationError, FieldMap, MAX_AMOUNT, coerce_amount};
pub use pit::{
    DeductionsBreakdown, IncomeBreakdown, PitAssessment, PitExemption, PitInput, PitOutcome,
    PitWorksheet, RentReliefBreakdown, SettlementType, SeveranceBreakdown, calculate_pit,
};
pub use progressive::progressive_tax;
pub use rent_relief::{RentReliefResult, calculate_rent_relief};
pub use vat::{VatConversion, VatMode, VatResult, calculate_vat};
