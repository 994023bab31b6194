use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive-rate schedule.
///
/// `limit` is the upper cumulative income bound of the band. The final band
/// of a schedule has no limit and taxes everything above the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBand {
    #[serde(default)]
    pub limit: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBand {
    pub fn bounded(
        limit: Decimal,
        rate: Decimal,
    ) -> Self {
        Self {
            limit: Some(limit),
            rate,
        }
    }

    pub fn unbounded(rate: Decimal) -> Self {
        Self { limit: None, rate }
    }

    pub fn is_unbounded(&self) -> bool {
        self.limit.is_none()
    }
}
