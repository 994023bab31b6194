//! Route modules.
//!
//! - `health` - liveness probe.
//! - `calculate` - PIT, VAT and rent relief calculators.
//! - `bands` - the active band table rendered for display.

pub mod bands;
pub mod calculate;
pub mod health;

use serde::Serialize;

/// Success envelope shared by the calculator endpoints.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    /// Unix seconds at which the response was produced.
    pub timestamp: i64,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            timestamp: chrono::Utc::now().timestamp(),
        }
    }
}
