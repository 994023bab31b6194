//! `GET /api/v1/tax-bands`

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::calculations::FormattedBand;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/tax-bands", get(tax_bands))
}

#[derive(Debug, Serialize)]
pub struct TaxBandsResponse {
    pub success: bool,
    pub data: Vec<FormattedBand>,
    pub year: String,
    pub effective_date: String,
    pub minimum_wage: Decimal,
}

async fn tax_bands(State(state): State<AppState>) -> Json<TaxBandsResponse> {
    let config = state.engine.config();
    let schedule = state.engine.band_schedule();

    tracing::debug!(bands = schedule.bands.len(), "serving band schedule");

    Json(TaxBandsResponse {
        success: true,
        data: schedule.bands,
        year: config.tax_year.clone(),
        effective_date: config.effective_date.clone(),
        minimum_wage: schedule.minimum_wage,
    })
}
