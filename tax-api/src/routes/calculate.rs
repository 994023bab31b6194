//! Calculator endpoints.
//!
//! - `POST /api/v1/calculate/pit`
//! - `POST /api/v1/calculate/vat`
//! - `POST /api/v1/calculate/rent-relief`
//!
//! `OPTIONS` on these paths is answered by the CORS layer in [`crate::app`].

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use tax_core::calculations::{PitOutcome, RentReliefResult, VatResult};

use crate::error::AppError;
use crate::extractors::Fields;
use crate::routes::Envelope;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/calculate/pit", post(calculate_pit))
        .route("/api/v1/calculate/vat", post(calculate_vat))
        .route("/api/v1/calculate/rent-relief", post(calculate_rent_relief))
}

/// PIT envelope; carries the regime label alongside the usual fields.
#[derive(Debug, Serialize)]
pub struct PitResponse {
    #[serde(flatten)]
    pub envelope: Envelope<PitOutcome>,
    pub compliance: String,
}

async fn calculate_pit(
    State(state): State<AppState>,
    Fields(fields): Fields,
) -> Result<Json<PitResponse>, AppError> {
    tracing::debug!(fields = fields.len(), "PIT calculation requested");

    let outcome = state.engine.calculate_pit(&fields)?;

    match &outcome {
        PitOutcome::Exempt(exemption) => {
            tracing::info!(gross_income = %exemption.gross_income, "PIT exempt");
        }
        PitOutcome::Assessed(assessment) => {
            tracing::info!(
                chargeable_income = %assessment.chargeable_income,
                tax_payable = %assessment.tax_payable,
                result_type = ?assessment.result_type,
                "PIT calculated"
            );
        }
    }

    Ok(Json(PitResponse {
        envelope: Envelope::new(outcome),
        compliance: state.engine.config().name.clone(),
    }))
}

async fn calculate_vat(
    State(state): State<AppState>,
    Fields(fields): Fields,
) -> Result<Json<Envelope<VatResult>>, AppError> {
    tracing::debug!(fields = fields.len(), "VAT calculation requested");

    let result = state.engine.calculate_vat(&fields)?;
    tracing::info!(
        conversion = ?result.conversion,
        vat_amount = %result.vat_amount,
        "VAT calculated"
    );

    Ok(Json(Envelope::new(result)))
}

async fn calculate_rent_relief(
    State(state): State<AppState>,
    Fields(fields): Fields,
) -> Result<Json<Envelope<RentReliefResult>>, AppError> {
    tracing::debug!(fields = fields.len(), "rent relief calculation requested");

    let result = state.engine.calculate_rent_relief(&fields)?;
    tracing::info!(
        actual_relief = %result.actual_relief,
        capped = result.capped,
        "rent relief calculated"
    );

    Ok(Json(Envelope::new(result)))
}
