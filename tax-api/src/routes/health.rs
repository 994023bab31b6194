//! `GET /health`

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: &'static str,
    pub year: String,
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let config = state.engine.config();

    Json(HealthResponse {
        status: "healthy",
        service: format!("{} Tax API", config.name),
        version: env!("CARGO_PKG_VERSION"),
        year: config.effective_year.clone(),
    })
}
