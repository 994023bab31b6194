//! API error type.
//!
//! Calculators return typed errors; this module is the only place they are
//! turned into HTTP statuses and JSON envelopes. Internal details are logged
//! server-side and never returned to the caller.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tax_core::CalculationError;
use thiserror::Error;

/// JSON body of every failed request.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    /// Stable machine-readable code (e.g. "NO_DATA", "INVALID_INPUT").
    pub error: String,
    pub message: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    /// The request body was absent, unparseable or an empty object (400).
    #[error("No data provided")]
    NoData,

    /// The request body exceeded the configured size limit (413).
    #[error("Request body too large")]
    PayloadTooLarge,

    /// A field could not be used by the calculator (400).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] CalculationError),

    /// Any other fault (500). The message is logged but not returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NoData => (StatusCode::BAD_REQUEST, "NO_DATA"),
            Self::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE"),
            Self::InvalidInput(_) => (StatusCode::BAD_REQUEST, "INVALID_INPUT"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();

        let message = match &self {
            Self::NoData => "No data provided".to_string(),
            Self::PayloadTooLarge => format!(
                "Request body exceeds {} bytes",
                crate::MAX_BODY_BYTES
            ),
            Self::InvalidInput(err) => err.to_string(),
            Self::Internal(_) => "Calculation failed".to_string(),
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "request failed"),
            Self::InvalidInput(_) => tracing::warn!(error = %self, "rejected request input"),
            Self::NoData => tracing::debug!("request carried no data"),
            Self::PayloadTooLarge => tracing::warn!("rejected oversized request body"),
        }

        let body = ErrorBody {
            success: false,
            error: code.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}
