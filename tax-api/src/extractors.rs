//! Request extractors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use serde_json::Value;
use tax_core::FieldMap;

use crate::error::AppError;

/// A non-empty JSON object body, handed to the calculators untyped.
///
/// A body over the size limit is rejected with [`AppError::PayloadTooLarge`].
/// A missing body, a body that is not valid JSON, a non-object value and an
/// empty object are all rejected with [`AppError::NoData`]. Field-level
/// validation is left to the calculators.
#[derive(Debug, Clone)]
pub struct Fields(pub FieldMap);

impl<S> FromRequest<S> for Fields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(
        req: Request,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "unreadable request body");
                if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::PayloadTooLarge
                } else {
                    AppError::NoData
                }
            })?;

        match value {
            Value::Object(fields) if !fields.is_empty() => Ok(Fields(fields)),
            _ => Err(AppError::NoData),
        }
    }
}
