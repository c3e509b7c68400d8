//! Risk calculation endpoint.

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use serde_json::Value;
use tracing::instrument;

use crate::error::AppError;
use crate::scoring::{self, RiskOutput};

/// `POST /api/calculate-risk`
///
/// Responds with the full [`RiskOutput`] or one of the fixed error bodies;
/// never a partial result.
#[instrument(name = "risk::calculate", skip_all)]
pub async fn calculate(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RiskOutput>, AppError> {
    tracing::debug!("Received risk calculation request");

    // A body that is not JSON is treated as a request without parameters
    let Json(body) = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::BodyTooLarge
        } else {
            AppError::MissingParameters(rejection.body_text())
        }
    })?;

    let input = scoring::parse_request(&body)?;
    let output = scoring::assess(&input)?;

    tracing::info!(
        total_score = output.total_score,
        risk_category = ?output.risk_category,
        "Risk calculated"
    );

    Ok(Json(output))
}
