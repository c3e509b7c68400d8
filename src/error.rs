//! Errors returned at the HTTP boundary.
//!
//! Clients only ever see one of two fixed messages; the underlying cause is
//! logged inside the request span and never sent back.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::scoring::ScoringError;

pub const MISSING_PARAMETERS_MESSAGE: &str = "Missing required parameters";
pub const CALCULATION_FAILED_MESSAGE: &str = "An error occurred while calculating risk";
pub const BODY_TOO_LARGE_MESSAGE: &str = "Request body too large";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A required field is absent or empty, or the body is not JSON
    #[error("Missing required parameters: {0}")]
    MissingParameters(String),

    /// Anything that fails after the presence check
    #[error("Risk calculation failed: {0}")]
    Calculation(ScoringError),

    /// Body exceeds `http.max_body_bytes`; rejected before parsing
    #[error("Request body too large")]
    BodyTooLarge,
}

impl From<ScoringError> for AppError {
    fn from(err: ScoringError) -> Self {
        match err {
            ScoringError::MissingParameter(field) => AppError::MissingParameters(field.to_string()),
            other => AppError::Calculation(other),
        }
    }
}

/// JSON error body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingParameters(_) => StatusCode::BAD_REQUEST,
            AppError::Calculation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::BodyTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    /// The fixed, client-facing message
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingParameters(_) => MISSING_PARAMETERS_MESSAGE,
            AppError::Calculation(_) => CALCULATION_FAILED_MESSAGE,
            AppError::BodyTooLarge => BODY_TOO_LARGE_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingParameters(detail) => {
                tracing::warn!(detail = %detail, "Rejected risk request");
            }
            AppError::Calculation(cause) => {
                tracing::error!(error = %cause, "Error in risk calculation");
            }
            AppError::BodyTooLarge => {
                tracing::warn!("Rejected oversized request body");
            }
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
