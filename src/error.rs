use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Everything that can go wrong between a raw request and a prediction.
///
/// Validation variants fire before any derived computation runs; the
/// predictor variant is the only server-side failure. All of them surface
/// to the caller as `{"error": "..."}` with a status code carrying the
/// client/server distinction.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// One or more required fields absent from the request body.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),

    /// A field was present but not coercible to a number.
    #[error("{field} must be a number")]
    InvalidType { field: &'static str },

    /// A numeric field fell outside its documented bounds.
    #[error("{field} {value} outside valid range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// The external predictor rejected the feature vector or failed outright.
    #[error("prediction failed: {0}")]
    Predictor(String),
}

impl PipelineError {
    pub fn status(&self) -> StatusCode {
        match self {
            PipelineError::Predictor(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for PipelineError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
