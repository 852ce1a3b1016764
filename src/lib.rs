//! Calorie burn estimation service.
//!
//! The caller posts a workout description (gender, age, height, weight,
//! duration, workout type); the pipeline validates it, derives the heart
//! rate and body temperature signals the model expects, assembles a
//! schema-ordered feature vector and hands it to the predictor. The model
//! itself is opaque: anything implementing [`model::Predictor`] will do.

pub mod error;
pub mod estimate;
pub mod features;
pub mod model;
pub mod request;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::PipelineError;
use crate::estimate::round2;
use crate::model::Predictor;

/// Successful pipeline output, serialized verbatim as the response body.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CalorieEstimate {
    pub calories_burned: f64,
    pub estimated_heart_rate: f64,
    pub estimated_body_temp: f64,
}

/// Run the full pipeline for one raw request object:
/// validate → derive signals → assemble → reconcile → predict.
///
/// Fails fast: a rejected request never reaches the estimator. The feature
/// vector is built fresh per call and dropped once the predictor has
/// consumed it.
pub fn calculate_calories(
    raw: &Map<String, Value>,
    predictor: &dyn Predictor,
) -> Result<CalorieEstimate, PipelineError> {
    let req = request::validate(raw)?;
    let signals = estimate::derive_signals(&req);

    let columns = features::assemble_columns(&req, &signals);
    let vector = features::order_columns(&columns, predictor.schema());
    tracing::debug!(
        in_dim = vector.len(),
        nonzero = vector.iter().filter(|x| **x != 0.0).count(),
        "assembled feature vector"
    );

    let calories = predictor
        .predict(&vector)
        .map_err(|e| PipelineError::Predictor(e.to_string()))?;

    Ok(CalorieEstimate {
        calories_burned: round2(calories),
        estimated_heart_rate: round2(signals.heart_rate),
        estimated_body_temp: signals.body_temp,
    })
}
