use serde_json::{Map, Value};

use crate::error::PipelineError;

// ---------- Validated request ----------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Case-insensitive match on "male"; every other string falls in the
    /// female bucket. Two-valued encoding, never an error.
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("male") {
            Gender::Male
        } else {
            Gender::Female
        }
    }

    /// Numeric encoding the model was fit with: male 0, female 1.
    pub fn encoded(self) -> f64 {
        match self {
            Gender::Male => 0.0,
            Gender::Female => 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Cardio,
    Endurance,
    Strength,
    NoWorkout,
}

impl WorkoutType {
    pub const ALL: [WorkoutType; 4] = [
        WorkoutType::Cardio,
        WorkoutType::Endurance,
        WorkoutType::Strength,
        WorkoutType::NoWorkout,
    ];

    /// Case-sensitive match against the recognized labels. Anything else
    /// ("Yoga", typos, wrong case) silently coerces to NoWorkout.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Cardio" => WorkoutType::Cardio,
            "Endurance" => WorkoutType::Endurance,
            "Strength" => WorkoutType::Strength,
            _ => WorkoutType::NoWorkout,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WorkoutType::Cardio => "Cardio",
            WorkoutType::Endurance => "Endurance",
            WorkoutType::Strength => "Strength",
            WorkoutType::NoWorkout => "NoWorkout",
        }
    }
}

/// A fully validated workout description. Construction goes through
/// [`validate`]; once built, every numeric field is inside its documented
/// range and the categorical fields are normalized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutRequest {
    pub gender: Gender,
    pub age: f64,
    pub height: f64,
    pub weight: f64,
    pub duration: f64,
    pub workout_type: WorkoutType,
}

// ---------- Validation ----------

pub const AGE_RANGE: (f64, f64) = (10.0, 100.0);
pub const HEIGHT_RANGE: (f64, f64) = (50.0, 250.0);
pub const WEIGHT_RANGE: (f64, f64) = (20.0, 300.0);
pub const DURATION_RANGE: (f64, f64) = (1.0, 300.0);

// workoutType is deliberately absent here: it defaults to NoWorkout.
const REQUIRED_FIELDS: [&str; 5] = ["gender", "age", "height", "weight", "duration"];

/// Validate the raw JSON object delivered by the transport into a
/// [`WorkoutRequest`], or reject it with a structured error.
///
/// Checks run in order: presence of all required fields, numeric coercion,
/// range bounds. The first failing stage wins; no derived computation runs
/// on a rejected request.
pub fn validate(raw: &Map<String, Value>) -> Result<WorkoutRequest, PipelineError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| !raw.contains_key(**field))
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(PipelineError::MissingFields(missing));
    }

    let age = numeric_field(raw, "age")?;
    let height = numeric_field(raw, "height")?;
    let weight = numeric_field(raw, "weight")?;
    let duration = numeric_field(raw, "duration")?;

    check_range("age", age, AGE_RANGE)?;
    check_range("height", height, HEIGHT_RANGE)?;
    check_range("weight", weight, WEIGHT_RANGE)?;
    check_range("duration", duration, DURATION_RANGE)?;

    let gender = raw
        .get("gender")
        .and_then(Value::as_str)
        .map(Gender::parse)
        .unwrap_or(Gender::Female);

    let workout_type = raw
        .get("workoutType")
        .and_then(Value::as_str)
        .map(WorkoutType::parse)
        .unwrap_or(WorkoutType::NoWorkout);

    Ok(WorkoutRequest {
        gender,
        age,
        height,
        weight,
        duration,
        workout_type,
    })
}

/// Coerce a field to f64. JSON numbers pass through; numeric strings
/// ("45", " 45.5 ") are parsed. Anything else is a type error, distinct
/// from the field being absent.
fn numeric_field(raw: &Map<String, Value>, field: &'static str) -> Result<f64, PipelineError> {
    let value = &raw[field];
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(x) if x.is_finite() => Ok(x),
        _ => Err(PipelineError::InvalidType { field }),
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), PipelineError> {
    if value < min || value > max {
        return Err(PipelineError::OutOfRange {
            field,
            value,
            min,
            max,
        });
    }
    Ok(())
}
