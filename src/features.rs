//! Feature assembly and schema reconciliation.

use std::collections::HashMap;

use crate::estimate::DerivedSignals;
use crate::request::{WorkoutRequest, WorkoutType};

/// Duration is fed to the model scaled by the session length the training
/// pipeline normalized against, not in raw minutes.
pub const DURATION_SCALE_MIN: f64 = 180.0;

/// Column name for a workout type's one-hot indicator.
pub fn one_hot_column(workout_type: WorkoutType) -> String {
    format!("workout_type_{}", workout_type.label())
}

/// Build the column→value mapping for one request: the passthrough numeric
/// fields, the encoded gender, normalized duration, both derived signals,
/// and a one-hot indicator per workout type (exactly one set to 1).
pub fn assemble_columns(req: &WorkoutRequest, signals: &DerivedSignals) -> HashMap<String, f64> {
    let mut columns = HashMap::new();
    columns.insert("Age".to_string(), req.age);
    columns.insert("Gender".to_string(), req.gender.encoded());
    columns.insert("Height".to_string(), req.height);
    columns.insert("Weight".to_string(), req.weight);
    columns.insert("Duration".to_string(), req.duration / DURATION_SCALE_MIN);
    columns.insert("Heart_Rate".to_string(), signals.heart_rate);
    columns.insert("Body_Temp".to_string(), signals.body_temp);
    for workout_type in WorkoutType::ALL {
        let active = workout_type == req.workout_type;
        columns.insert(one_hot_column(workout_type), if active { 1.0 } else { 0.0 });
    }
    columns
}

/// Reconcile produced columns against the model's declared schema.
///
/// The schema is the authoritative input order: every schema column absent
/// from `produced` gets 0.0, produced columns the schema does not name are
/// dropped. The assembler never fails merely because the model expects a
/// column the request side doesn't emit.
pub fn order_columns(produced: &HashMap<String, f64>, schema: &[String]) -> Vec<f64> {
    let mut vector = Vec::with_capacity(schema.len());
    for name in schema {
        vector.push(*produced.get(name).unwrap_or(&0.0));
    }
    vector
}
