//! Derived physiological signals.
//!
//! The model was fit on heart rate and body temperature columns the caller
//! does not supply, so both are synthesized here from the validated request.
//! Pure functions, total over the validated domain.

use crate::request::{WorkoutRequest, WorkoutType};

/// Assumed resting heart rate in beats per minute.
pub const RESTING_HEART_RATE: f64 = 70.0;

/// Normal core body temperature in °C.
pub const BASE_BODY_TEMP: f64 = 37.0;

/// Plausibility bounds for the heart rate estimate.
const HEART_RATE_BOUNDS: (f64, f64) = (60.0, 200.0);

/// Floor for the diminishing-efficiency factor; very long sessions never
/// imply near-zero elevation.
const MIN_DURATION_FACTOR: f64 = 0.5;

impl WorkoutType {
    /// Fraction of heart rate reserve engaged by this kind of workout.
    pub fn intensity_factor(self) -> f64 {
        match self {
            WorkoutType::Cardio => 0.85,
            WorkoutType::Endurance => 0.70,
            WorkoutType::Strength => 0.50,
            WorkoutType::NoWorkout => 0.30,
        }
    }

    /// Body temperature rise in °C per hour of activity.
    pub fn temp_increase_rate(self) -> f64 {
        match self {
            WorkoutType::Cardio => 1.5,
            WorkoutType::Endurance => 1.0,
            WorkoutType::Strength => 0.6,
            WorkoutType::NoWorkout => 0.2,
        }
    }
}

/// Heart rate and body temperature computed for one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedSignals {
    /// Beats per minute, clamped to [60, 200].
    pub heart_rate: f64,
    /// °C, rounded to 2 decimals.
    pub body_temp: f64,
}

pub fn derive_signals(req: &WorkoutRequest) -> DerivedSignals {
    DerivedSignals {
        heart_rate: estimate_heart_rate(req.age, req.workout_type, req.duration),
        body_temp: estimate_body_temp(req.duration, req.workout_type),
    }
}

/// Estimate average heart rate from age, workout type and session length.
///
/// Karvonen-style: resting rate plus a fraction of heart rate reserve
/// (max 220 − age), scaled down as the session stretches out. The result
/// is clamped to a physiologically plausible band whatever the input
/// combination.
pub fn estimate_heart_rate(age: f64, workout_type: WorkoutType, duration_min: f64) -> f64 {
    let max_hr = 220.0 - age;
    let duration_factor = (1.0 - duration_min / 180.0).max(MIN_DURATION_FACTOR);
    let hr = RESTING_HEART_RATE
        + (max_hr - RESTING_HEART_RATE) * workout_type.intensity_factor() * duration_factor;
    hr.clamp(HEART_RATE_BOUNDS.0, HEART_RATE_BOUNDS.1)
}

/// Estimate body temperature after `duration_min` minutes of activity:
/// normal core temperature plus the workout type's hourly rise.
pub fn estimate_body_temp(duration_min: f64, workout_type: WorkoutType) -> f64 {
    round2(BASE_BODY_TEMP + workout_type.temp_increase_rate() * (duration_min / 60.0))
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
