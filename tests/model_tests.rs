/// Integration tests for the persisted linear model artifact.
///
/// Run with: cargo test --test model_tests
use std::io::Write;

use calorie_predictor::model::{LinearModel, Predictor};

fn write_artifact(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("tempfile");
    file.write_all(contents.as_bytes()).expect("write artifact");
    file
}

#[test]
fn test_load_and_predict() {
    let file = write_artifact(
        r#"{
            "feat_list": ["Age", "Weight", "Heart_Rate"],
            "weights": [2.0, 0.5, 1.0],
            "intercept": 10.0
        }"#,
    );

    let model = LinearModel::load(file.path().to_str().unwrap()).expect("load");
    assert_eq!(model.schema(), ["Age", "Weight", "Heart_Rate"]);

    // 10 + 2*30 + 0.5*70 + 1*120 = 225
    let calories = model.predict(&[30.0, 70.0, 120.0]).expect("predict");
    assert!((calories - 225.0).abs() < 1e-9, "got {}", calories);
}

#[test]
fn test_prediction_is_deterministic() {
    let file = write_artifact(
        r#"{"feat_list": ["A", "B"], "weights": [1.5, -0.25], "intercept": 3.0}"#,
    );
    let model = LinearModel::load(file.path().to_str().unwrap()).unwrap();

    let first = model.predict(&[4.0, 8.0]).unwrap();
    let second = model.predict(&[4.0, 8.0]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_weight_column_mismatch_is_rejected() {
    let file = write_artifact(
        r#"{"feat_list": ["A", "B", "C"], "weights": [1.0, 2.0], "intercept": 0.0}"#,
    );
    let err = LinearModel::load(file.path().to_str().unwrap()).unwrap_err();
    assert!(
        err.to_string().contains("mismatch"),
        "unexpected error: {}",
        err
    );
}

#[test]
fn test_empty_schema_is_rejected() {
    let file = write_artifact(r#"{"feat_list": [], "weights": [], "intercept": 0.0}"#);
    assert!(LinearModel::load(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_malformed_artifact_is_rejected() {
    let file = write_artifact("not json at all");
    assert!(LinearModel::load(file.path().to_str().unwrap()).is_err());
}

#[test]
fn test_missing_artifact_is_rejected() {
    assert!(LinearModel::load("/nonexistent/calorie_model.json").is_err());
}

#[test]
fn test_predict_rejects_wrong_vector_length() {
    let file = write_artifact(
        r#"{"feat_list": ["A", "B"], "weights": [1.0, 2.0], "intercept": 0.0}"#,
    );
    let model = LinearModel::load(file.path().to_str().unwrap()).unwrap();

    let err = model.predict(&[1.0]).unwrap_err();
    assert!(
        err.to_string().contains("feature length mismatch"),
        "unexpected error: {}",
        err
    );
}
